//! Shared CLI argument types
//!
//! Reusable argument structs that can be flattened into commands.

mod common;
mod global;
mod pagination;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use pagination::RecordArgs;
