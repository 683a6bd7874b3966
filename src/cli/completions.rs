//! Static shell completions

use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write the completion script for `shell` to stdout
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_mentions_commands() {
        let mut cmd = Cli::command();
        let mut out = Vec::new();
        generate(Shell::Bash, &mut cmd, "ciac", &mut out);
        let script = String::from_utf8(out).unwrap();

        assert!(script.contains("recharged"));
        assert!(script.contains("--protocol"));
    }
}
