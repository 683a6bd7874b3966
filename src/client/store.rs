//! File-backed credential persistence

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

use super::token::Credential;

/// Persists a single [`Credential`] as JSON at a configured path.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// concurrent `load` sees either the old token or the new one.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored credential, `Ok(None)` when nothing has been saved yet
    pub fn load(&self) -> Result<Option<Credential>, StorageError> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Token file {} does not exist", self.path.display());
                return Ok(None);
            }
            Err(err) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    message: err.to_string(),
                });
            }
        };

        let credential = serde_json::from_slice(&data).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(credential))
    }

    /// Overwrite the stored credential
    pub fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        let write_err = |e: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = serde_json::to_vec_pretty(credential).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let tmp_path = self.tmp_path();
        {
            let mut file = std::fs::File::create(&tmp_path).map_err(write_err)?;
            file.write_all(&contents).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }

        // Token grants account access, keep it owner-only on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }

        std::fs::rename(&tmp_path, &self.path).map_err(write_err)?;
        log::debug!("Saved token to {}", self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
