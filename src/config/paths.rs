//! Path management for Little Ledger
//!
//! Provides XDG-compliant path resolution for the workspace directory.
//!
//! ## Path Resolution Order
//!
//! 1. `LITTLE_LEDGER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/little-ledger` or `~/.local/share/little-ledger`
//! 3. Windows: `%APPDATA%\little-ledger`

use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Environment variable that overrides the workspace directory
pub const DIR_ENV_VAR: &str = "LITTLE_LEDGER_DIR";

/// Manages all paths used by the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPaths {
    /// Base directory for all ledger data
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the workspace location from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Workspace configuration file (`config.json`)
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory holding one JSON file per account
    pub fn accounts_dir(&self) -> PathBuf {
        self.base_dir.join("accounts")
    }

    /// File backing the named account
    ///
    /// The name is not validated here; see `Workspace::account_path`.
    pub fn account_file(&self, name: &str) -> PathBuf {
        self.accounts_dir().join(format!("{}.json", name))
    }

    /// Append-only audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and accounts directories exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.accounts_dir())
            .map_err(|e| LedgerError::Io(format!("Failed to create accounts directory: {}", e)))?;

        Ok(())
    }

    /// Check if the workspace has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.config_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    if let Some(data_home) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(data_home).join("little-ledger"));
    }

    let home = std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| LedgerError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("little-ledger"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| LedgerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("little-ledger"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.accounts_dir(), temp_dir.path().join("accounts"));
        assert_eq!(paths.config_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_account_file() {
        let paths = LedgerPaths::with_base_dir("/ledger");
        assert_eq!(
            paths.account_file("savings"),
            PathBuf::from("/ledger/accounts/savings.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.accounts_dir().is_dir());
        assert!(!paths.is_initialized());
    }
}
