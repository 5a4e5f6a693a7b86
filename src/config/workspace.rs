//! Workspace configuration
//!
//! A workspace is a directory of account files plus a small `config.json`
//! recording which account commands target by default. Everything is passed
//! around explicitly through `Workspace`; nothing depends on the process
//! working directory.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::file_io::{read_json, write_json_atomic};

/// Maximum length of an account name
pub const MAX_ACCOUNT_NAME_LEN: usize = 64;

/// Persisted workspace settings (`config.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Account targeted when a command does not name one
    #[serde(
        rename = "activeAccount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub active_account: Option<String>,
}

impl WorkspaceConfig {
    /// Load the config, or defaults if the file doesn't exist yet
    pub fn load_or_default(paths: &LedgerPaths) -> LedgerResult<Self> {
        read_json(paths.config_file()).map_err(|e| match e {
            LedgerError::Parse(msg) => {
                LedgerError::Config(format!("Failed to parse workspace config: {}", msg))
            }
            other => other,
        })
    }

    /// Save the config to disk
    pub fn save(&self, paths: &LedgerPaths) -> LedgerResult<()> {
        write_json_atomic(paths.config_file(), self)
    }
}

/// An open workspace: resolved paths plus the loaded config
#[derive(Debug, Clone)]
pub struct Workspace {
    paths: LedgerPaths,
    config: WorkspaceConfig,
}

impl Workspace {
    /// Open the workspace at `paths`, loading `config.json` if present
    pub fn open(paths: LedgerPaths) -> LedgerResult<Self> {
        let config = WorkspaceConfig::load_or_default(&paths)?;
        debug!(base = %paths.base_dir().display(), "opened workspace");
        Ok(Self { paths, config })
    }

    /// Create directories and write the config file
    pub fn init(&self) -> LedgerResult<()> {
        self.paths.ensure_directories()?;
        self.config.save(&self.paths)
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Resolve an account name to the file backing it
    pub fn account_path(&self, name: &str) -> LedgerResult<PathBuf> {
        validate_account_name(name)?;
        Ok(self.paths.account_file(name))
    }

    /// Check whether the named account has a backing file
    pub fn account_exists(&self, name: &str) -> LedgerResult<bool> {
        Ok(self.account_path(name)?.is_file())
    }

    /// Names of all accounts in the workspace, sorted
    pub fn account_names(&self) -> LedgerResult<Vec<String>> {
        let dir = self.paths.accounts_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir)
            .map_err(|e| LedgerError::Io(format!("Failed to list {}: {}", dir.display(), e)))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_account_name(stem).is_ok() {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// The active account name, if one is set
    pub fn active_account(&self) -> Option<&str> {
        self.config.active_account.as_deref()
    }

    /// Pick the explicitly named account, falling back to the active one
    pub fn resolve_account<'a>(&'a self, name: Option<&'a str>) -> LedgerResult<&'a str> {
        name.or_else(|| self.active_account()).ok_or_else(|| {
            LedgerError::Config(
                "No account given and no active account set. Use 'ledger account use <name>'."
                    .into(),
            )
        })
    }

    /// Make `name` the active account and persist the change
    pub fn set_active(&mut self, name: &str) -> LedgerResult<()> {
        if !self.account_exists(name)? {
            return Err(LedgerError::account_not_found(name));
        }
        self.config.active_account = Some(name.to_string());
        self.config.save(&self.paths)
    }

    /// Clear the active account pointer and persist the change
    pub fn clear_active(&mut self) -> LedgerResult<()> {
        self.config.active_account = None;
        self.config.save(&self.paths)
    }

    /// Delete the file backing `name`
    pub fn remove_account_file(&self, name: &str) -> LedgerResult<()> {
        let path = self.account_path(name)?;
        fs::remove_file(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LedgerError::account_not_found(name)
            } else {
                LedgerError::Io(format!("Failed to remove {}: {}", path.display(), e))
            }
        })
    }
}

/// Check that a name is usable as an account file name
///
/// Names are 1-64 characters of ASCII letters, digits, `-`, `_` or `.`,
/// and may not start with `.`.
pub fn validate_account_name(name: &str) -> LedgerResult<()> {
    if name.is_empty() {
        return Err(LedgerError::Validation(
            "Account name cannot be empty".into(),
        ));
    }

    if name.len() > MAX_ACCOUNT_NAME_LEN {
        return Err(LedgerError::Validation(format!(
            "Account name too long ({} chars, max {})",
            name.len(),
            MAX_ACCOUNT_NAME_LEN
        )));
    }

    if name.starts_with('.') {
        return Err(LedgerError::Validation(format!(
            "Account name cannot start with '.': {}",
            name
        )));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(LedgerError::Validation(format!(
            "Account name may only contain letters, digits, '-', '_' and '.': {}",
            name
        )));
    }

    Ok(())
}
