//! Configuration module for Little Ledger
//!
//! This module provides workspace management including:
//! - XDG-compliant path resolution
//! - The persisted active-account pointer
//! - Mapping account names to their backing files

pub mod paths;
pub mod workspace;

pub use paths::LedgerPaths;
pub use workspace::{Workspace, WorkspaceConfig};
