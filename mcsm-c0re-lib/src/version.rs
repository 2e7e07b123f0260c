//! Version information for the mcsm ecosystem
//!
//! mcsm-c0re-lib is the single source of truth; mcsm-cli inherits it
//! through `[workspace.package]`.

/// Crate version, shared by every workspace member
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program tag used as the prefix of creator log lines
pub const PROGRAM_TAG: &str = "-MCSM";
