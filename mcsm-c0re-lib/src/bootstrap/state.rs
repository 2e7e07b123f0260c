//! Bootstrap state detection
//!
//! The state is never stored; it is read off the installation directory
//! every time.

use std::fmt;
use std::path::Path;

use crate::config::{EULA_FILE_NAME, is_eula_accepted};
use crate::error::Result;
use crate::profile::ServerProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    /// Server jar absent
    Uninstalled,
    /// Resources copied, server has not generated its files yet
    Provisioned,
    /// License file exists but is not accepted
    LicensePending,
    /// Ready to launch
    Ready,
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BootstrapState::Uninstalled => "uninstalled",
            BootstrapState::Provisioned => "provisioned",
            BootstrapState::LicensePending => "license pending",
            BootstrapState::Ready => "ready",
        };
        f.write_str(s)
    }
}

/// Derive the bootstrap state of `install_dir` for `profile`
pub fn detect_state(install_dir: &Path, profile: &ServerProfile) -> Result<BootstrapState> {
    if !install_dir.join(profile.binary_file_name()).is_file() {
        return Ok(BootstrapState::Uninstalled);
    }

    let eula = install_dir.join(EULA_FILE_NAME);
    if !eula.is_file() {
        return Ok(BootstrapState::Provisioned);
    }

    if is_eula_accepted(&eula)? {
        Ok(BootstrapState::Ready)
    } else {
        Ok(BootstrapState::LicensePending)
    }
}
