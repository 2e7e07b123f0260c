//! Running the server process
//!
//! The child inherits stdin/stdout/stderr and the caller blocks until it
//! exits. Its exit status is logged but never acted on.

use snafu::ResultExt;
use std::io;
use std::path::Path;

use crate::error::{LaunchSnafu, Result};

/// Runs an argument vector with a working directory
pub trait Launcher {
    /// `argv[0]` is the program. Blocks until the process exits.
    fn launch(&mut self, install_dir: &Path, argv: &[String]) -> Result<()>;
}

/// Launches real processes through `duct`
#[derive(Debug, Clone, Copy, Default)]
pub struct DuctLauncher;

impl Launcher for DuctLauncher {
    fn launch(&mut self, install_dir: &Path, argv: &[String]) -> Result<()> {
        let command = argv.join(" ");
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector"))
            .context(LaunchSnafu {
                command: command.as_str(),
            })?;

        tracing::debug!("running `{command}` in {}", install_dir.display());
        let output = duct::cmd(program, args)
            .dir(install_dir)
            .unchecked()
            .run()
            .context(LaunchSnafu {
                command: command.as_str(),
            })?;

        tracing::info!("`{command}` exited with {}", output.status);
        Ok(())
    }
}
