//! Error types for the bootstrap core
//!
//! Port contention and a corrupt RAM file are recovered locally and never
//! show up here. Everything in [`BootstrapError`] is fatal for a run.

use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum BootstrapError {
    /// The staging area is missing, incomplete, or a copy out of it failed
    #[snafu(display(
        "Resources folder is missing files: {} is either empty, missing files, or non-existent (try to reinstall the program)",
        staging.display()
    ))]
    LostResources { staging: PathBuf },

    /// A required key is absent from an existing config file
    #[snafu(display("Could not find property \"{key}\" at ({})", file.display()))]
    MissingProperty { key: String, file: PathBuf },

    /// Every candidate port in the profile's range refused the bind
    #[snafu(display("No free port found in range {start}..{end}"))]
    NoFreePort { start: u16, end: u16 },

    /// A profile file could not be loaded or stored
    #[snafu(display("Failed to load server profile {}: {source}", path.display()))]
    Profile {
        path: PathBuf,
        source: confy::ConfyError,
    },

    /// The server process could not be started at all
    #[snafu(display("Failed to execute: {command}: {source}"))]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[snafu(display("I/O error at {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T, E = BootstrapError> = std::result::Result<T, E>;
