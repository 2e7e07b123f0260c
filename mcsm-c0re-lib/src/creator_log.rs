//! Append-only progress log kept inside the installation directory
//!
//! Every event becomes one line in `server_files/creator_logs`:
//!
//! ```text
//! [16/10/2026 - 9:5][-MCSM- SERVER] Checking port "25565"
//! ```
//!
//! Each line is mirrored to `tracing` so `RUST_LOG` shows the same trail on
//! stderr. A failing sink is reported through `tracing` and otherwise
//! ignored; losing a progress line never aborts a bootstrap.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::version::PROGRAM_TAG;

/// File name of the log inside the installation directory
pub const LOG_FILE_NAME: &str = "creator_logs";

/// Which part of the program a log line comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    General,
    Server,
    Eula,
    Error,
}

impl Topic {
    fn tag(self) -> String {
        match self {
            Topic::General => format!("[{PROGRAM_TAG}]"),
            Topic::Server => format!("[{PROGRAM_TAG}- SERVER]"),
            Topic::Eula => format!("[{PROGRAM_TAG}- SERVER.EULA]"),
            Topic::Error => format!("[{PROGRAM_TAG}- ERROR]"),
        }
    }
}

/// Handle to the creator log of one installation
#[derive(Debug, Clone)]
pub struct CreatorLog {
    path: PathBuf,
}

impl CreatorLog {
    pub fn new(install_dir: &Path) -> Self {
        Self {
            path: install_dir.join(LOG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event line stamped with the local time
    pub fn record(&self, topic: Topic, message: impl AsRef<str>) {
        let message = message.as_ref();
        match topic {
            Topic::Error => tracing::error!("{message}"),
            _ => tracing::info!("{message}"),
        }

        let line = format_line(&Local::now(), topic, message);
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        if let Err(e) = written {
            tracing::warn!("could not append to {}: {e}", self.path.display());
        }
    }
}

/// Render a single log line, newline included
fn format_line<Tz: TimeZone>(now: &DateTime<Tz>, topic: Topic, message: &str) -> String {
    format!(
        "[{}/{}/{} - {}:{}]{} {}\n",
        now.day(),
        now.month(),
        now.year(),
        now.hour(),
        now.minute(),
        topic.tag(),
        message
    )
}
