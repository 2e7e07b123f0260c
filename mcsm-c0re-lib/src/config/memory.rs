//! RAM configuration file (`ram_config.msf`)
//!
//! First line is `ram=<megabytes>`, followed by free text telling the
//! operator how to change it. Resolution is total: anything that does not
//! parse as a positive `ram=<int>` line is rewritten to the default.

use snafu::ResultExt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::creator_log::{CreatorLog, Topic};
use crate::error::{IoSnafu, Result};

/// File name of the memory config inside the installation directory
pub const RAM_CONFIG_FILE_NAME: &str = "ram_config.msf";

const RAM_PREFIX: &str = "ram=";

const INSTRUCTIONS: &str = "Change the value above to allocate more or less RAM to the server. \
The measuring unit is MB (Megabytes)";

/// Contents written whenever the file is created or repaired
pub fn default_ram_config(memory_mb: u32) -> String {
    format!("{RAM_PREFIX}{memory_mb}\n{INSTRUCTIONS}")
}

/// Parse the first line of a RAM config. `None` for anything malformed.
fn parse_ram(content: &[u8]) -> Option<u32> {
    let first = content.split(|b| *b == b'\n').next()?;
    let first = std::str::from_utf8(first).ok()?;
    let value = first.strip_prefix(RAM_PREFIX)?;
    value.trim().parse::<u32>().ok().filter(|mb| *mb > 0)
}

/// Resolve the configured RAM in megabytes, creating or repairing the file
/// with `default_mb` when needed
pub fn resolve_memory_mb(install_dir: &Path, default_mb: u32, log: &CreatorLog) -> Result<u32> {
    let path = install_dir.join(RAM_CONFIG_FILE_NAME);
    log.record(Topic::General, "Checking server RAM");

    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log.record(
                Topic::General,
                format!("Creating RAM file. Default RAM is {default_mb}MB."),
            );
            write_default(&path, default_mb)?;
            return Ok(default_mb);
        }
        Err(e) => return Err(e).context(IoSnafu { path: &path }),
    };

    log.record(Topic::General, "Parsing RAM");
    match parse_ram(&content) {
        Some(mb) => {
            log.record(Topic::General, format!("RAM is {mb}MB"));
            Ok(mb)
        }
        None => {
            log.record(
                Topic::General,
                format!(
                    "Creating RAM file. Default RAM is {default_mb}MB. \
                     (This may have happened due to a bad file extension, file corruption or others.)"
                ),
            );
            write_default(&path, default_mb)?;
            Ok(default_mb)
        }
    }
}

fn write_default(path: &Path, default_mb: u32) -> Result<()> {
    fs::write(path, default_ram_config(default_mb)).context(IoSnafu { path })
}
