//! Plugin / mod inventory
//!
//! Lists the `.jar` files in the addon directory for the launch banner.
//! The directory is created if missing; its contents are never modified.

use snafu::ResultExt;
use std::fs;
use std::path::Path;

use crate::bootstrap::skeleton::create_directory;
use crate::creator_log::{CreatorLog, Topic};
use crate::error::{IoSnafu, Result};

fn is_jar(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
}

/// Names of the installed addons, sorted
pub fn list_addons(install_dir: &Path, addon_dir: &str, log: &CreatorLog) -> Result<Vec<String>> {
    let dir = install_dir.join(addon_dir);
    log.record(Topic::General, format!("Finding {addon_dir} folder"));

    create_directory(&dir)?;

    let mut addons = Vec::new();
    for entry in fs::read_dir(&dir).context(IoSnafu { path: &dir })? {
        let entry = entry.context(IoSnafu { path: &dir })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_jar(&name) {
            log.record(Topic::General, format!("Found plugin \"{name}\""));
            addons.push(name);
        }
    }

    addons.sort();
    Ok(addons)
}
