//! Skeleton generator for the installation directory
//!
//! Creates `server_files/` and the directories the server expects inside it.

use snafu::ResultExt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoSnafu, Result};

/// Result of skeleton generation
#[derive(Debug, Default)]
pub struct SkeletonResult {
    pub created: Vec<PathBuf>,
    pub already_existed: Vec<PathBuf>,
}

/// Create a single directory. `Ok(true)` when it was newly created.
pub fn create_directory(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).context(IoSnafu { path })?;
    Ok(true)
}

/// Create every directory in `dirs`, recording which ones already existed
pub fn create_skeleton<I, P>(dirs: I) -> Result<SkeletonResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut result = SkeletonResult::default();

    for dir in dirs {
        let path = dir.as_ref().to_path_buf();
        if create_directory(&path)? {
            result.created.push(path);
        } else {
            result.already_existed.push(path);
        }
    }

    Ok(result)
}
