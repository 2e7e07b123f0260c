//! Resource provisioning from the staging area
//!
//! Every artifact is verified before any is copied, so a staging area with
//! a missing artifact leaves the installation untouched. Directory
//! artifacts are copied recursively and merge into existing directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::creator_log::{CreatorLog, Topic};
use crate::error::{BootstrapError, Result};
use crate::profile::{Artifact, ArtifactKind};

fn lost_resources(staging: &Path, install: &Path, log: &CreatorLog) -> BootstrapError {
    log.record(
        Topic::Error,
        format!(
            "Resources were lost. Program closed. <---------------- Directory at ({}) \
             is either empty, missing files, or non-existent. Try to reinstall the program! \
             (server files at {})",
            staging.display(),
            install.display()
        ),
    );
    BootstrapError::LostResources {
        staging: staging.to_path_buf(),
    }
}

fn is_present(path: &Path, kind: ArtifactKind) -> bool {
    match kind {
        ArtifactKind::File => path.is_file(),
        ArtifactKind::Dir => path.is_dir(),
    }
}

/// Copy a directory tree into `dst`, merging with whatever is already there
fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Copy `artifacts` from `staging` into `install`, all or nothing.
///
/// Returns the provisioned paths inside `install`, in artifact order.
pub fn provision(
    staging: &Path,
    install: &Path,
    artifacts: &[Artifact],
    log: &CreatorLog,
) -> Result<Vec<PathBuf>> {
    for artifact in artifacts {
        let source = staging.join(&artifact.name);
        if !is_present(&source, artifact.kind) {
            log.record(
                Topic::General,
                format!("Failed to load resource {}.", source.display()),
            );
            return Err(lost_resources(staging, install, log));
        }
        log.record(
            Topic::General,
            format!("Loaded resource {}.", source.display()),
        );
    }

    let mut provisioned = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let source = staging.join(&artifact.name);
        let target = install.join(&artifact.name);

        let copied = match artifact.kind {
            ArtifactKind::File => fs::copy(&source, &target).map(|_| ()),
            ArtifactKind::Dir => copy_dir_all(&source, &target),
        };
        if let Err(e) = copied {
            log.record(
                Topic::Error,
                format!("Failed to send resource {}: {e}", source.display()),
            );
            return Err(lost_resources(staging, install, log));
        }

        log.record(
            Topic::General,
            format!(
                "Sent resource {} to ({})",
                source.display(),
                install.display()
            ),
        );
        provisioned.push(target);
    }

    Ok(provisioned)
}
