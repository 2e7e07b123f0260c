//! License (EULA) acceptance
//!
//! The server writes `eula.txt` on its first run as two comment lines
//! followed by `eula=false`. Acceptance is positional, not key based: the
//! third line is dropped and `eula=true` is appended at the end. This keeps
//! the exact file shape the server expects, so it stays separate from the
//! key based patcher.
//!
//! Re-applying to a standard three line file is a no-op. On a longer file
//! every application removes whatever sits on line three and appends
//! another `eula=true`.

use snafu::ensure;
use std::path::Path;

use crate::config::patcher::{line_body, read_lines, write_lines};
use crate::error::{MissingPropertySnafu, Result};

/// File name of the license file inside the installation directory
pub const EULA_FILE_NAME: &str = "eula.txt";

pub const EULA_ACCEPTED: &str = "eula=true";

/// Zero-based index of the "not yet accepted" declaration
const DECLARATION_INDEX: usize = 2;

/// Accept the license by replacing the third line with a trailing
/// `eula=true`
pub fn accept_eula(path: &Path) -> Result<()> {
    let mut lines = read_lines(path)?;
    ensure!(
        lines.len() > DECLARATION_INDEX,
        MissingPropertySnafu { key: "eula", file: path }
    );

    lines.remove(DECLARATION_INDEX);

    // The appended declaration must start on a line of its own
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') {
            last.push('\n');
        }
    }
    lines.push(format!("{EULA_ACCEPTED}\n"));

    write_lines(path, &lines)
}

/// Whether the license file already declares acceptance anywhere
pub fn is_eula_accepted(path: &Path) -> Result<bool> {
    Ok(read_lines(path)?
        .iter()
        .any(|line| line_body(line).trim().eq_ignore_ascii_case(EULA_ACCEPTED)))
}
