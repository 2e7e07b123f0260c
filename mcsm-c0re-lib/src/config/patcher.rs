//! Read-mutate-write primitive for line oriented config files
//!
//! Files are split into lines that keep their own terminators, so a patch
//! touches exactly one line and leaves every other byte alone. The new
//! content is computed in memory and written back with a single overwrite.

use snafu::{OptionExt, ResultExt};
use std::fs;
use std::path::Path;

use crate::error::{IoSnafu, MissingPropertySnafu, Result};

/// Read a file as lines, each keeping its `\n` / `\r\n` terminator
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    Ok(split_lines(&content))
}

/// Overwrite a file with the concatenation of `lines`
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.concat()).context(IoSnafu { path })
}

pub(crate) fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Line content without its terminator
pub(crate) fn line_body(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// The terminator of a line ("" for an unterminated last line)
fn line_ending(line: &str) -> &str {
    &line[line_body(line).len()..]
}

/// Replace the first line matching `predicate` with `new_line`, in place.
///
/// `predicate` sees each line without its terminator; the replacement
/// inherits the terminator of the line it replaces. Returns the index of
/// the replaced line, or `None` when nothing matched, in which case the
/// file is left untouched and the caller decides what that means.
pub fn patch_line<P>(path: &Path, predicate: P, new_line: &str) -> Result<Option<usize>>
where
    P: Fn(&str) -> bool,
{
    let mut lines = read_lines(path)?;

    let Some(index) = lines.iter().position(|line| predicate(line_body(line))) else {
        return Ok(None);
    };

    let replacement = format!("{new_line}{}", line_ending(&lines[index]));
    lines[index] = replacement;
    write_lines(path, &lines)?;

    Ok(Some(index))
}

/// Set `key=value` on the line that already declares `key`.
///
/// A config that lacks the key entirely is malformed for our purposes and
/// fails with `MissingProperty`.
pub fn patch_property(path: &Path, key: &str, value: &str) -> Result<usize> {
    let prefix = format!("{key}=");
    patch_line(path, |line| line.starts_with(&prefix), &format!("{prefix}{value}"))?
        .context(MissingPropertySnafu { key, file: path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;
    use tempfile::tempdir;

    fn properties_fixture() -> String {
        [
            "#Minecraft server properties",
            "#Fri Oct 16 12:00:00 UTC 2026",
            "spawn-protection=16",
            "max-tick-time=60000",
            "server-port=25565",
            "query.port=25565",
            "gamemode=survival",
            "motd=A Minecraft Server",
            "online-mode=true",
            "max-players=20",
        ]
        .iter()
        .map(|l| format!("{l}\n"))
        .collect()
    }

    #[test]
    fn test_patch_preserves_position_and_other_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("server.properties");
        let original = properties_fixture();
        fs::write(&path, &original).unwrap();

        let index = patch_property(&path, "server-port", "30000").unwrap();
        assert_eq!(index, 4);

        let before: Vec<&str> = original.lines().collect();
        let after_content = fs::read_to_string(&path).unwrap();
        let after: Vec<&str> = after_content.lines().collect();

        assert_eq!(after.len(), 10);
        assert_eq!(after[4], "server-port=30000");
        for i in (0..10).filter(|i| *i != 4) {
            assert_eq!(before[i], after[i], "line {i} changed");
        }
        assert!(after_content.ends_with('\n'));
    }

    #[test]
    fn test_patch_matches_by_prefix_not_substring() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("server.properties");
        fs::write(&path, "query.server-port=1\nserver-port=2\n").unwrap();

        let index = patch_property(&path, "server-port", "3").unwrap();
        assert_eq!(index, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "query.server-port=1\nserver-port=3\n"
        );
    }

    #[test]
    fn test_patch_keeps_crlf_and_unterminated_last_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.properties");
        fs::write(&path, "a=1\r\nb=2").unwrap();

        patch_property(&path, "a", "9").unwrap();
        patch_property(&path, "b", "8").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a=9\r\nb=8");
    }

    #[test]
    fn test_patch_only_first_match() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dup.properties");
        fs::write(&path, "k=1\nk=2\n").unwrap();

        patch_property(&path, "k", "0").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "k=0\nk=2\n");
    }

    #[test]
    fn test_missing_key_is_error_and_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("server.properties");
        fs::write(&path, "motd=hello\n").unwrap();

        let err = patch_property(&path, "server-port", "25565").unwrap_err();
        match err {
            BootstrapError::MissingProperty { key, file } => {
                assert_eq!(key, "server-port");
                assert_eq!(file, path);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "motd=hello\n");
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = patch_line(&dir.path().join("nope"), |_| true, "x").unwrap_err();
        assert!(matches!(err, BootstrapError::Io { .. }));
    }

    #[test]
    fn test_line_body() {
        assert_eq!(line_body("a=1\r\n"), "a=1");
        assert_eq!(line_body("a=1\n"), "a=1");
        assert_eq!(line_body("a=1"), "a=1");
        assert_eq!(line_ending("a=1\r\n"), "\r\n");
        assert_eq!(line_ending("a=1"), "");
    }
}
