use crate::defines::{self, MacroSpec};
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};

/// Reads the whole header into memory.
pub fn read_header(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    String::from_utf8(bytes).map_err(|_| anyhow!("{} is not valid UTF-8", path.display()))
}

/// Overwrites the header with `contents`. Not atomic.
pub fn write_header(
    path: &Path,
    contents: &str,
) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// One read-modify-write pass setting a single define.
///
/// The file is only written once the new value has been validated, and it
/// is written even when nothing in it changed.
pub fn apply_define(
    path: &Path,
    spec: &MacroSpec,
    target: i64,
) -> Result<()> {
    let original = read_header(path)?;
    let updated = defines::rewrite(&original, spec, target)?;
    if updated == original {
        tracing::debug!("{} already at {} in {:?}", spec.name, target, display_path(path));
    }
    write_header(path, &updated)
}

/// Canonical form of `path` for log output, falling back to the path as given.
pub fn display_path(path: &Path) -> std::path::PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
