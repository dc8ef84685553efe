use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use crate::errors::AssetError;

/// Atomic file write: write to a uniquely named temp file beside the target,
/// then rename it over the target. A symlinked `path` has its link target
/// replaced, so the link itself survives.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), AssetError> {
    let target = resolve_link(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on an error path removes it.
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// Truncate and overwrite `path` in place.
pub fn overwrite(path: &Path, content: &[u8]) -> Result<(), AssetError> {
    std::fs::write(path, content)?;
    Ok(())
}

fn resolve_link(path: &Path) -> Result<Cow<'_, Path>, AssetError> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => Ok(Cow::Owned(std::fs::canonicalize(path)?)),
        _ => Ok(Cow::Borrowed(path)),
    }
}
