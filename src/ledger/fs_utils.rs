//! Whole-file replacement helpers shared by the ledger and the balance file.

use crate::errors::AppResult;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary sibling used while a file is being replaced.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to a sibling temp file, then rename it over `path`.
/// Either the old or the new content is on disk, never a truncated mix.
pub(crate) fn replace_file(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp, path) {
        fs::remove_file(&tmp).ok();
        return Err(e.into());
    }

    Ok(())
}
