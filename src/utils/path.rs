//! Path utilities: expand ~ and resolve companion files next to the ledger.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve `name` relative to the directory holding `anchor`, unless it is
/// already absolute.
pub fn sibling_of(anchor: &Path, name: &str) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() {
        return p;
    }
    match anchor.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(p),
        _ => p,
    }
}
