use anyhow::Context;
use std::{fs, path::Path};

/// Creates the directory `path` will live in. No-op when it already exists.
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {:?}", parent)),
        _ => Ok(()),
    }
}
