//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Atomically replace a file's contents
///
/// Writes to a sibling temp file, syncs it, then renames it over the target.
/// Readers see either the old contents or the new ones, never a mix.
pub async fn atomic_write(target_path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = temp_path_for(target_path);

    let mut file = fs::File::create(&temp_path).await?;
    file.write_all(content).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(&temp_path, target_path).await?;

    Ok(())
}

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}
