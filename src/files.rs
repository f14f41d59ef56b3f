//! Filesystem helpers for assembling inventories.

use crate::error::Result;
use serde::Serialize;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Path of `to` relative to the directory `from_dir`. Both must be absolute.
pub fn relative_path(from_dir: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = to.components().collect();
    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for part in &to[common..] {
        relative.push(part.as_os_str());
    }
    relative
}

#[cfg(unix)]
fn create_symlink(src: &Path, dest: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dest)
}

#[cfg(windows)]
fn create_symlink(src: &Path, dest: &Path) -> io::Result<()> {
    let target = dest.parent().map(|p| p.join(src)).unwrap_or_else(|| src.to_path_buf());
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(src, dest)
    } else {
        std::os::windows::fs::symlink_file(src, dest)
    }
}

/// Link `src` into `dest_dir` through a relative symlink, optionally under a
/// different file name. An existing entry at the destination is replaced.
pub fn relsymlink(src: &Path, dest_dir: &Path, dest_name: Option<&str>) -> Result<PathBuf> {
    if !src.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "Can't link {} to {}. Source does not exist.",
                src.display(),
                dest_dir.display()
            ),
        )
        .into());
    }

    let src = src.canonicalize()?;
    std::fs::create_dir_all(dest_dir)?;
    let dest_dir = dest_dir.canonicalize()?;

    let file_name: std::ffi::OsString = match dest_name {
        Some(name) => name.into(),
        None => src
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Source has no file name"))?,
    };
    let link = dest_dir.join(file_name);
    if link.symlink_metadata().is_ok() {
        std::fs::remove_file(&link)?;
    }

    let target = relative_path(&dest_dir, &src);
    debug!("Linking {} -> {}", link.display(), target.display());
    create_symlink(&target, &link)?;
    Ok(link)
}

pub fn write_yaml(path: &Path, value: &impl Serialize) -> Result<()> {
    let content = serde_yaml::to_string(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
