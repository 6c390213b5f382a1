use crate::error::{AssetError, AssetResult, IoContext};
use std::fs;
use std::path::{Path, PathBuf};

/// Splits a file name into stem and extension the way the slugging
/// commands see it. Dotfiles and names ending in a dot have no extension.
pub fn split_file_name(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < name.len() => (&name[..pos], Some(&name[pos + 1..])),
        _ => (name, None),
    }
}

pub fn join_file_name(stem: &str, extension: Option<&str>, lowercase_extension: bool) -> String {
    match extension {
        Some(ext) if lowercase_extension => format!("{}.{}", stem, ext.to_lowercase()),
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    }
}

pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Entries of `dir` sorted by file name, so batch suffixes come out the
/// same on every platform.
pub fn sorted_entries(dir: &Path) -> AssetResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AssetError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).io_context("reading directory", dir)? {
        let entry = entry.io_context("reading directory", dir)?;
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

pub fn sorted_files(dir: &Path) -> AssetResult<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file())
        .collect())
}

pub fn sorted_subdirs(dir: &Path) -> AssetResult<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

/// `path` relative to `base`, with `/` separators regardless of platform.
pub fn relative_slash_path(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
