pub mod copy;
pub mod extensions;
pub mod markdown;
pub mod naming;
pub mod search;
pub mod slug;
pub mod snippets;
pub mod toc;

use crate::error::{AssetResult, IoContext};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes `value` as 2-space indented JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AssetResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).io_context("creating directory", parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).io_context("writing", path)
}
