use crate::services::extensions::lowercase_extensions;
use crate::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn run(config_path: &Path, root: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let root = root.unwrap_or(config.paths.pages_dir);

    let report = lowercase_extensions(&root, dry_run)
        .with_context(|| format!("lowercasing extensions under '{}'", root.display()))?;

    for (from, to) in &report.renamed {
        println!("Renamed: {} -> {}", from.display(), to.display());
    }
    if !report.skipped.is_empty() {
        println!("Skipped {} files whose lowercase name already exists", report.skipped.len());
    }
    Ok(())
}
