use crate::services::copy::{copy_tree, CopyOptions};
use crate::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn run(
    config_path: &Path,
    source: Option<PathBuf>,
    dest: Option<PathBuf>,
    rename_dirs: bool,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let source = source.unwrap_or(config.paths.source_dir);
    let dest = dest.unwrap_or(config.paths.copy_dest);

    let options = CopyOptions {
        rename_dirs: rename_dirs || config.slug.rename_dirs,
        lowercase_extensions: config.slug.lowercase_extensions,
        dry_run,
        fallback: config.slug.empty_fallback,
    };

    if dry_run {
        tracing::info!("Dry run, nothing will be written");
    }
    tracing::info!("Copying {} to {}", source.display(), dest.display());

    let report = copy_tree(&source, &dest, &options)
        .with_context(|| format!("copying '{}' to '{}'", source.display(), dest.display()))?;

    println!(
        "{} files copied, {} renamed, {} directories created",
        report.files_copied, report.renamed, report.dirs_created
    );
    if report.empty_stems > 0 {
        println!(
            "{} files had no usable characters in their name and kept it; set slug.empty_fallback to name them",
            report.empty_stems
        );
    }
    Ok(())
}
