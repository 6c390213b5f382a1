use crate::services::toc::generate_toc;
use crate::services::write_json;
use crate::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn run(config_path: &Path, pages: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let pages = pages.unwrap_or(config.paths.pages_dir);
    let output = output.unwrap_or(config.toc.output);

    let toc = generate_toc(&pages, &config.toc.page_file)
        .with_context(|| format!("reading pages under '{}'", pages.display()))?;
    write_json(&output, &toc)?;

    tracing::info!("Table of contents for {} pages written to {}", toc.len(), output.display());
    Ok(())
}
