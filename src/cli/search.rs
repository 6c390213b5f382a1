use crate::services::search::build_search_index;
use crate::services::write_json;
use crate::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn run(config_path: &Path, pages: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let pages = pages.unwrap_or(config.paths.pages_dir);
    let output = output.unwrap_or(config.search.output);

    let index = build_search_index(
        &pages,
        &config.toc.page_file,
        &config.search.index_name,
        config.search.split_depth,
    )
    .with_context(|| format!("indexing pages under '{}'", pages.display()))?;
    write_json(&output, &index)?;

    println!("{} records written to {}", index.objects.len(), output.display());
    Ok(())
}
