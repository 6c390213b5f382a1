use crate::services::slug::{canonicalize, resolve_batch_with_fallback};
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, titles: &[String], batch: bool) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    let slugs = if batch {
        resolve_batch_with_fallback(titles, &config.slug.empty_fallback)
    } else {
        titles.iter().map(|t| canonicalize(t)).collect()
    };

    for (title, slug) in titles.iter().zip(&slugs) {
        if slug.is_empty() {
            tracing::warn!("'{}' has no usable characters", title);
        }
        println!("{}", slug);
    }
    Ok(())
}
