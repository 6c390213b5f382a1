use crate::error::{AssetResult, IoContext};
use crate::models::TocEntry;
use crate::services::markdown::extract_headings;
use crate::services::naming::sorted_subdirs;
use std::fs;
use std::path::Path;

/// Reads `<page>/<page_file>` for every page directory under `pages_dir`
/// and collects its headings. Directories without the file are skipped.
pub fn generate_toc(pages_dir: &Path, page_file: &str) -> AssetResult<Vec<TocEntry>> {
    let mut toc = Vec::new();

    for page_dir in sorted_subdirs(pages_dir)? {
        let page_path = page_dir.join(page_file);
        if !page_path.is_file() {
            tracing::debug!("No {} in {}", page_file, page_dir.display());
            continue;
        }

        let source = fs::read_to_string(&page_path).io_context("reading page", &page_path)?;
        let headings = extract_headings(&source);
        tracing::debug!("{}: {} headings", page_path.display(), headings.len());

        toc.push(TocEntry {
            file: page_path.to_string_lossy().into_owned(),
            headings,
        });
    }

    Ok(toc)
}
