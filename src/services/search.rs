use crate::error::{AssetResult, IoContext};
use crate::models::{SearchIndex, SearchRecord};
use crate::services::markdown::top_level_blocks;
use crate::services::naming::{file_name_lossy, sorted_subdirs};
use std::fs;
use std::path::Path;

/// Splits a page into sections, each starting at a heading of
/// `split_depth`. Content before the first such heading forms its own
/// section.
pub fn split_sections(source: &str, split_depth: u8) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for block in top_level_blocks(source) {
        if block.is_mdx_esm() || (block.heading.is_none() && block.text.is_empty()) {
            continue;
        }

        if block.heading == Some(split_depth) && !current.is_empty() {
            sections.push(current.join("\n"));
            current.clear();
        }

        match block.heading {
            Some(depth) => current.push(format!("{} {}", "#".repeat(depth as usize), block.text)),
            None => current.push(block.text),
        }
    }

    if !current.is_empty() {
        sections.push(current.join("\n"));
    }
    sections
}

pub fn build_search_index(
    pages_dir: &Path,
    page_file: &str,
    index_name: &str,
    split_depth: u8,
) -> AssetResult<SearchIndex> {
    let mut objects = Vec::new();

    for page_dir in sorted_subdirs(pages_dir)? {
        let page_path = page_dir.join(page_file);
        if !page_path.is_file() {
            continue;
        }

        let source = fs::read_to_string(&page_path).io_context("reading page", &page_path)?;
        let page_name = file_name_lossy(&page_dir);
        let sections = split_sections(&source, split_depth);
        tracing::debug!("{}: {} sections", page_name, sections.len());

        objects.extend(sections.into_iter().enumerate().map(|(i, text)| SearchRecord {
            object_id: format!("{}-{}", page_name, i),
            text,
        }));
    }

    tracing::info!("Indexed {} sections into '{}'", objects.len(), index_name);
    Ok(SearchIndex {
        index_name: index_name.to_string(),
        objects,
    })
}
