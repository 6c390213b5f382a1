//! Import statements and image tags for pasting into an MDX page.

use crate::error::{AssetError, AssetResult, IoContext};
use crate::models::{SnippetImport, SnippetSection};
use crate::services::naming::{file_name_lossy, relative_slash_path, sorted_files, split_file_name};
use crate::services::slug::{canonicalize, EmptySlugFallback, SlugBatch};
use std::path::Path;

/// Prefix for slugs that would otherwise not be valid JS identifiers.
const IDENTIFIER_PREFIX: &str = "img";

/// Reserved words and strict-mode restricted names. Slugs are lowercase,
/// so only the lowercase spellings matter.
const JS_RESERVED: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "eval", "export", "extends",
    "false", "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
    "public", "return", "static", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "yield",
];

#[derive(Debug, Clone, Default)]
pub struct SnippetOptions {
    /// Leading characters of each stem to drop before slugging.
    pub stem_prefix_chars: usize,
    pub fallback: EmptySlugFallback,
}

/// Turns a slug into a valid import binding: empty slugs, slugs starting
/// with a digit and reserved words get [`IDENTIFIER_PREFIX`].
pub fn to_identifier(slug: &str) -> String {
    match slug.chars().next() {
        None => IDENTIFIER_PREFIX.to_string(),
        Some(c) if c.is_ascii_digit() => format!("{}_{}", IDENTIFIER_PREFIX, slug),
        Some(_) if JS_RESERVED.contains(&slug) => format!("{}_{}", IDENTIFIER_PREFIX, slug),
        Some(_) => slug.to_string(),
    }
}

/// Collects one import per file of `section_dir`, with paths relative to
/// `page_dir`. Identifiers are claimed from `batch`, so passing the same
/// batch for every section of a page keeps them distinct page-wide.
pub fn collect_section(
    page_dir: &Path,
    section_dir: &Path,
    options: &SnippetOptions,
    batch: &mut SlugBatch,
) -> AssetResult<Vec<SnippetImport>> {
    let mut imports = Vec::new();

    for (i, path) in sorted_files(section_dir)?.into_iter().enumerate() {
        let name = file_name_lossy(&path);
        let (stem, _) = split_file_name(&name);
        let alt: String = stem.chars().skip(options.stem_prefix_chars).collect();

        let slug = options.fallback.apply(canonicalize(&alt), i);
        let resolved = batch.claim(to_identifier(&slug));

        imports.push(SnippetImport {
            slug: resolved.slug,
            relative_path: relative_slash_path(&path, page_dir),
            alt,
        });
    }

    Ok(imports)
}

/// Sections of `page_dir` in the order given. Missing sections are logged
/// and returned separately instead of failing the page.
pub fn collect_page(
    page_dir: &Path,
    sections: &[String],
    options: &SnippetOptions,
) -> AssetResult<(Vec<SnippetSection>, Vec<String>)> {
    if !page_dir.is_dir() {
        return Err(AssetError::NotADirectory(page_dir.to_path_buf()));
    }

    let mut batch = SlugBatch::new();
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for name in sections {
        let section_dir = page_dir.join(name);
        if !section_dir.is_dir() {
            tracing::warn!("Missing section {}", section_dir.display());
            missing.push(name.clone());
            continue;
        }
        let imports = collect_section(page_dir, &section_dir, options, &mut batch)?;
        found.push(SnippetSection {
            name: name.clone(),
            imports,
        });
    }

    Ok((found, missing))
}

/// A single directory treated as one section, relative to its parent.
/// `dir` is resolved first so `.` still yields `<name>/<file>` paths.
pub fn collect_dir(dir: &Path, options: &SnippetOptions) -> AssetResult<SnippetSection> {
    if !dir.is_dir() {
        return Err(AssetError::NotADirectory(dir.to_path_buf()));
    }
    let resolved = dir.canonicalize().io_context("resolving path", dir)?;
    let parent = resolved.parent().unwrap_or(&resolved);

    let mut batch = SlugBatch::new();
    let imports = collect_section(parent, &resolved, options, &mut batch)?;
    Ok(SnippetSection {
        name: file_name_lossy(&resolved),
        imports,
    })
}

pub fn render_section(section: &SnippetSection, component: &str) -> String {
    let mut out = String::new();
    for import in &section.imports {
        out.push_str(&import.import_line());
        out.push('\n');
    }
    out.push('\n');
    for import in &section.imports {
        out.push_str(&import.image_tag(component));
        out.push('\n');
    }
    out
}
