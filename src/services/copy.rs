//! Copies an asset tree to a new root, slugging every file stem on the way.

use crate::error::{AssetError, AssetResult, IoContext};
use crate::models::CopyReport;
use crate::services::naming::{file_name_lossy, join_file_name, sorted_files, sorted_subdirs, split_file_name};
use crate::services::slug::{canonicalize, EmptySlugFallback, SlugBatch};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    pub rename_dirs: bool,
    pub lowercase_extensions: bool,
    pub dry_run: bool,
    pub fallback: EmptySlugFallback,
}

pub fn copy_tree(source: &Path, dest: &Path, options: &CopyOptions) -> AssetResult<CopyReport> {
    if !source.is_dir() {
        return Err(AssetError::NotADirectory(source.to_path_buf()));
    }
    ensure_disjoint(source, dest)?;

    let mut report = CopyReport::default();
    let mut dest_dirs: HashMap<PathBuf, PathBuf> = HashMap::new();
    dest_dirs.insert(source.to_path_buf(), dest.to_path_buf());

    let walker = WalkDir::new(source)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_type().is_dir());

    for entry in walker {
        let entry = entry?;
        let src_dir = entry.path();
        let Some(dest_dir) = dest_dirs.get(src_dir).cloned() else {
            continue;
        };

        if !dest_dir.exists() {
            if !options.dry_run {
                fs::create_dir_all(&dest_dir).io_context("creating directory", &dest_dir)?;
            }
            report.dirs_created += 1;
        }

        // Destination names already used in this directory, subdirectories
        // first, so a renamed file never lands on a directory.
        let mut taken: HashSet<String> = HashSet::new();

        let mut dir_batch = SlugBatch::new();
        for (i, sub) in sorted_subdirs(src_dir)?.into_iter().enumerate() {
            let name = file_name_lossy(&sub);
            let dest_name = if options.rename_dirs {
                let slug = options.fallback.apply(canonicalize(&name), i);
                if slug.is_empty() {
                    tracing::warn!("Directory name '{}' has no usable characters, keeping it", name);
                    dir_batch.claim(name).slug
                } else {
                    dir_batch.claim(slug).slug
                }
            } else {
                name
            };
            taken.insert(dest_name.clone());
            dest_dirs.insert(sub, dest_dir.join(dest_name));
        }

        copy_files(src_dir, &dest_dir, options, &mut taken, &mut report)?;
    }

    tracing::info!(
        "Copied {} files into {} directories ({} renamed)",
        report.files_copied,
        report.dirs_created,
        report.renamed
    );
    Ok(report)
}

fn copy_files(
    src_dir: &Path,
    dest_dir: &Path,
    options: &CopyOptions,
    taken: &mut HashSet<String>,
    report: &mut CopyReport,
) -> AssetResult<()> {
    // One batch per extension: `a.jpg` and `a.png` can share a stem.
    let mut batches: HashMap<Option<String>, SlugBatch> = HashMap::new();

    for (i, path) in sorted_files(src_dir)?.into_iter().enumerate() {
        let name = file_name_lossy(&path);
        let (stem, extension) = split_file_name(&name);

        let mut base = options.fallback.apply(canonicalize(stem), i);
        if base.is_empty() {
            report.empty_stems += 1;
            tracing::warn!("'{}' has no usable characters in its stem, keeping it", path.display());
            base = stem.to_string();
        }

        let batch = batches
            .entry(extension.map(str::to_lowercase))
            .or_default();
        let mut dest_name =
            join_file_name(&batch.claim(base.clone()).slug, extension, options.lowercase_extensions);
        while taken.contains(&dest_name) {
            dest_name =
                join_file_name(&batch.claim(base.clone()).slug, extension, options.lowercase_extensions);
        }
        taken.insert(dest_name.clone());
        let dest_path = dest_dir.join(&dest_name);

        if dest_name != name {
            report.renamed += 1;
        }
        tracing::debug!("{} -> {}", path.display(), dest_path.display());

        if !options.dry_run {
            fs::copy(&path, &dest_path).io_context("copying file", &path)?;
        }
        report.files_copied += 1;
    }

    Ok(())
}

fn ensure_disjoint(source: &Path, dest: &Path) -> AssetResult<()> {
    let source_abs = absolute(source)?;
    let dest_abs = absolute(dest)?;
    if dest_abs.starts_with(&source_abs) {
        return Err(AssetError::DestinationInsideSource {
            source_root: source.to_path_buf(),
            dest: dest.to_path_buf(),
        });
    }
    Ok(())
}

fn absolute(path: &Path) -> AssetResult<PathBuf> {
    if path.exists() {
        return path.canonicalize().io_context("resolving path", path);
    }
    let cwd = std::env::current_dir().io_context("resolving path", path)?;
    let joined = cwd.join(path);
    // Resolve the deepest existing ancestor so symlinked roots compare equal.
    for ancestor in joined.ancestors().skip(1) {
        if ancestor.exists() {
            let base = ancestor.canonicalize().io_context("resolving path", ancestor)?;
            let rest = joined.strip_prefix(ancestor).unwrap_or(&joined);
            return Ok(base.join(rest));
        }
    }
    Ok(joined)
}
