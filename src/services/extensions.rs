use crate::error::{AssetResult, IoContext};
use crate::models::RenameReport;
use crate::services::naming::{file_name_lossy, join_file_name, split_file_name};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Renames every file under `root` whose extension contains uppercase
/// letters so the extension is lowercase. The stem is left untouched.
pub fn lowercase_extensions(root: &Path, dry_run: bool) -> AssetResult<RenameReport> {
    let mut report = RenameReport::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = file_name_lossy(path);
        let (stem, extension) = split_file_name(&name);
        let Some(ext) = extension else { continue };
        if ext == ext.to_lowercase() {
            continue;
        }

        let target = path.with_file_name(join_file_name(stem, extension, true));
        if target.exists() && !is_same_file(path, &target) {
            tracing::warn!(
                "Skipping {}: {} already exists",
                path.display(),
                target.display()
            );
            report.skipped.push(path.to_path_buf());
            continue;
        }

        if !dry_run {
            fs::rename(path, &target).io_context("renaming file", path)?;
        }
        tracing::info!("Renamed: {} -> {}", path.display(), target.display());
        report.renamed.push((path.to_path_buf(), target));
    }

    Ok(report)
}

// Case-insensitive filesystems report the lowercased name as existing.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
