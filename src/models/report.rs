use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CopyReport {
    pub files_copied: usize,
    pub dirs_created: usize,
    /// Files whose destination name differs from the source name.
    pub renamed: usize,
    /// Files whose stem canonicalized to nothing and kept their original stem.
    pub empty_stems: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<PathBuf>,
}
