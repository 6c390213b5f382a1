use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("{action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("walking directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("serializing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(
        "destination '{}' lies inside source '{}'",
        .dest.display(),
        .source_root.display()
    )]
    DestinationInsideSource { source_root: PathBuf, dest: PathBuf },
}

pub type AssetResult<T> = Result<T, AssetError>;

/// Attaches an action and path to an `io::Result`.
pub(crate) trait IoContext<T> {
    fn io_context(self, action: &'static str, path: &Path) -> AssetResult<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn io_context(self, action: &'static str, path: &Path) -> AssetResult<T> {
        self.map_err(|source| AssetError::Io {
            action,
            path: path.to_path_buf(),
            source,
        })
    }
}
