use crate::services::slug::EmptySlugFallback;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub slug: SlugConfig,
    #[serde(default)]
    pub snippets: SnippetsConfig,
    #[serde(default)]
    pub toc: TocConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per page.
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,
    /// Root of the tree `copy` reads from.
    #[serde(default = "default_pages_dir")]
    pub source_dir: PathBuf,
    /// Where `copy` writes the renamed tree.
    #[serde(default = "default_copy_dest")]
    pub copy_dest: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            source_dir: default_pages_dir(),
            copy_dest: default_copy_dest(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SlugConfig {
    #[serde(default)]
    pub empty_fallback: EmptySlugFallback,
    /// Also canonicalize directory names when copying.
    #[serde(default)]
    pub rename_dirs: bool,
    /// Lowercase extensions of copied files.
    #[serde(default)]
    pub lowercase_extensions: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnippetsConfig {
    /// Section subdirectories of a page, in output order.
    #[serde(default)]
    pub sections: Vec<String>,
    /// Leading characters dropped from every stem before slugging,
    /// e.g. 9 for a `20240131_` date stamp.
    #[serde(default)]
    pub stem_prefix_chars: usize,
    #[serde(default = "default_component")]
    pub component: String,
}

impl Default for SnippetsConfig {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            stem_prefix_chars: 0,
            component: default_component(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TocConfig {
    #[serde(default = "default_page_file")]
    pub page_file: String,
    #[serde(default = "default_toc_output")]
    pub output: PathBuf,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            page_file: default_page_file(),
            output: default_toc_output(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_index_name")]
    pub index_name: String,
    /// Heading depth that starts a new search record.
    #[serde(default = "default_split_depth")]
    pub split_depth: u8,
    #[serde(default = "default_search_output")]
    pub output: PathBuf,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_name: default_index_name(),
            split_depth: default_split_depth(),
            output: default_search_output(),
        }
    }
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("src/app/(static)")
}

fn default_copy_dest() -> PathBuf {
    PathBuf::from("renamed")
}

fn default_component() -> String {
    "Image".to_string()
}

fn default_page_file() -> String {
    "page.mdx".to_string()
}

fn default_toc_output() -> PathBuf {
    PathBuf::from("toc.json")
}

fn default_index_name() -> String {
    "static_pages".to_string()
}

fn default_split_depth() -> u8 {
    2
}

fn default_search_output() -> PathBuf {
    PathBuf::from("search_index.json")
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.search.split_depth) {
            anyhow::bail!("search.split_depth must be between 1 and 6");
        }
        if self.toc.page_file.trim().is_empty() {
            anyhow::bail!("toc.page_file must not be empty");
        }
        if self.snippets.component.trim().is_empty() {
            anyhow::bail!("snippets.component must not be empty");
        }
        if let EmptySlugFallback::Positional { prefix } = &self.slug.empty_fallback {
            if prefix.contains(['/', '\\']) {
                anyhow::bail!("slug.empty_fallback.prefix must not contain path separators");
            }
        }
        Ok(())
    }
}
