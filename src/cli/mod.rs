pub mod copy;
pub mod lowercase;
pub mod search;
pub mod slug;
pub mod snippets;
pub mod toc;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assetprep")]
#[command(version)]
#[command(about = "Prepare static image assets and MDX pages for a site build", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "assetprep.toml", env = "ASSETPREP_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slug for each title
    Slug {
        #[arg(required = true)]
        titles: Vec<String>,
        /// Resolve the titles as one batch so the slugs are distinct
        #[arg(long)]
        batch: bool,
    },
    /// Copy a tree, renaming every file to its slug
    Copy {
        #[arg(short, long)]
        source: Option<PathBuf>,
        #[arg(short, long)]
        dest: Option<PathBuf>,
        /// Slug directory names too
        #[arg(long)]
        rename_dirs: bool,
        #[arg(long)]
        dry_run: bool,
    },
    /// Rename files in place so their extensions are lowercase
    LowercaseExt {
        #[arg(short, long)]
        root: Option<PathBuf>,
        #[arg(long)]
        dry_run: bool,
    },
    /// Print image imports and tags for a page
    Snippets {
        /// Page directory whose configured sections are listed
        #[arg(long, conflicts_with = "dir")]
        page: Option<PathBuf>,
        /// A single directory listed as one section
        #[arg(long)]
        dir: Option<PathBuf>,
        #[arg(long)]
        prefix_chars: Option<usize>,
        /// Wait for Enter after each section
        #[arg(long)]
        pause: bool,
    },
    /// Write the headings of every page as JSON
    Toc {
        #[arg(long)]
        pages: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write search records for every page as JSON
    SearchIndex {
        #[arg(long)]
        pages: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
