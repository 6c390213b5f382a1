use assetprep::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assetprep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Slug { titles, batch }) => {
            assetprep::cli::slug::run(&cli.config, &titles, batch)?;
        }
        Some(Commands::Copy {
            source,
            dest,
            rename_dirs,
            dry_run,
        }) => {
            assetprep::cli::copy::run(&cli.config, source, dest, rename_dirs, dry_run)?;
        }
        Some(Commands::LowercaseExt { root, dry_run }) => {
            assetprep::cli::lowercase::run(&cli.config, root, dry_run)?;
        }
        Some(Commands::Snippets {
            page,
            dir,
            prefix_chars,
            pause,
        }) => {
            assetprep::cli::snippets::run(&cli.config, page, dir, prefix_chars, pause)?;
        }
        Some(Commands::Toc { pages, output }) => {
            assetprep::cli::toc::run(&cli.config, pages, output)?;
        }
        Some(Commands::SearchIndex { pages, output }) => {
            assetprep::cli::search::run(&cli.config, pages, output)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
