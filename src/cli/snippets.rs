use crate::models::SnippetSection;
use crate::services::snippets::{collect_dir, collect_page, render_section, SnippetOptions};
use crate::Config;
use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub fn run(
    config_path: &Path,
    page: Option<PathBuf>,
    dir: Option<PathBuf>,
    prefix_chars: Option<usize>,
    pause: bool,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let options = SnippetOptions {
        stem_prefix_chars: prefix_chars.unwrap_or(config.snippets.stem_prefix_chars),
        fallback: config.slug.empty_fallback.clone(),
    };
    let component = &config.snippets.component;

    if let Some(dir) = dir {
        let section = collect_dir(&dir, &options)
            .with_context(|| format!("listing '{}'", dir.display()))?;
        emit_section(&section, component, pause, &mut io::stdin().lock(), &mut io::stdout())?;
        return Ok(());
    }

    let Some(page) = page else {
        bail!("pass --page <DIR> or --dir <DIR>");
    };
    if config.snippets.sections.is_empty() {
        bail!("snippets.sections is empty in {}", config_path.display());
    }

    let (sections, missing) = collect_page(&page, &config.snippets.sections, &options)
        .with_context(|| format!("listing page '{}'", page.display()))?;

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    for section in &sections {
        writeln!(stdout, "// {}", section.name)?;
        emit_section(section, component, pause, &mut stdin, &mut stdout)?;
    }

    for name in &missing {
        println!("missing {}", page.join(name).display());
    }
    tracing::info!("Done with {}", page.display());
    Ok(())
}

/// Writes one rendered section and, with `pause`, waits for a line on
/// `input` before returning.
pub fn emit_section<R: BufRead, W: Write>(
    section: &SnippetSection,
    component: &str,
    pause: bool,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    write!(output, "{}", render_section(section, component))?;
    writeln!(output)?;
    if pause {
        write!(output, "-- press Enter to continue --")?;
        output.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        writeln!(output)?;
    }
    Ok(())
}
