//! Structural reading of Markdown/MDX pages: headings and top-level blocks.

use crate::models::Heading;
use once_cell::sync::Lazy;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use regex::Regex;

static MDX_ESM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?:import\s+(?:[\w$*{},\s]+?\s+from\s+)?["']|export\s+(?:const|let|var|function|class|default|async|\{|\*))"#,
    )
    .expect("Invalid MDX ESM regex pattern")
});

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Every heading in document order with its plain text.
pub fn extract_headings(source: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(source, parser_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_depth(level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((depth, value)) = current.take() {
                    headings.push(Heading {
                        depth,
                        value: value.trim().to_string(),
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, value)) = current.as_mut() {
                    value.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}

/// A top-level block of a document, flattened to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Heading depth when the block is a heading.
    pub heading: Option<u8>,
    pub text: String,
}

impl Block {
    /// MDX `import`/`export` statements parse as paragraphs. Prose that
    /// merely starts with the word "import" does not match.
    pub fn is_mdx_esm(&self) -> bool {
        self.heading.is_none() && MDX_ESM.is_match(&self.text)
    }
}

pub fn top_level_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut nesting = 0usize;
    let mut heading: Option<u8> = None;
    let mut text = String::new();

    for event in Parser::new_ext(source, parser_options()) {
        match event {
            Event::Start(tag) => {
                if nesting == 0 {
                    heading = match tag {
                        Tag::Heading { level, .. } => Some(heading_depth(level)),
                        _ => None,
                    };
                    text.clear();
                }
                nesting += 1;
            }
            Event::End(tag) => {
                nesting = nesting.saturating_sub(1);
                if nesting == 0 {
                    blocks.push(Block {
                        heading: heading.take(),
                        text: text.trim().to_string(),
                    });
                } else if matches!(tag, TagEnd::Paragraph | TagEnd::Item | TagEnd::TableRow)
                    && !text.ends_with('\n')
                {
                    text.push('\n');
                }
            }
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => text.push('\n'),
            Event::Rule if nesting == 0 => blocks.push(Block {
                heading: None,
                text: String::new(),
            }),
            _ => {}
        }
    }

    blocks
}
