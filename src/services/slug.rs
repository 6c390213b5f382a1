//! Filename canonicalization and per-batch slug collision resolution.
//!
//! Every command in this crate derives file and identifier names through
//! [`canonicalize`], so the rules live here and nowhere else.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Characters no supported filesystem accepts inside a file name.
const ILLEGAL_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest sanitized name, in bytes.
pub const MAX_FILENAME_BYTES: usize = 255;

/// Fixed substitutions applied after lowercasing. Anything not listed here
/// and not already in the slug alphabet is dropped.
pub const TRANSLITERATIONS: &[(char, &str)] = &[
    ('\u{2013}', "-"), // en dash
    ('č', "c"),
    ('š', "s"),
    ('ž', "z"),
];

static UNDERSCORE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_+").expect("Invalid underscore regex pattern"));
static WORD_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s+\-]+").expect("Invalid separator regex pattern"));

/// Removes characters a filesystem would reject, trims surrounding
/// whitespace and dots, and caps the result at [`MAX_FILENAME_BYTES`].
pub fn sanitize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() && !ILLEGAL_FILENAME_CHARS.contains(c))
        .collect();

    let trimmed = cleaned.trim_matches(|c: char| c.is_whitespace() || c == '.');
    truncate_to_boundary(trimmed, MAX_FILENAME_BYTES).to_string()
}

fn truncate_to_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn transliterate(c: char) -> Option<&'static str> {
    TRANSLITERATIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

// `+` survives until the split step, where it separates words.
fn is_slug_source_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+') || c.is_whitespace()
}

/// Maps a raw title or file stem to its canonical slug.
///
/// The result only contains `[a-z0-9_]`, never starts or ends with an
/// underscore and never contains two underscores in a row. It is empty when
/// nothing usable survives; callers decide what to do with that (see
/// [`EmptySlugFallback`]).
pub fn canonicalize(raw: &str) -> String {
    let lowered = sanitize(raw).to_lowercase();

    let mut mapped = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if let Some(replacement) = transliterate(c) {
            mapped.push_str(replacement);
        } else if is_slug_source_char(c) {
            mapped.push(c);
        }
    }

    let collapsed = UNDERSCORE_RUN.replace_all(&mapped, "_");
    let trimmed = collapsed
        .trim_matches(|c: char| c == '-' || c == '_')
        .trim();

    WORD_SEPARATORS
        .split(trimmed)
        .map(|token| token.trim_matches('_'))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// True when `slug` is non-empty and already in canonical form.
pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_FILENAME_BYTES {
        return false;
    }
    if slug.starts_with('_') || slug.ends_with('_') || slug.contains("__") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// A slug together with the position of the title it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlug {
    pub slug: String,
    pub index: usize,
}

/// Assigns distinct slugs to sibling titles in encounter order.
///
/// The first title to produce a slug keeps it bare; later ones get the
/// smallest `_<n>` suffix (from 1) not already assigned in this batch.
#[derive(Debug, Default)]
pub struct SlugBatch {
    assigned: HashSet<String>,
    next_index: usize,
}

impl SlugBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalizes `raw` and claims a distinct slug for it.
    pub fn push(&mut self, raw: &str) -> ResolvedSlug {
        self.claim(canonicalize(raw))
    }

    /// Claims a distinct slug for an already canonical `base`.
    ///
    /// An empty base that collides becomes the bare number, so the result
    /// never starts with an underscore.
    pub fn claim(&mut self, base: String) -> ResolvedSlug {
        let index = self.next_index;
        self.next_index += 1;

        let slug = if self.assigned.contains(&base) {
            let mut n = 1usize;
            loop {
                let candidate = with_suffix(&base, n);
                if !self.assigned.contains(&candidate) {
                    break candidate;
                }
                n += 1;
            }
        } else {
            base
        };

        self.assigned.insert(slug.clone());
        ResolvedSlug { slug, index }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.assigned.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.next_index
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }
}

fn with_suffix(base: &str, n: usize) -> String {
    if base.is_empty() {
        n.to_string()
    } else {
        format!("{}_{}", base, n)
    }
}

/// Canonicalizes every title and resolves collisions within the batch.
/// The output has one slug per input, in input order.
pub fn resolve_batch<I, S>(raw_titles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut batch = SlugBatch::new();
    raw_titles
        .into_iter()
        .map(|raw| batch.push(raw.as_ref()).slug)
        .collect()
}

/// What the calling layer substitutes for a title that canonicalizes to
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptySlugFallback {
    /// Leave the slug empty.
    #[default]
    Keep,
    /// `<prefix>_<position>`, position counted from 1 within the batch.
    Positional { prefix: String },
    /// A random UUID in simple (hex) form.
    Random,
}

impl EmptySlugFallback {
    pub fn apply(&self, slug: String, index: usize) -> String {
        if !slug.is_empty() {
            return slug;
        }
        match self {
            EmptySlugFallback::Keep => slug,
            EmptySlugFallback::Positional { prefix } => {
                with_suffix(&canonicalize(prefix), index + 1)
            }
            EmptySlugFallback::Random => Uuid::new_v4().simple().to_string(),
        }
    }
}

/// Like [`resolve_batch`], with `fallback` applied to empty slugs before
/// collision resolution.
pub fn resolve_batch_with_fallback<I, S>(raw_titles: I, fallback: &EmptySlugFallback) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut batch = SlugBatch::new();
    raw_titles
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let base = fallback.apply(canonicalize(raw.as_ref()), i);
            batch.claim(base).slug
        })
        .collect()
}
