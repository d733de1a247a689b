//! Title/identifier slug encoding.
//!
//! A slug has the shape `<normalized-title>-<id-prefix>` where the prefix is
//! the first [`ID_PREFIX_LEN`] characters of the record identifier. The
//! record identifier stays the source of truth; slugs are derived on demand.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Number of identifier characters embedded at the end of a slug.
pub const ID_PREFIX_LEN: usize = 8;

static FULL_UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("uuid pattern is a valid regex")
});

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Hyphen or anything a browser regex `\s` matches: Unicode `White_Space`
/// minus U+0085 (NEL), plus U+FEFF.
fn is_separator(c: char) -> bool {
    c == '-' || (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Normalizes free text into a slug base made only of `[a-z0-9-]`.
///
/// Diacritics are folded away (`"Café"` becomes `"cafe"`), any other
/// non-ASCII character is dropped, and runs of whitespace and hyphens
/// collapse into a single hyphen. The result never starts or ends with a
/// hyphen and may be empty.
#[must_use]
pub fn generate_slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.to_lowercase().nfd() {
        if COMBINING_MARKS.contains(&c) {
            continue;
        }
        if is_separator(c) {
            pending_separator = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c);
        }
    }

    out
}

/// Takes at most [`ID_PREFIX_LEN`] characters from the front of `id`.
fn id_prefix(id: &str) -> &str {
    id.char_indices()
        .nth(ID_PREFIX_LEN)
        .map_or(id, |(end, _)| &id[..end])
}

/// Builds `"{base}-{prefix}"` from a title and a record identifier.
///
/// Identifiers shorter than [`ID_PREFIX_LEN`] are used as-is. When the title
/// normalizes to nothing the result is `"-{prefix}"`, which keeps the prefix
/// recoverable by [`extract_id_from_slug`].
#[must_use]
pub fn generate_unique_slug(text: &str, id: &str) -> String {
    compose(&generate_slug(text), id)
}

/// Joins an already-normalized base with the identifier prefix.
#[must_use]
pub fn compose(base: &str, id: &str) -> String {
    let prefix = id_prefix(id);
    let mut slug = String::with_capacity(base.len() + 1 + prefix.len());
    slug.push_str(base);
    slug.push('-');
    slug.push_str(prefix);
    slug
}

/// Recovers a record identifier from a slug.
///
/// A full UUID anywhere in the slug wins and is returned verbatim. Otherwise
/// the last hyphen-delimited segment is returned when it is exactly eight
/// hex digits. Anything else yields `None`.
#[must_use]
pub fn extract_id_from_slug(slug: &str) -> Option<&str> {
    if let Some(found) = FULL_UUID.find(slug) {
        return Some(found.as_str());
    }

    let mut parts = slug.rsplit('-');
    let last = parts.next()?;
    parts.next()?;

    let is_prefix = last.len() == ID_PREFIX_LEN && last.bytes().all(|b| b.is_ascii_hexdigit());
    is_prefix.then_some(last)
}
