use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:https?://|www\.)\S+").expect("valid url regex"));

const ZERO_WIDTH: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// Canonicalize free text before analysis.
///
/// Applies NFKC, removes zero-width characters, strips `#`/`@` markers and
/// URLs, and collapses whitespace. Idempotent: `normalize(normalize(x)) ==
/// normalize(x)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfkc()
        .filter(|c| !ZERO_WIDTH.contains(c) && *c != '#' && *c != '@')
        .collect();
    let without_urls = URL_RE.replace_all(&stripped, " ");
    // Removing markers can leave base letters next to combining marks.
    let recomposed: String = without_urls.nfkc().collect();
    recomposed.split_whitespace().collect::<Vec<_>>().join(" ")
}
