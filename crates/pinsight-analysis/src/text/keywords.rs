//! Word-frequency keyword extraction.

use std::collections::HashMap;

/// Words too common to describe a profile.
const STOP_WORDS: &[&str] = &[
    "a", "o", "e", "as", "os", "ao", "de", "da", "do", "das", "dos", "em", "no", "na", "nos",
    "nas", "um", "uma", "para", "pra", "com", "por", "que", "se", "mais", "meu", "minha", "seu",
    "sua", "the", "and", "for", "with", "you", "your", "of", "to", "in", "on", "is", "at", "my",
    "our",
];

/// Split text into lowercase tokens, dropping stop words and single characters.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() > 1)
        .map(str::to_lowercase)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
}

/// Most frequent terms across `texts`, highest count first.
///
/// Ties keep first-seen order: counts are gathered into an ordered list and
/// sorted with a stable sort.
pub(crate) fn top_terms<S: AsRef<str>>(texts: &[S], limit: usize) -> Vec<String> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in texts.iter().flat_map(|text| tokenize(text.as_ref())) {
        if let Some(&slot) = index.get(&token) {
            counts[slot].1 += 1;
        } else {
            index.insert(token.clone(), counts.len());
            counts.push((token, 1));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(term, _)| term).collect()
}

/// Append `candidate` unless blank or already present (case-insensitive).
pub(crate) fn push_unique(keywords: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return;
    }
    if !keywords.iter().any(|k| same_ignoring_case(k, candidate)) {
        keywords.push(candidate.to_string());
    }
}

/// Unicode-aware case-insensitive equality.
pub(crate) fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
