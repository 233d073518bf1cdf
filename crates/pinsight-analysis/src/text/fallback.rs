//! Deterministic text synthesis used when no generative service is available.

use pinsight_core::{RawProfile, TextInsights, TextSource};

use super::keywords::{push_unique, top_terms};
use super::normalize::normalize;

const FALLBACK_TERM_LIMIT: usize = 8;
const SUMMARY_KEYWORDS: usize = 5;
const IDENTITY_KEYWORD: &str = "perfil";

/// Biography substrings mapped to a tone of voice. First match wins.
const TONE_RULES: &[(&[&str], &str)] = &[
    (
        &["freelancer", "freela", "commissions", "comissões", "comissoes"],
        "Criativo e acolhedor",
    ),
    (
        &[
            "handmade",
            "artesanal",
            "feito à mão",
            "fermentation",
            "fermentação",
            "fermentacao",
        ],
        "Artesanal e autêntico",
    ),
];

const DEFAULT_TONE: &str = "Profissional e acessível";

/// Keywords and whether they came from profile content or identity fields.
struct KeywordSet {
    terms: Vec<String>,
    from_identity: bool,
}

pub(crate) fn synthesize_fallback(profile: &RawProfile) -> TextInsights {
    let bio = normalize(&profile.biography);
    let name = display_name(profile);
    let keywords = fallback_keywords(profile, &bio);
    let tone_of_voice = select_tone(&bio).to_string();

    let headline_ideas = headlines(&name, &keywords.terms);
    let summary = summary(&name, &bio, &keywords);

    TextInsights {
        tone_of_voice,
        headline_ideas,
        keywords: keywords.terms,
        summary,
        primary_cta: None,
        source: TextSource::Fallback,
    }
}

/// Pick a tone from the first rule whose substring appears in the biography.
pub(crate) fn select_tone(bio: &str) -> &'static str {
    let bio = bio.to_lowercase();
    TONE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| bio.contains(*needle)))
        .map_or(DEFAULT_TONE, |(_, tone)| *tone)
}

fn display_name(profile: &RawProfile) -> String {
    let name = normalize(profile.display_name());
    if name.is_empty() {
        profile.username.clone()
    } else {
        name
    }
}

fn fallback_keywords(profile: &RawProfile, bio: &str) -> KeywordSet {
    let mut corpus = vec![bio.to_string()];
    corpus.extend(profile.posts.iter().map(|post| normalize(&post.caption)));

    let mut terms = top_terms(&corpus, FALLBACK_TERM_LIMIT);
    let metadata = profile
        .posts
        .iter()
        .flat_map(|post| post.keyword_tags())
        .chain(profile.category_tags());
    for tag in metadata {
        push_unique(&mut terms, &normalize(tag).to_lowercase());
    }

    if !terms.is_empty() {
        return KeywordSet {
            terms,
            from_identity: false,
        };
    }

    let username = normalize(&profile.username).to_lowercase();
    let display = normalize(&profile.full_name).to_lowercase();
    let mut identity = Vec::new();
    push_unique(&mut identity, &username);
    if display != username {
        push_unique(&mut identity, &display);
    }
    for category in profile.category_tags() {
        push_unique(&mut identity, &normalize(category).to_lowercase());
    }
    push_unique(&mut identity, IDENTITY_KEYWORD);

    KeywordSet {
        terms: identity,
        from_identity: true,
    }
}

fn headlines(name: &str, keywords: &[String]) -> Vec<String> {
    vec![
        format!(
            "{name}: {} com propósito e personalidade",
            keyword_at(keywords, 0)
        ),
        format!("Descubra {} pelo olhar de {name}", keyword_at(keywords, 1)),
        format!("{} que contam histórias", capitalize(keyword_at(keywords, 2))),
    ]
}

/// Keyword at `i`, repeating the first one when the list is shorter.
fn keyword_at(keywords: &[String], i: usize) -> &str {
    keywords
        .get(i)
        .or_else(|| keywords.first())
        .map_or(IDENTITY_KEYWORD, String::as_str)
}

fn summary(name: &str, bio: &str, keywords: &KeywordSet) -> String {
    let bio_sentence = if bio.is_empty() {
        format!("{name} compartilha seu trabalho e sua rotina no Instagram.")
    } else {
        let mut sentence = format!("{name} se apresenta como: {bio}");
        if !sentence.ends_with(['.', '!', '?']) {
            sentence.push('.');
        }
        sentence
    };

    let keyword_sentence = if keywords.from_identity {
        "O perfil está construindo sua presença digital.".to_string()
    } else {
        let top: Vec<&str> = keywords
            .terms
            .iter()
            .take(SUMMARY_KEYWORDS)
            .map(String::as_str)
            .collect();
        format!("Os temas em destaque incluem {}.", top.join(", "))
    };

    format!("{bio_sentence} {keyword_sentence}")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
