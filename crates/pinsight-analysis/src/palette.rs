//! Palette extraction from post color metadata.

use std::collections::HashSet;
use std::sync::LazyLock;

use pinsight_core::{PaletteColor, PaletteInsights, Post};
use regex::Regex;

const MAX_COLORS: usize = 6;
const MIN_COLORS: usize = 3;
const MAX_REFERENCE_POSTS: usize = 3;

const NEUTRAL_HEX: &str = "#999999";
const NEUTRAL_NAME: &str = "Neutro";

/// Slate, ice, orange. Used whole when no post declares a color, and to pad
/// short palettes.
const FALLBACK_PALETTE: &[(&str, &str)] = &[
    ("#1F2937", "Ardósia"),
    ("#F8FAFC", "Gelo"),
    ("#F97316", "Laranja"),
];

/// Reference colors for naming. The closest entry by RGB distance wins.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("Preto", [0x00, 0x00, 0x00]),
    ("Branco", [0xFF, 0xFF, 0xFF]),
    ("Cinza", [0x80, 0x80, 0x80]),
    ("Prata", [0xC0, 0xC0, 0xC0]),
    ("Vermelho", [0xE5, 0x1C, 0x23]),
    ("Vinho", [0x80, 0x00, 0x20]),
    ("Coral", [0xFF, 0x7F, 0x50]),
    ("Terracota", [0xE2, 0x72, 0x5B]),
    ("Laranja", [0xFF, 0x8C, 0x00]),
    ("Dourado", [0xD4, 0xAF, 0x37]),
    ("Amarelo", [0xFF, 0xE1, 0x35]),
    ("Creme", [0xFF, 0xFD, 0xD0]),
    ("Bege", [0xF5, 0xF5, 0xDC]),
    ("Marrom", [0x8B, 0x45, 0x13]),
    ("Oliva", [0x80, 0x80, 0x00]),
    ("Verde", [0x2E, 0x8B, 0x57]),
    ("Verde-limão", [0x32, 0xCD, 0x32]),
    ("Turquesa", [0x40, 0xE0, 0xD0]),
    ("Azul", [0x1E, 0x5A, 0xD6]),
    ("Azul-claro", [0x87, 0xCE, 0xEB]),
    ("Azul-marinho", [0x00, 0x00, 0x80]),
    ("Roxo", [0x6A, 0x0D, 0xAD]),
    ("Lilás", [0xC8, 0xA2, 0xC8]),
    ("Rosa", [0xFF, 0xB6, 0xC1]),
    ("Magenta", [0xFF, 0x00, 0xFF]),
];

static RGB_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[\d.]+\s*)?\)$")
        .expect("valid rgb() regex")
});

/// Derive a palette from the `dominantColors` declared on posts.
///
/// Values are de-duplicated in first-seen order (valid colors by canonical
/// hex) and truncated to six. Values that do not parse as a color become
/// neutral gray rather than being dropped. The result always holds between three and six colors.
#[must_use]
pub fn derive(posts: &[Post]) -> PaletteInsights {
    let mut seen: HashSet<String> = HashSet::new();
    let mut colors: Vec<PaletteColor> = posts
        .iter()
        .flat_map(|post| post.colors().iter())
        .map(|raw| {
            let raw = raw.trim();
            (raw, parse_color(raw))
        })
        .filter(|(raw, rgb)| {
            // Valid colors compare by canonical hex so `#fff` matches `#FFFFFF`.
            let key = rgb.map_or_else(|| (*raw).to_string(), to_hex);
            seen.insert(key)
        })
        .take(MAX_COLORS)
        .map(|(raw, rgb)| {
            rgb.map_or_else(
                || {
                    tracing::debug!(value = raw, "unparsable color replaced with neutral");
                    PaletteColor::new(NEUTRAL_HEX, NEUTRAL_NAME)
                },
                |rgb| PaletteColor {
                    hex: to_hex(rgb),
                    name: nearest_name(rgb).to_string(),
                },
            )
        })
        .collect();

    if colors.len() < MIN_COLORS {
        pad_with_fallback(&mut colors);
    }

    let reference_post_ids = posts
        .iter()
        .filter(|post| !post.colors().is_empty())
        .take(MAX_REFERENCE_POSTS)
        .map(|post| post.id.clone())
        .collect();

    PaletteInsights {
        colors,
        reference_post_ids,
    }
}

fn pad_with_fallback(colors: &mut Vec<PaletteColor>) {
    for &(hex, name) in FALLBACK_PALETTE {
        if colors.len() >= MIN_COLORS {
            break;
        }
        if !colors.iter().any(|c| c.hex == hex) {
            colors.push(PaletteColor::new(hex, name));
        }
    }
}

/// Parse `#rgb`, `#rrggbb`, bare hex, or `rgb(r, g, b)` into channels.
fn parse_color(raw: &str) -> Option<[u8; 3]> {
    if let Some(caps) = RGB_FN_RE.captures(raw) {
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
        return Some([channel(1)?, channel(2)?, channel(3)?]);
    }

    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn to_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

fn nearest_name(rgb: [u8; 3]) -> &'static str {
    let distance = |other: [u8; 3]| -> u32 {
        rgb.iter()
            .zip(other)
            .map(|(&a, b)| {
                let d = i32::from(a) - i32::from(b);
                d.unsigned_abs().pow(2)
            })
            .sum()
    };
    NAMED_COLORS
        .iter()
        .min_by_key(|(_, value)| distance(*value))
        .map_or(NEUTRAL_NAME, |(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::post;

    fn colored(id: &str, colors: &[&str]) -> Post {
        let mut p = post(id, "");
        p.dominant_colors = Some(colors.iter().map(ToString::to_string).collect());
        p
    }

    fn is_hex6(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn no_colors_yields_fallback_palette() {
        let result = derive(&[post("p1", "hi"), post("p2", "there")]);
        let hexes: Vec<&str> = result.colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, vec!["#1F2937", "#F8FAFC", "#F97316"]);
        assert!(result.reference_post_ids.is_empty());
    }

    #[test]
    fn colors_are_deduplicated_in_first_seen_order() {
        let posts = [
            colored("p1", &["#112233", "#445566"]),
            colored("p2", &["#445566", "#778899", "#112233"]),
        ];
        let result = derive(&posts);
        let hexes: Vec<&str> = result.colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, vec!["#112233", "#445566", "#778899"]);
    }

    #[test]
    fn equivalent_notations_collapse_to_one_color() {
        let posts = [
            colored("p1", &["#fff", "#FFFFFF"]),
            colored("p2", &["ffffff", "rgb(255, 255, 255)", "#000000"]),
        ];
        let hexes: Vec<String> = derive(&posts).colors.into_iter().map(|c| c.hex).collect();
        assert_eq!(hexes, vec!["#FFFFFF", "#000000", "#1F2937"]);
    }

    #[test]
    fn palette_truncates_to_six() {
        let posts = [colored(
            "p1",
            &["#000001", "#000002", "#000003", "#000004", "#000005", "#000006", "#000007"],
        )];
        assert_eq!(derive(&posts).colors.len(), 6);
    }

    #[test]
    fn invalid_values_become_neutral_gray() {
        let posts = [colored("p1", &["not-a-color", "#12345", "#abcdef"])];
        let result = derive(&posts);
        assert_eq!(result.colors[0], PaletteColor::new("#999999", "Neutro"));
        assert_eq!(result.colors[1], PaletteColor::new("#999999", "Neutro"));
        assert_eq!(result.colors[2].hex, "#ABCDEF");
    }

    #[test]
    fn short_palette_is_padded_to_three() {
        let result = derive(&[colored("p1", &["#F97316"])]);
        let hexes: Vec<&str> = result.colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, vec!["#F97316", "#1F2937", "#F8FAFC"]);
    }

    #[test]
    fn parses_short_hex_and_rgb_function() {
        let result = derive(&[colored("p1", &["#fff", "rgb(255, 0, 0)", "000000"])]);
        let hexes: Vec<&str> = result.colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, vec!["#FFFFFF", "#FF0000", "#000000"]);
        assert_eq!(result.colors[0].name, "Branco");
        assert_eq!(result.colors[2].name, "Preto");
    }

    #[test]
    fn out_of_range_rgb_is_neutral() {
        let result = derive(&[colored("p1", &["rgb(300, 0, 0)"])]);
        assert_eq!(result.colors[0].hex, "#999999");
    }

    #[test]
    fn every_hex_is_six_digits_and_length_is_bounded() {
        let cases: Vec<Vec<Post>> = vec![
            vec![],
            vec![colored("p1", &["garbage"])],
            vec![colored("p1", &["#abc", "#def"])],
            vec![
                colored("p1", &["#010101", "#020202", "#030303", "#040404"]),
                colored("p2", &["#050505", "#060606", "#070707"]),
            ],
        ];
        for posts in cases {
            let result = derive(&posts);
            assert!((3..=6).contains(&result.colors.len()), "{result:?}");
            assert!(result.colors.iter().all(|c| is_hex6(&c.hex)), "{result:?}");
        }
    }

    #[test]
    fn reference_posts_are_first_three_declaring_colors() {
        let posts = [
            post("p0", ""),
            colored("p1", &["bogus"]),
            colored("p2", &["#111111"]),
            post("p3", ""),
            colored("p4", &["#222222"]),
            colored("p5", &["#333333"]),
        ];
        assert_eq!(derive(&posts).reference_post_ids, vec!["p1", "p2", "p4"]);
    }
}
