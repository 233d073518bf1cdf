//! Rule-based caption scan that ranks content sections and proposes CTAs.

use std::sync::LazyLock;

use pinsight_core::{HeuristicInsights, RawProfile, SectionTag};
use regex::Regex;

static WORKSHOP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:workshops?|oficinas?|agenda|cursos?|courses?|aulas?|turmas?)\b")
        .expect("valid workshop regex")
});

static PRODUCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:encomendas?|orders?|lojas?|shop|produtos?|products?|cardápio|cardapio|menu)\b",
    )
    .expect("valid product regex")
});

static TESTIMONIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:feedbacks?|clientes?|clients?|depoimentos?|testimonials?)\b")
        .expect("valid testimonial regex")
});

pub(crate) const CTA_SITE: &str = "Visitar site oficial";
pub(crate) const CTA_WORKSHOP: &str = "Reservar vaga no workshop";
pub(crate) const CTA_QUOTE: &str = "Solicitar orçamento personalizado";
pub(crate) const CTA_DM: &str = "Enviar mensagem no Instagram";
pub(crate) const CTA_DEFAULT: &str = "Fale comigo pelo Instagram";

const BASE_CONFIDENCE: f64 = 0.3;
const CONFIDENCE_PER_SIGNAL: f64 = 0.15;

/// Match counts for each signal family across every caption.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SignalCounts {
    workshop: usize,
    product: usize,
    testimonial: usize,
}

impl SignalCounts {
    fn collect(profile: &RawProfile) -> Self {
        profile
            .posts
            .iter()
            .fold(Self::default(), |mut counts, post| {
                counts.workshop += WORKSHOP_RE.find_iter(&post.caption).count();
                counts.product += PRODUCT_RE.find_iter(&post.caption).count();
                counts.testimonial += TESTIMONIAL_RE.find_iter(&post.caption).count();
                counts
            })
    }

    fn total(self) -> usize {
        self.workshop + self.product + self.testimonial
    }
}

/// Score a profile's captions into section priority, CTAs, and confidence.
///
/// Sections always open with `banner, instagram`; `planos`, `portfolio` and
/// `depoimentos` follow in that fixed order when their signal matched.
/// Confidence is `min(1, 0.3 + 0.15 * total_matches)`.
#[must_use]
pub fn score(profile: &RawProfile) -> HeuristicInsights {
    let counts = SignalCounts::collect(profile);

    let mut section_priority = vec![SectionTag::Banner, SectionTag::Instagram];
    if counts.workshop > 0 {
        section_priority.push(SectionTag::Planos);
    }
    if counts.product > 0 {
        section_priority.push(SectionTag::Portfolio);
    }
    if counts.testimonial > 0 {
        section_priority.push(SectionTag::Depoimentos);
    }

    let mut ctas: Vec<String> = Vec::new();
    if profile.has_external_url() {
        ctas.push(CTA_SITE.to_string());
    }
    if counts.workshop > 0 {
        ctas.push(CTA_WORKSHOP.to_string());
    }
    if counts.product > 0 {
        ctas.push(CTA_QUOTE.to_string());
    }
    if profile.biography.to_lowercase().contains("dm") {
        ctas.push(CTA_DM.to_string());
    }
    if ctas.is_empty() {
        ctas.push(CTA_DEFAULT.to_string());
    }

    #[allow(clippy::cast_precision_loss)]
    let signal = counts.total() as f64;
    let confidence = (BASE_CONFIDENCE + CONFIDENCE_PER_SIGNAL * signal).min(1.0);

    tracing::debug!(
        username = %profile.username,
        workshop = counts.workshop,
        product = counts.product,
        testimonial = counts.testimonial,
        confidence,
        "scored caption heuristics"
    );

    HeuristicInsights {
        section_priority,
        ctas,
        confidence,
    }
}
