//! Page copy. The engine only ever looks at how many cards/slides a section
//! has and in which order; everything else here is passed straight to markup.

use serde::Deserialize;

use crate::engine::{EngineError, RevealPreset, TransitionStyle, TransitionWindow};

const EMBEDDED: &str = include_str!("../content/site.json");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    pub nav: Vec<NavItem>,
    pub preload_lines: Vec<String>,
    pub hero: Hero,
    pub story: Story,
    pub services: ZonedSection,
    pub business_units: ZonedSection,
    pub beliefs: CardSection,
    pub credibility: CardSection,
    pub presence: CardSection,
    pub communities: CardSection,
    pub anniversary: CarouselSection,
    pub featured_work: CarouselSection,
    pub timeline: CarouselSection,
    pub testimonials: CarouselSection,
    pub newsletter: Newsletter,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub section_id: String,
    #[serde(default)]
    pub cta: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub id: String,
    pub lines: Vec<String>,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Story {
    pub id: String,
    pub eyebrow: String,
    pub heading: Vec<String>,
    pub paragraphs: Vec<String>,
    pub offices: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Card {
    pub title: String,
    pub body: String,
}

/// One zone of a pinned section.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ZoneCard {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ZonedSection {
    pub id: String,
    pub eyebrow: String,
    pub heading: String,
    pub transition: TransitionStyle,
    /// Local zone progress span that interpolates, as `[start, end]`.
    pub window: TransitionWindow,
    pub cards: Vec<ZoneCard>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CardSection {
    pub id: String,
    pub eyebrow: String,
    pub heading: String,
    pub reveal: RevealPreset,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Slide {
    pub kicker: String,
    pub title: String,
    pub body: String,
    pub meta: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselSection {
    pub id: String,
    pub eyebrow: String,
    pub heading: String,
    pub reveal: RevealPreset,
    pub interval_ms: u32,
    pub per_page: usize,
    pub swap_lock: bool,
    pub slides: Vec<Slide>,
}

impl Default for CarouselSection {
    fn default() -> Self {
        Self {
            id: String::new(),
            eyebrow: String::new(),
            heading: String::new(),
            reveal: RevealPreset::default(),
            interval_ms: crate::config::DEFAULT_CAROUSEL_INTERVAL_MS,
            per_page: 1,
            swap_lock: false,
            slides: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Newsletter {
    pub id: String,
    pub heading: String,
    pub body: String,
    pub placeholder: String,
    pub submit_label: String,
    pub thanks: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub tagline: String,
    pub offices: String,
    pub founded: i32,
    pub links: Vec<FooterLink>,
}

impl ContentDocument {
    pub fn parse(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The document compiled into the binary. A broken document is logged and
    /// replaced by an empty one so the shell still renders.
    pub fn embedded() -> Self {
        match Self::parse(EMBEDDED) {
            Ok(doc) => doc,
            Err(e) => {
                log::error!("Failed to load site content: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_is_complete() {
        let doc = ContentDocument::parse(EMBEDDED).unwrap();
        assert_eq!(doc.services.cards.len(), 4);
        assert_eq!(doc.services.transition, TransitionStyle::Slide);
        assert_eq!(doc.business_units.transition, TransitionStyle::Rise);
        assert_eq!(doc.credibility.reveal, RevealPreset::ScaleIn);
        assert_eq!(doc.presence.cards.len(), 4);
        assert_eq!(doc.communities.cards.len(), 2);
        assert_eq!(doc.anniversary.per_page, 3);
        assert!(doc.featured_work.swap_lock);
        assert_eq!(doc.timeline.interval_ms, 3000);
        assert!(doc.nav.iter().any(|item| item.cta));
        assert_eq!(doc.footer.founded, 2014);
    }

    #[test]
    fn carousels_carry_an_entrance_preset() {
        let doc = ContentDocument::parse(EMBEDDED).unwrap();
        assert_eq!(doc.anniversary.reveal, RevealPreset::FadeUp);
        assert_eq!(doc.featured_work.reveal, RevealPreset::ScaleIn);
        assert_eq!(doc.timeline.reveal, RevealPreset::FadeRight);
        let bare = ContentDocument::parse(r#"{ "testimonials": { "slides": [] } }"#).unwrap();
        assert_eq!(bare.testimonials.reveal, RevealPreset::FadeUp);
    }

    #[test]
    fn nav_targets_exist() {
        let doc = ContentDocument::parse(EMBEDDED).unwrap();
        let ids = [
            doc.hero.id.as_str(),
            doc.story.id.as_str(),
            doc.services.id.as_str(),
            doc.business_units.id.as_str(),
            doc.anniversary.id.as_str(),
            doc.newsletter.id.as_str(),
        ];
        for item in &doc.nav {
            assert!(ids.contains(&item.section_id.as_str()), "{}", item.section_id);
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let doc = ContentDocument::parse(r#"{ "timeline": { "slides": [] } }"#).unwrap();
        assert_eq!(doc.timeline.interval_ms, crate::config::DEFAULT_CAROUSEL_INTERVAL_MS);
        assert_eq!(doc.timeline.per_page, 1);
        assert!(doc.services.cards.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = ContentDocument::parse("{ nope").unwrap_err();
        assert!(matches!(err, EngineError::Content(_)));
    }

    #[test]
    fn transition_window_is_read_from_content() {
        let doc = ContentDocument::parse(r#"{ "services": { "window": [0.2, 0.8] } }"#).unwrap();
        assert_eq!(doc.services.window, TransitionWindow::new(0.2, 0.8).unwrap());
        assert_eq!(doc.business_units.window, TransitionWindow::default());
        assert!(ContentDocument::parse(r#"{ "services": { "window": [0.9, 0.1] } }"#).is_err());
    }

    #[test]
    fn unknown_transition_style_is_rejected() {
        let err = ContentDocument::parse(r#"{ "services": { "transition": "spin" } }"#);
        assert!(err.is_err());
    }
}
