use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in block kinds.
///
/// Closed on purpose: registration is keyed by this enum. Data arriving from
/// storage is matched with [`ComponentType::parse`], which returns `None`
/// for tags outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Hero,
    Features,
    Pricing,
    Testimonials,
    Gallery,
    ContactForm,
    Faq,
    Cta,
    Stats,
    Footer,
}

impl ComponentType {
    pub const ALL: [ComponentType; 10] = [
        Self::Hero,
        Self::Features,
        Self::Pricing,
        Self::Testimonials,
        Self::Gallery,
        Self::ContactForm,
        Self::Faq,
        Self::Cta,
        Self::Stats,
        Self::Footer,
    ];

    /// The tag stored in component records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Pricing => "pricing",
            Self::Testimonials => "testimonials",
            Self::Gallery => "gallery",
            Self::ContactForm => "contact_form",
            Self::Faq => "faq",
            Self::Cta => "cta",
            Self::Stats => "stats",
            Self::Footer => "footer",
        }
    }

    /// Exact tag match. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_variant() {
        for t in ComponentType::ALL {
            assert_eq!(ComponentType::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(ComponentType::parse("Hero"), None);
        assert_eq!(ComponentType::parse("contact-form"), None);
        assert_eq!(ComponentType::parse(""), None);
    }

    #[test]
    fn serde_tag_matches_as_str() {
        for t in ComponentType::ALL {
            let json = serde_json::to_value(t).unwrap();
            assert_eq!(json, t.as_str());
        }
    }
}
