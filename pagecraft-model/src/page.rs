use crate::{ComponentRecord, ModelError, ModelResult, StyleOverrides};
use pagecraft_types::{ComponentId, PageId, Timestamp};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Longest slug accepted for a public page address.
/// Longest slug `slugify` produces and `validate_slug` accepts.
pub const MAX_SLUG_LEN: usize = 96;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// Publication state of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(ModelError::InvalidStatus(other.to_string())),
        }
    }
}

/// Direction of a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// A landing page: the unit of persistence.
///
/// Component order is display order. Components have no lifecycle outside
/// their page; removing a record or deleting the page deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub status: PageStatus,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

impl Page {
    /// Creates an empty draft whose slug is derived from the title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let now = Timestamp::now();
        Self {
            id: PageId::new(),
            slug: slugify(&title),
            title,
            status: PageStatus::Draft,
            components: Vec::new(),
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    /// Returns true when the page may be served publicly.
    pub fn is_public(&self) -> bool {
        self.status == PageStatus::Published
    }

    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    // ── Component list ───────────────────────────────────────────

    /// Index of the first record with the given id.
    pub fn position(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    pub fn component(&self, id: ComponentId) -> Option<&ComponentRecord> {
        self.components.iter().find(|c| c.id == id)
    }

    fn component_mut(&mut self, id: ComponentId) -> Option<&mut ComponentRecord> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    pub fn push_component(&mut self, record: ComponentRecord) {
        self.components.push(record);
    }

    /// Inserts at `index`, clamped to the end of the list.
    pub fn insert_component(&mut self, index: usize, record: ComponentRecord) {
        let index = index.min(self.components.len());
        self.components.insert(index, record);
    }

    pub fn remove_component(&mut self, id: ComponentId) -> Option<ComponentRecord> {
        let index = self.position(id)?;
        Some(self.components.remove(index))
    }

    /// Swaps the record with its neighbour.
    ///
    /// Returns `false` without touching the list when the id is unknown or
    /// the record is already at the boundary in that direction.
    pub fn move_component(&mut self, id: ComponentId, direction: MoveDirection) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.components.len() => index + 1,
            _ => return false,
        };
        self.components.swap(index, target);
        true
    }

    pub fn update_content(&mut self, id: ComponentId, content: serde_json::Value) -> bool {
        match self.component_mut(id) {
            Some(record) => {
                record.content = content;
                true
            }
            None => false,
        }
    }

    pub fn update_style(&mut self, id: ComponentId, style: Option<StyleOverrides>) -> bool {
        match self.component_mut(id) {
            Some(record) => {
                record.style = style;
                true
            }
            None => false,
        }
    }

    pub fn set_visible(&mut self, id: ComponentId, visible: bool) -> bool {
        match self.component_mut(id) {
            Some(record) => {
                record.visible = Some(visible);
                true
            }
            None => false,
        }
    }

    // ── Status ───────────────────────────────────────────────────

    /// Marks the page published. `published_at` records the latest publish.
    pub fn publish(&mut self, now: Timestamp) {
        self.status = PageStatus::Published;
        self.published_at = Some(now);
    }

    /// Returns the page to draft; the last publish time is kept.
    pub fn unpublish(&mut self) {
        self.status = PageStatus::Draft;
    }

    pub fn archive(&mut self) {
        self.status = PageStatus::Archived;
    }

    /// Moves an archived page back to draft. Other states are unchanged.
    pub fn restore(&mut self) {
        if self.status == PageStatus::Archived {
            self.status = PageStatus::Draft;
        }
    }
}

/// Derives a URL slug from free text.
///
/// ASCII alphanumerics are lowercased, every other run of characters
/// becomes a single `-`. An empty result falls back to `page`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }
    slug.truncate(MAX_SLUG_LEN);
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "page".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Checks a user-supplied slug.
pub fn validate_slug(slug: &str) -> ModelResult<()> {
    if slug.len() > MAX_SLUG_LEN || !SLUG_RE.is_match(slug) {
        return Err(ModelError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Summer Sale -- 2024!"), "summer-sale-2024");
        assert_eq!(slugify("  Hello   World  "), "hello-world");
    }

    #[test]
    fn slugify_falls_back_to_page() {
        assert_eq!(slugify("¡¿?!"), "page");
        assert_eq!(slugify(""), "page");
    }

    #[test]
    fn slugify_output_always_validates() {
        for title in ["A", "Launch: v2.0", "ünïcödé title", &"x".repeat(300)] {
            let slug = slugify(title);
            assert!(validate_slug(&slug).is_ok(), "{slug}");
        }
    }

    #[test]
    fn validate_slug_rejects_bad_input() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Upper").is_err());
        assert!(validate_slug("trailing-").is_err());
        assert!(validate_slug("double--dash").is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug(&"a".repeat(97)).is_err());
    }

    #[test]
    fn status_roundtrips_through_str() {
        for status in [PageStatus::Draft, PageStatus::Published, PageStatus::Archived] {
            assert_eq!(status.as_str().parse::<PageStatus>().unwrap(), status);
        }
        assert!("live".parse::<PageStatus>().is_err());
    }
}
