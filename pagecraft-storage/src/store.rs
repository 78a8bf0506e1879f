//! Storage traits consumed by the builder session and the HTTP service.

use crate::StorageResult;
use pagecraft_model::{Lead, LeadStatus, MAX_SLUG_LEN, Page, PageStatus};
use pagecraft_types::{LeadId, PageId, Timestamp};
use serde::{Deserialize, Serialize};

/// Listing row for the page dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: PageId,
    pub title: String,
    pub slug: String,
    pub status: PageStatus,
    pub component_count: usize,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

/// Page document persistence. Every write replaces the whole document.
pub trait PageStore: Send + Sync {
    /// Inserts or replaces the page.
    fn save_page(&self, page: &Page) -> StorageResult<()>;

    fn load_page(&self, id: PageId) -> StorageResult<Option<Page>>;

    fn load_page_by_slug(&self, slug: &str) -> StorageResult<Option<Page>>;

    /// Deletes the page and everything it owns. Returns whether it existed.
    fn delete_page(&self, id: PageId) -> StorageResult<bool>;

    /// All pages, most recently updated first.
    fn list_pages(&self) -> StorageResult<Vec<PageSummary>>;

    /// Looks up a public page by id or slug.
    ///
    /// Returns `None` both for unknown keys and for pages that exist but are
    /// not published, so callers cannot leak draft content.
    fn find_published(&self, key: &str) -> StorageResult<Option<Page>> {
        let page = match PageId::parse(key) {
            Ok(id) => self.load_page(id)?,
            Err(_) => self.load_page_by_slug(key)?,
        };
        Ok(page.filter(Page::is_public))
    }

    /// `base` if no page uses it, otherwise the first free `base-2`,
    /// `base-3`, ... The stem is shortened so the result stays a valid slug.
    fn available_slug(&self, base: &str) -> StorageResult<String> {
        if self.load_page_by_slug(base)?.is_none() {
            return Ok(base.to_string());
        }
        let mut n: u32 = 2;
        loop {
            let suffix = format!("-{n}");
            let stem: String = base
                .chars()
                .take(MAX_SLUG_LEN.saturating_sub(suffix.len()))
                .collect();
            let candidate = format!("{}{suffix}", stem.trim_end_matches('-'));
            if self.load_page_by_slug(&candidate)?.is_none() {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

/// Lead persistence for the capture pipeline and the dashboard.
pub trait LeadStore: Send + Sync {
    fn save_lead(&self, lead: &Lead) -> StorageResult<()>;

    fn load_lead(&self, id: LeadId) -> StorageResult<Option<Lead>>;

    /// Leads, newest first, optionally restricted to one page.
    fn list_leads(&self, page_id: Option<PageId>) -> StorageResult<Vec<Lead>>;

    /// Returns whether the lead existed.
    fn update_lead_status(
        &self,
        id: LeadId,
        status: LeadStatus,
        now: Timestamp,
    ) -> StorageResult<bool>;

    fn delete_lead(&self, id: LeadId) -> StorageResult<bool>;

    fn count_leads(&self, page_id: Option<PageId>) -> StorageResult<usize>;

    /// CSV with `id,page_id,status,submitted_at` followed by the sorted
    /// union of submitted field names.
    fn export_leads_csv(&self, page_id: Option<PageId>) -> StorageResult<String> {
        crate::export::leads_to_csv(&self.list_leads(page_id)?)
    }
}
