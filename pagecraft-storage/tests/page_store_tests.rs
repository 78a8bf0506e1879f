use pagecraft_model::{
    ComponentRecord, Lead, MAX_SLUG_LEN, Page, PageStatus, SpacingOverrides, StyleOverrides,
    validate_slug,
};
use pagecraft_storage::{LeadStore, PageStore, SqliteStore, StorageError};
use pagecraft_types::{PageId, Timestamp};
use pretty_assertions::assert_eq;
use serde_json::json;

fn page_with_blocks(title: &str) -> Page {
    let mut page = Page::new(title);
    page.push_component(ComponentRecord::new("hero", json!({"headline": "Ship faster"})));
    page.push_component(
        ComponentRecord::new("pricing", json!({"plans": [{"name": "Pro", "price": 29}]}))
            .with_visible(false),
    );
    page.push_component(ComponentRecord::new("legacy_banner", json!({"text": "kept"})));
    page
}

// ── Round trips ──────────────────────────────────────────────────

#[test]
fn save_and_load_preserves_document() {
    let store = SqliteStore::open_in_memory().unwrap();
    let page = page_with_blocks("Launch Week");
    store.save_page(&page).unwrap();

    let loaded = store.load_page(page.id).unwrap().unwrap();
    assert_eq!(loaded, page);
}

#[test]
fn unknown_component_types_survive_storage() {
    let store = SqliteStore::open_in_memory().unwrap();
    let page = page_with_blocks("Legacy");
    store.save_page(&page).unwrap();

    let loaded = store.load_page(page.id).unwrap().unwrap();
    assert_eq!(loaded.components[2].component_type, "legacy_banner");
    assert_eq!(loaded.components[2].content, json!({"text": "kept"}));
}

#[test]
fn style_overrides_round_trip() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut page = Page::new("Styled");
    let style = StyleOverrides {
        spacing: Some(SpacingOverrides {
            padding_top: Some("48px".into()),
            padding_bottom: None,
        }),
        ..StyleOverrides::default()
    };
    page.push_component(ComponentRecord::new("cta", json!({"headline": "Go"})).with_style(style));
    store.save_page(&page).unwrap();

    let loaded = store.load_page(page.id).unwrap().unwrap();
    assert_eq!(loaded.components[0].style, page.components[0].style);
}

#[test]
fn load_missing_page_returns_none() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.load_page(PageId::new()).unwrap().is_none());
    assert!(store.load_page_by_slug("nope").unwrap().is_none());
}

#[test]
fn save_replaces_existing_document() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut page = page_with_blocks("Replace Me");
    store.save_page(&page).unwrap();

    page.title = "Replaced".into();
    page.components.truncate(1);
    store.save_page(&page).unwrap();

    let loaded = store.load_page(page.id).unwrap().unwrap();
    assert_eq!(loaded.title, "Replaced");
    assert_eq!(loaded.components.len(), 1);
    assert_eq!(store.list_pages().unwrap().len(), 1);
}

#[test]
fn load_by_slug() {
    let store = SqliteStore::open_in_memory().unwrap();
    let page = Page::new("Spring Sale");
    store.save_page(&page).unwrap();

    let loaded = store.load_page_by_slug("spring-sale").unwrap().unwrap();
    assert_eq!(loaded.id, page.id);
}

#[test]
fn duplicate_slug_is_rejected() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.save_page(&Page::new("Same Name")).unwrap();

    let err = store.save_page(&Page::new("Same Name")).unwrap_err();
    assert!(matches!(err, StorageError::SlugTaken(ref s) if s == "same-name"));
}

#[test]
fn available_slug_appends_first_free_suffix() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.available_slug("summer-sale").unwrap(), "summer-sale");

    store.save_page(&Page::new("Summer Sale")).unwrap();
    assert_eq!(store.available_slug("summer-sale").unwrap(), "summer-sale-2");

    let mut second = Page::new("Summer Sale");
    second.slug = "summer-sale-2".into();
    store.save_page(&second).unwrap();
    assert_eq!(store.available_slug("summer-sale").unwrap(), "summer-sale-3");
}

#[test]
fn available_slug_stays_within_length_limit() {
    let store = SqliteStore::open_in_memory().unwrap();
    let long = "a".repeat(MAX_SLUG_LEN);
    let mut page = Page::new("Long");
    page.slug = long.clone();
    store.save_page(&page).unwrap();

    let slug = store.available_slug(&long).unwrap();
    assert_eq!(slug.len(), MAX_SLUG_LEN);
    assert!(slug.ends_with("-2"));
    validate_slug(&slug).unwrap();
}

// ── Listing ──────────────────────────────────────────────────────

#[test]
fn list_pages_newest_first_with_counts() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut older = page_with_blocks("Older");
    older.updated_at = Timestamp::from_millis(1_000);
    let mut newer = Page::new("Newer");
    newer.updated_at = Timestamp::from_millis(2_000);
    store.save_page(&older).unwrap();
    store.save_page(&newer).unwrap();

    let pages = store.list_pages().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].id, newer.id);
    assert_eq!(pages[0].component_count, 0);
    assert_eq!(pages[1].id, older.id);
    assert_eq!(pages[1].component_count, 3);
    assert_eq!(pages[1].slug, "older");
}

// ── Published lookup ─────────────────────────────────────────────

#[test]
fn find_published_by_id_and_slug() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut page = Page::new("Live Page");
    page.publish(Timestamp::from_millis(5_000));
    store.save_page(&page).unwrap();

    let by_id = store.find_published(&page.id.to_string()).unwrap().unwrap();
    let by_slug = store.find_published("live-page").unwrap().unwrap();
    assert_eq!(by_id.id, page.id);
    assert_eq!(by_slug.id, page.id);
    assert_eq!(by_slug.status, PageStatus::Published);
    assert_eq!(by_slug.published_at, Some(Timestamp::from_millis(5_000)));
}

#[test]
fn find_published_hides_drafts_and_archived() {
    let store = SqliteStore::open_in_memory().unwrap();
    let draft = Page::new("Draft Page");
    let mut archived = Page::new("Old Page");
    archived.archive();
    store.save_page(&draft).unwrap();
    store.save_page(&archived).unwrap();

    assert!(store.find_published("draft-page").unwrap().is_none());
    assert!(store.find_published(&draft.id.to_string()).unwrap().is_none());
    assert!(store.find_published("old-page").unwrap().is_none());
    assert!(store.find_published("missing").unwrap().is_none());
}

// ── Deletion ─────────────────────────────────────────────────────

#[test]
fn delete_page_removes_its_leads() {
    let store = SqliteStore::open_in_memory().unwrap();
    let page = Page::new("Doomed");
    let other = Page::new("Survivor");
    store.save_page(&page).unwrap();
    store.save_page(&other).unwrap();

    let now = Timestamp::from_millis(1_000);
    let lead = Lead::from_submission(page.id, None, [("email", "a@b.co")], now)
        .unwrap();
    let kept = Lead::from_submission(other.id, None, [("email", "c@d.co")], now)
        .unwrap();
    store.save_lead(&lead).unwrap();
    store.save_lead(&kept).unwrap();

    assert!(store.delete_page(page.id).unwrap());
    assert!(store.load_page(page.id).unwrap().is_none());
    assert_eq!(store.count_leads(Some(page.id)).unwrap(), 0);
    assert_eq!(store.count_leads(None).unwrap(), 1);
    assert!(!store.delete_page(page.id).unwrap());
}

// ── On-disk ──────────────────────────────────────────────────────

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("pages.db");
    let page = page_with_blocks("Durable");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.save_page(&page).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.load_page(page.id).unwrap().unwrap(), page);
}
