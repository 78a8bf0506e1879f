use pagecraft_types::{ComponentId, LeadId, PageId};
use std::collections::HashSet;
use std::str::FromStr;

// ── PageId ────────────────────────────────────────────────────────

#[test]
fn page_id_new_is_unique() {
    assert_ne!(PageId::new(), PageId::new());
}

#[test]
fn page_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    let id = PageId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn page_id_display_and_parse() {
    let id = PageId::new();
    let parsed = PageId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn page_id_parse_invalid() {
    assert!(PageId::parse("not-a-uuid").is_err());
    assert!(PageId::from_str("").is_err());
}

#[test]
fn page_id_serializes_as_plain_string() {
    let id = PageId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let back: PageId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn later_ids_sort_after_earlier_ones() {
    let first = PageId::new();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = PageId::new();
    assert!(first < second);
}

// ── ComponentId / LeadId ──────────────────────────────────────────

#[test]
fn component_id_hash_and_eq() {
    let id = ComponentId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn component_id_from_str() {
    let id = ComponentId::new();
    let parsed: ComponentId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn lead_id_default_is_unique() {
    assert_ne!(LeadId::default(), LeadId::default());
}

#[test]
fn ids_of_different_kinds_share_uuid_text() {
    let uuid = uuid::Uuid::now_v7();
    assert_eq!(
        PageId::from_uuid(uuid).to_string(),
        LeadId::from_uuid(uuid).to_string()
    );
}
