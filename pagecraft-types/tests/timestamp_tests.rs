use pagecraft_types::Timestamp;
use proptest::prelude::*;

#[test]
fn now_is_after_2020() {
    let ts = Timestamp::now();
    assert!(ts.as_millis() > 1_577_836_800_000);
}

#[test]
fn from_millis_roundtrip() {
    assert_eq!(Timestamp::from_millis(42).as_millis(), 42);
}

#[test]
fn ordering_follows_millis() {
    assert!(Timestamp::from_millis(100) < Timestamp::from_millis(200));
}

#[test]
fn formats_as_rfc3339_utc() {
    let ts = Timestamp::from_millis(1_700_000_000_123);
    assert_eq!(ts.to_rfc3339(), "2023-11-14T22:13:20.123Z");
    assert_eq!(ts.to_string(), ts.to_rfc3339());
}

#[test]
fn parses_rfc3339() {
    let ts = Timestamp::parse_rfc3339("2023-11-14T22:13:20.123Z").unwrap();
    assert_eq!(ts.as_millis(), 1_700_000_000_123);
}

#[test]
fn parse_rejects_garbage() {
    assert!(Timestamp::parse_rfc3339("yesterday").is_err());
}

#[test]
fn serializes_as_integer() {
    let json = serde_json::to_string(&Timestamp::from_millis(7)).unwrap();
    assert_eq!(json, "7");
}

proptest! {
    #[test]
    fn rfc3339_roundtrip(millis in 0i64..4_102_444_800_000) {
        let ts = Timestamp::from_millis(millis);
        let parsed = Timestamp::parse_rfc3339(&ts.to_rfc3339()).unwrap();
        prop_assert_eq!(parsed, ts);
    }
}
