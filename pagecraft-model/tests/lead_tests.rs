use pagecraft_model::{Lead, LeadStatus, ModelError, MAX_FIELD_VALUE_LEN};
use pagecraft_types::{PageId, Timestamp};
use pretty_assertions::assert_eq;

#[test]
fn submission_is_trimmed_and_empty_values_dropped() {
    let lead = Lead::from_submission(
        PageId::new(),
        None,
        [("email", "  ada@example.com "), ("name", "Ada"), ("company", "   ")],
        Timestamp::from_millis(10),
    )
    .unwrap();

    assert_eq!(lead.fields.len(), 2);
    assert_eq!(lead.email(), Some("ada@example.com"));
    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.submitted_at, Timestamp::from_millis(10));
}

#[test]
fn empty_submission_is_rejected() {
    let err = Lead::from_submission(PageId::new(), None, [("email", " ")], Timestamp::now())
        .unwrap_err();
    assert_eq!(err, ModelError::EmptySubmission);

    let none: Vec<(String, String)> = Vec::new();
    assert!(Lead::from_submission(PageId::new(), None, none, Timestamp::now()).is_err());
}

#[test]
fn oversized_value_is_rejected() {
    let big = "x".repeat(MAX_FIELD_VALUE_LEN + 1);
    let err = Lead::from_submission(
        PageId::new(),
        None,
        [("message", big.as_str())],
        Timestamp::now(),
    )
    .unwrap_err();
    assert_eq!(err, ModelError::FieldTooLong("message".into()));
}

#[test]
fn oversized_name_is_rejected() {
    let name = "n".repeat(100);
    let result = Lead::from_submission(
        PageId::new(),
        None,
        [(name.as_str(), "v")],
        Timestamp::now(),
    );
    assert!(matches!(result, Err(ModelError::FieldTooLong(_))));
}

#[test]
fn set_status_stamps_update_time() {
    let mut lead =
        Lead::from_submission(PageId::new(), None, [("email", "a@b.c")], Timestamp::from_millis(1))
            .unwrap();
    lead.set_status(LeadStatus::Qualified, Timestamp::from_millis(99));
    assert_eq!(lead.status, LeadStatus::Qualified);
    assert_eq!(lead.updated_at, Timestamp::from_millis(99));
    assert_eq!(lead.submitted_at, Timestamp::from_millis(1));
}

#[test]
fn lead_status_parses() {
    assert_eq!("converted".parse::<LeadStatus>().unwrap(), LeadStatus::Converted);
    assert!("spam".parse::<LeadStatus>().is_err());
}
