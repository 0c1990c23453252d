use super::*;

#[test]
fn rejection_requires_note() {
    assert!(review_note(DocumentStatus::Rejected, "   ").is_err());
    assert_eq!(review_note(DocumentStatus::Rejected, " blurry scan "), Ok(Some("blurry scan".to_owned())));
}

#[test]
fn verification_note_is_optional() {
    assert_eq!(review_note(DocumentStatus::Verified, ""), Ok(None));
    assert_eq!(review_note(DocumentStatus::Verified, "ok"), Ok(Some("ok".to_owned())));
}
