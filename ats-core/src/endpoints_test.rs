use super::*;

#[test]
fn completion_endpoint_formats_expected_path() {
    assert_eq!(candidate_completion("u1"), "/Candidate/u1/isComplete");
}

#[test]
fn per_candidate_collections_share_prefix_shape() {
    assert_eq!(candidate_applications("u1"), "/Applications/candidate/u1");
    assert_eq!(candidate_interviews("u1"), "/Interviews/candidate/u1");
    assert_eq!(candidate_offers("u1"), "/Offers/candidate/u1");
    assert_eq!(candidate_documents("u1"), "/Documents/candidate/u1");
}

#[test]
fn action_endpoints_append_verb() {
    assert_eq!(application_status("a9"), "/Applications/a9/status");
    assert_eq!(offer_response("o3"), "/Offers/o3/respond");
    assert_eq!(document_verification("d2"), "/Documents/d2/verify");
    assert_eq!(employee_role("e5"), "/Employees/e5/role");
}
