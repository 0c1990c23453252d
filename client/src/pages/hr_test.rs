use super::*;

#[test]
fn missing_or_unknown_tab_opens_postings() {
    assert_eq!(HrTab::from_query(None), HrTab::Postings);
    assert_eq!(HrTab::from_query(Some("payroll")), HrTab::Postings);
}

#[test]
fn slugs_resolve_to_their_tab() {
    for tab in HrTab::ALL {
        assert_eq!(HrTab::from_query(Some(tab.slug())), tab);
    }
}
