use super::*;

#[test]
fn status_rows_sort_by_count() {
    let mut summary = AnalyticsSummary::default();
    summary.applications_by_status.insert("Applied".to_owned(), 4);
    summary.applications_by_status.insert("Hired".to_owned(), 1);
    summary.applications_by_status.insert("Screening".to_owned(), 4);
    let rows = status_rows(&summary);
    assert_eq!(
        rows,
        vec![("Applied".to_owned(), 4), ("Screening".to_owned(), 4), ("Hired".to_owned(), 1)]
    );
}

#[test]
fn bar_width_handles_empty_total() {
    assert_eq!(bar_width(3, 0), "0%");
    assert_eq!(bar_width(1, 4), "25.0%");
    assert_eq!(bar_width(4, 4), "100.0%");
}
