use super::*;

#[test]
fn format_date_drops_time() {
    assert_eq!(format_date("2025-03-01T10:00:00Z"), "2025-03-01");
    assert_eq!(format_date("2025-03-01"), "2025-03-01");
}

#[test]
fn format_date_time_keeps_minutes() {
    assert_eq!(format_date_time("2025-03-01T09:30:00"), "2025-03-01 09:30");
}

#[test]
fn format_money_groups_thousands() {
    assert_eq!(format_money(0.0), "0");
    assert_eq!(format_money(999.0), "999");
    assert_eq!(format_money(85_000.0), "85,000");
    assert_eq!(format_money(1_234_567.4), "1,234,567");
    assert_eq!(format_money(-4_500.0), "-4,500");
}

#[test]
fn parse_optional_amount_accepts_blank_and_grouped() {
    assert_eq!(parse_optional_amount("  "), Ok(None));
    assert_eq!(parse_optional_amount("85,000"), Ok(Some(85_000.0)));
}

#[test]
fn parse_optional_amount_rejects_garbage_and_negative() {
    assert!(parse_optional_amount("lots").is_err());
    assert!(parse_optional_amount("-5").is_err());
}

#[test]
fn split_list_trims_and_drops_blanks() {
    assert_eq!(split_list(" rust, sql ,, "), vec!["rust".to_owned(), "sql".to_owned()]);
    assert!(split_list("").is_empty());
}
