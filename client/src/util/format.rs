//! Display formatting for backend values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Date part of an ISO-8601 timestamp (`2025-03-01T10:00:00Z` → `2025-03-01`).
pub fn format_date(iso: &str) -> String {
    let trimmed = iso.trim();
    match trimmed.split_once('T') {
        Some((date, _)) => date.to_owned(),
        None => trimmed.to_owned(),
    }
}

/// Date and `HH:MM` of an ISO-8601 timestamp.
pub fn format_date_time(iso: &str) -> String {
    let trimmed = iso.trim();
    match trimmed.split_once('T') {
        Some((date, time)) => {
            let hhmm: String = time.chars().take(5).collect();
            format!("{date} {hhmm}")
        }
        None => trimmed.to_owned(),
    }
}

/// Whole currency units with thousands separators (`85000.0` → `85,000`).
pub fn format_money(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 { format!("-{grouped}") } else { grouped }
}

/// Parse an optional numeric form field; blank means `None`.
pub fn parse_optional_amount(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim().replace(',', "");
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(format!("`{}` is not a valid amount", raw.trim())),
    }
}

/// Split a comma separated list, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
