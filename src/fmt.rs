use chrono::NaiveDate;

/// Format a transaction value for display: $1,234.56. Values are two-decimal
/// by the entry rule, so rendering in whole cents is exact.
pub fn money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Render a stored ISO date (YYYY-MM-DD) in the DD-MM-YYYY form used at the
/// prompts. Falls back to the raw string if it does not parse.
pub fn display_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}
