//! Prose formatting helpers shared by the libraries and assembly.

use chrono::{Days, NaiveDate};

const DATE_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Display format for dates in letter prose ("January 5, 2024").
pub const DATE_DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Render a dollar amount with thousands separators ("$1,234.56").
pub fn money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len().saturating_add(4));
    let lead = whole.len().wrapping_rem(3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx != 0 && idx.wrapping_rem(3) == lead {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Render a date for prose. Recognized numeric formats become
/// "Month D, YYYY"; anything else is returned trimmed as written.
pub fn display_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format(DATE_DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.trim().to_owned())
}

/// Parse a date in one of the recognized numeric formats.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// The display date `days` after a recognized date, or `None` when the
/// input is not a recognized date.
pub fn date_after(raw: &str, days: u64) -> Option<String> {
    parse_date(raw)?
        .checked_add_days(Days::new(days))
        .map(|date| date.format(DATE_DISPLAY_FORMAT).to_string())
}

/// Render items as a numbered list, one per line.
pub fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("{}. {item}", idx.saturating_add(1)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render items as a bulleted list, one per line.
pub fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ensure a free-text fragment ends with terminal punctuation.
pub fn sentence(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with(['.', '!', '?', ':']) {
        trimmed.to_owned()
    } else {
        format!("{trimmed}.")
    }
}
