//! Display formatting for dates, excerpts, and author initials.

use time::format_description::well_known::Rfc3339;
use time::macros::offset;
use time::{OffsetDateTime, UtcOffset};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Turkey has observed a fixed UTC+3 offset since 2016.
const TURKEY_OFFSET: UtcOffset = offset!(+3);

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

/// Format an RFC 3339 timestamp as a Turkish calendar date, e.g.
/// `15 Mart 2024`, after shifting it to Turkey's local offset. A bare
/// `YYYY-MM-DD` prefix is used as-is; anything else is returned raw.
#[must_use]
pub fn format_date_tr(timestamp: &str) -> String {
    if let Ok(instant) = OffsetDateTime::parse(timestamp, &Rfc3339) {
        let local = instant.to_offset(TURKEY_OFFSET);
        let month = usize::from(u8::from(local.month()));
        return format!("{} {} {}", local.day(), MONTHS_TR[month - 1], local.year());
    }
    parse_ymd(timestamp).map_or_else(
        || timestamp.to_owned(),
        |(year, month, day)| format!("{day} {} {year}", MONTHS_TR[month - 1]),
    )
}

fn parse_ymd(timestamp: &str) -> Option<(u32, usize, u32)> {
    let date = timestamp.get(..10)?;
    let mut parts = date.split('-');
    let year = parts.next()?.parse::<u32>().ok()?;
    let month = parts.next()?.parse::<usize>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// Shorten `text` to at most `max_chars` characters, cutting at a word
/// boundary when possible and appending an ellipsis.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == '.'))
}

/// Up to two uppercase initials for an avatar badge.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '.')
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphabetic())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Star string for a 1–5 rating, e.g. `★★★★☆`.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
