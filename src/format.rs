//! Display Formatting
//!
//! Pure text transforms for card rendering: timestamp formatting with a
//! visible fallback and the character-count truncation decision. No DOM
//! access here, so all of it is unit-tested on the host.

use chrono::{DateTime, NaiveDateTime};

/// Shown when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Некорректная дата";

/// Reviews longer than this get a collapsed preview with a toggle.
pub const REVIEW_PREVIEW_LIMIT: usize = 200;

/// Normalize the backend's offset notation to a colon-delimited one.
///
/// The backend emits `"+0300"` (no colon) and sometimes a space before the
/// sign; both forms must parse identically to `"+03:00"`.
pub fn normalize_offset(raw: &str) -> String {
    let s = raw.trim();
    if let Some(idx) = s.rfind(['+', '-']) {
        // Skip the hyphens inside the date part.
        if idx > 8 {
            let (head, tail) = s.split_at(idx);
            let digits = &tail[1..];
            if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
                return format!(
                    "{}{}{}:{}",
                    head.trim_end(),
                    &tail[..1],
                    &digits[..2],
                    &digits[2..]
                );
            }
            if digits.len() == 5 && digits.as_bytes()[2] == b':' {
                return format!("{}{}", head.trim_end(), tail);
            }
        }
    }
    s.to_string()
}

/// Format a backend timestamp as `DD.MM.YYYY`, in the timestamp's own offset.
///
/// Accepts RFC 3339, the space-separated SQL style, and naive datetimes;
/// anything else renders [`INVALID_DATE`] rather than failing the card.
pub fn format_card_date(raw: &str) -> String {
    let cleaned = normalize_offset(raw);

    if let Ok(dt) = DateTime::parse_from_rfc3339(&cleaned) {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_str(&cleaned, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return dt.format("%d.%m.%Y").to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, fmt) {
            return dt.format("%d.%m.%Y").to_string();
        }
    }
    INVALID_DATE.to_string()
}

/// Product card artwork, keyed on the product name.
pub fn product_image(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "егэ" => "/assets/img/work_note3.png",
        "огэ" => "/assets/img/work_note4.png",
        _ => "/assets/img/work_note3.png",
    }
}

/// Collapsed preview of a long review, or `None` when the text fits as is.
///
/// Counts characters, not bytes: review text is mostly Cyrillic.
pub fn preview(text: &str, limit: usize) -> Option<String> {
    if text.chars().count() <= limit {
        return None;
    }
    let mut short: String = text.chars().take(limit).collect();
    short.push_str("...");
    Some(short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_offset_spellings_format_identically() {
        let compact = format_card_date("2024-05-12T18:30:00+0300");
        let delimited = format_card_date("2024-05-12T18:30:00+03:00");
        assert_eq!(compact, "12.05.2024");
        assert_eq!(compact, delimited);
    }

    #[test]
    fn space_before_sign_is_tolerated() {
        assert_eq!(format_card_date("2024-05-12 18:30:00 +0300"), "12.05.2024");
        assert_eq!(format_card_date("2024-05-12 18:30:00 +03:00"), "12.05.2024");
    }

    #[test]
    fn negative_offsets_work() {
        assert_eq!(format_card_date("2024-01-02T23:30:00-0500"), "02.01.2024");
    }

    #[test]
    fn naive_and_fractional_timestamps_parse() {
        assert_eq!(format_card_date("2024-11-03 08:15:00"), "03.11.2024");
        assert_eq!(format_card_date("2024-11-03T08:15:00.123456+0300"), "03.11.2024");
    }

    #[test]
    fn day_and_month_are_zero_padded() {
        assert_eq!(format_card_date("2025-01-05T00:00:00+03:00"), "05.01.2025");
    }

    #[test]
    fn garbage_renders_the_invalid_marker() {
        assert_eq!(format_card_date(""), INVALID_DATE);
        assert_eq!(format_card_date("вчера"), INVALID_DATE);
        assert_eq!(format_card_date("2024-13-40T99:00:00+0300"), INVALID_DATE);
    }

    #[test]
    fn short_text_gets_no_preview() {
        assert_eq!(preview("короткий отзыв", REVIEW_PREVIEW_LIMIT), None);
    }

    #[test]
    fn text_at_the_limit_gets_no_preview() {
        let text: String = std::iter::repeat('ж').take(REVIEW_PREVIEW_LIMIT).collect();
        assert_eq!(preview(&text, REVIEW_PREVIEW_LIMIT), None);
    }

    #[test]
    fn long_cyrillic_text_is_cut_on_character_count() {
        let text: String = std::iter::repeat('ж').take(REVIEW_PREVIEW_LIMIT + 1).collect();
        let short = preview(&text, REVIEW_PREVIEW_LIMIT).expect("should truncate");
        assert_eq!(short.chars().count(), REVIEW_PREVIEW_LIMIT + 3);
        assert!(short.ends_with("..."));
    }
}
