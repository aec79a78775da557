//! Display helpers for timestamps, phone numbers and photo counts.
//!
//! Timestamps carrying an offset are rendered in UTC; naive timestamps are
//! rendered as written.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Fallback text for timestamps that cannot be parsed.
pub const DATE_UNAVAILABLE: &str = "Data não disponível";

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parse an ISO-8601 timestamp as sent by the gateway.
///
/// Accepts RFC 3339 (with offset or `Z`), naive date-times with or without
/// fractional seconds, and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    for pattern in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Detail-screen format: `dd/MM/yy HH:mm`.
pub fn format_detail_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%d/%m/%y %H:%M").to_string())
        .unwrap_or_else(|| DATE_UNAVAILABLE.to_string())
}

/// List-row format: `17 de março, às 10:00`.
pub fn format_list_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{:02} de {}, às {:02}:{:02}",
            dt.day(),
            MONTHS_PT_BR[dt.month0() as usize],
            dt.hour(),
            dt.minute()
        ),
        None => DATE_UNAVAILABLE.to_string(),
    }
}

/// ISO-8601 timestamp for request bodies (`2024-03-17T10:00:00.000Z`).
pub fn to_iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Keep only ASCII digits.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Mask a phone number while it is typed.
///
/// `(DD) DDDDD-DDDD` from 11 digits on (extra digits dropped),
/// `(DD) DDDD-D...` from 7, `(DD) D...` from 2.
pub fn format_phone(text: &str) -> String {
    let cleaned = digits_only(text);
    let len = cleaned.len();
    if len >= 11 {
        format!(
            "({}) {}-{}",
            &cleaned[0..2],
            &cleaned[2..7],
            &cleaned[7..11]
        )
    } else if len >= 7 {
        format!("({}) {}-{}", &cleaned[0..2], &cleaned[2..6], &cleaned[6..])
    } else if len >= 2 {
        format!("({}) {}", &cleaned[0..2], &cleaned[2..])
    } else {
        cleaned
    }
}

/// `1 foto`, `3 fotos`.
pub fn photo_count_label(count: usize) -> String {
    if count == 1 {
        "1 foto".to_string()
    } else {
        format!("{count} fotos")
    }
}
