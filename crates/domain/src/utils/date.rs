//! Date display helpers
//!
//! The backend sends dates as `YYYY-MM-DD`, sometimes with a time suffix
//! (`2025-11-23T00:00:00.000Z`). The UI shows day-first Brazilian dates.

use chrono::NaiveDate;

use crate::constants::{
    DISPLAY_DATE_FORMAT, EMPTY_DATE_PLACEHOLDER, WIRE_DATE_FORMAT,
};

/// Convert a backend date string to `DD/MM/YYYY` for display.
///
/// Falls back to the cleaned input when parsing fails, and to a placeholder
/// when the input is empty.
#[must_use]
pub fn format_for_display(wire_date: &str) -> String {
    if wire_date.is_empty() {
        return EMPTY_DATE_PLACEHOLDER.to_string();
    }

    // Keep only the date part; the time suffix is irrelevant here.
    let cleaned = wire_date.get(..10).unwrap_or(wire_date);

    match NaiveDate::parse_from_str(cleaned, WIRE_DATE_FORMAT) {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => cleaned.to_string(),
    }
}
