//! French display formatting for list rows
//!
//! Dates render in the short form the bills table has always used
//! ("22 Mar. 23"): day without leading zero, capitalized three-letter French
//! month, trailing dot, two-digit year. A date the store returns malformed
//! must not break the row, so formatting falls back to the raw string.

use chrono::{Datelike, NaiveDate};

use crate::core::bill::BillStatus;

const MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Format an ISO date for a table row, passing malformed input through
/// unchanged.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => {
            let month = MONTHS_SHORT[parsed.month0() as usize];
            let mut chars = month.chars();
            let capitalized: String = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.take(2)).collect(),
                None => String::new(),
            };
            format!("{} {}. {:02}", parsed.day(), capitalized, parsed.year() % 100)
        }
        Err(_) => date.to_string(),
    }
}

/// The status label shown in the bills table.
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}
