//! Built-in token table
//!
//! The eight default calendar-field tokens, initialized once per process
//! and read-only afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::types::TokenResolver;

// Global singleton for the built-in resolvers
static DEFAULT_TOKENS: OnceLock<HashMap<&'static str, TokenResolver>> = OnceLock::new();

/// The built-in token table
///
/// Maps the 8 default token names to their resolvers: `fff` (milliseconds,
/// 3 digits), `ss` (seconds), `mm` (minutes), `HH` (hours, 24-hour), `DD`
/// (day of month), `MM` (month number), `YY` (last two digits of the
/// year), `YYYY` (full year, at least 4 digits). All fields are
/// left-padded with zeros; values wider than the pad width are kept whole.
pub fn default_tokens() -> &'static HashMap<&'static str, TokenResolver> {
    DEFAULT_TOKENS.get_or_init(|| {
        let mut table: HashMap<&'static str, TokenResolver> = HashMap::new();
        table.insert(
            "fff",
            Arc::new(|d: &NaiveDateTime| format!("{:03}", d.nanosecond() / 1_000_000)),
        );
        table.insert(
            "ss",
            Arc::new(|d: &NaiveDateTime| format!("{:02}", d.second())),
        );
        table.insert(
            "mm",
            Arc::new(|d: &NaiveDateTime| format!("{:02}", d.minute())),
        );
        table.insert(
            "HH",
            Arc::new(|d: &NaiveDateTime| format!("{:02}", d.hour())),
        );
        table.insert(
            "DD",
            Arc::new(|d: &NaiveDateTime| format!("{:02}", d.day())),
        );
        table.insert(
            "MM",
            Arc::new(|d: &NaiveDateTime| format!("{:02}", d.month())),
        );
        table.insert(
            "YY",
            Arc::new(|d: &NaiveDateTime| format!("{:02}", d.year() % 100)),
        );
        table.insert(
            "YYYY",
            Arc::new(|d: &NaiveDateTime| format!("{:04}", d.year())),
        );
        table
    })
}
