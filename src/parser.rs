//! Best-effort extraction of an entry from a line of free text such as
//! `"Paid $12 for lunch yesterday"`.
//!
//! Every field is inferred on its own and simply stays `None` when nothing
//! usable is found; deciding whether a partial result is good enough is up to
//! the caller (see [`PartialEntry::into_new_entry`]).

use std::sync::OnceLock;

use chrono::{Duration, Local, NaiveDate};
use regex::Regex;

use crate::categorizer::{entry_type_for, infer_category};
use crate::models::PartialEntry;

const TITLE_CONNECTORS: &[&str] = &["for ", "on ", "at ", "from "];
const TITLE_STOP_CHARS: &[char] = &['.', ',', '!', '$'];

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:R\$|[$€£¥₹₦])?\s*([0-9]+(?:[.,][0-9]{1,2})?)").expect("valid amount regex")
    })
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})|([0-9]{1,2}[/.\-][0-9]{1,2}[/.\-][0-9]{2,4})")
            .expect("valid date regex")
    })
}

fn date_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:yesterday|today)\b").expect("valid date word regex"))
}

/// Parse `text` relative to the local calendar date.
pub fn parse(text: &str) -> PartialEntry {
    parse_with_today(text, Local::now().date_naive())
}

/// Parse `text`, resolving relative dates against `today`.
pub fn parse_with_today(text: &str, today: NaiveDate) -> PartialEntry {
    if text.trim().is_empty() {
        return PartialEntry::default();
    }
    let lower = text.to_lowercase();
    let category = infer_category(&lower);

    let parsed = PartialEntry {
        title: infer_title(&lower),
        amount: extract_amount(text),
        entry_type: Some(entry_type_for(category)),
        category,
        date: Some(infer_date(&lower, today)),
    };
    tracing::debug!(?parsed, "parsed quick entry text");
    parsed
}

/// First number in the text, optionally preceded by a currency symbol.
/// A comma is read as a decimal separator, never as a thousands separator.
pub fn extract_amount(text: &str) -> Option<f64> {
    let normalized = text.replacen(',', ".", 1);
    let caps = amount_re().captures(&normalized)?;
    caps.get(1)?.as_str().replace(',', ".").parse().ok()
}

/// `yesterday`, `today`, an explicit date token, or `today` as a fallback.
pub fn infer_date(lower: &str, today: NaiveDate) -> NaiveDate {
    if lower.contains("yesterday") {
        return today - Duration::days(1);
    }
    if lower.contains("today") {
        return today;
    }
    date_re()
        .find(lower)
        .and_then(|m| parse_date_token(m.as_str()))
        .unwrap_or(today)
}

/// Parse `YYYY-MM-DD`, or `M/D/Y` with `/`, `.` or `-` separators. When the
/// month-first reading is not a real date the token is retried day-first.
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Some(date);
    }
    let parts: Vec<&str> = token.split(['/', '.', '-']).collect();
    if parts.len() != 3 {
        return None;
    }
    let first: u32 = parts[0].parse().ok()?;
    let second: u32 = parts[1].parse().ok()?;
    let mut year: i32 = parts[2].parse().ok()?;
    if parts[2].len() == 2 {
        year += if year < 50 { 2000 } else { 1900 };
    }
    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}

/// Text after the first connector word ("for", "on", "at", "from") that
/// leaves something once dates are stripped, else the first word.
pub fn infer_title(lower: &str) -> Option<String> {
    for start in connector_tails(lower) {
        if let Some(title) = clean_title(&lower[start..]) {
            return Some(title);
        }
    }
    lower.split_whitespace().next().map(capitalize)
}

/// Byte offsets just past each connector word, in input order.
fn connector_tails(lower: &str) -> Vec<usize> {
    let mut tails = Vec::new();
    let mut prev: Option<char> = None;
    for (i, c) in lower.char_indices() {
        if prev.map_or(true, char::is_whitespace) {
            let rest = &lower[i..];
            if let Some(conn) = TITLE_CONNECTORS.iter().find(|conn| rest.starts_with(**conn)) {
                tails.push(i + conn.len());
            }
        }
        prev = Some(c);
    }
    tails
}

fn clean_title(tail: &str) -> Option<String> {
    let without_dates = date_re().replace_all(tail, " ");
    let without_words = date_word_re().replace_all(&without_dates, " ");
    let cut = without_words
        .split(TITLE_STOP_CHARS)
        .next()
        .unwrap_or_default();
    let title = cut.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() {
        None
    } else {
        Some(capitalize(&title))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
