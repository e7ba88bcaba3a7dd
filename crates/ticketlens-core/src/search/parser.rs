//! Query string to [`SearchFilter`]

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{Qualifier, SearchFilter};

/// Day/month/year, as typed into the search box
const DATE_FORMAT: &str = "%d/%m/%Y";

static QUALIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(before|after|reporter):(\S*)(.*)$").expect("valid regex"));

/// Parse a raw search string.
///
/// Never fails: an unparseable date drops the qualifier and keeps the
/// remaining free text.
pub fn parse(raw: &str) -> SearchFilter {
    let raw = raw.trim();

    let Some(caps) = QUALIFIER_RE.captures(raw) else {
        return SearchFilter {
            search_value: free_text(raw),
            qualifier: Qualifier::None,
        };
    };

    let token = &caps[2];
    let qualifier = match &caps[1] {
        "before" => parse_date(token).map(|day| Qualifier::Before(start_of_day(day))),
        "after" => parse_date(token).map(|day| Qualifier::After(end_of_day(day))),
        "reporter" => reporter(token).map(Qualifier::Reporter),
        _ => unreachable!("regex only captures known qualifiers"),
    };

    if qualifier.is_none() {
        debug!(qualifier = &caps[1], token, "Dropping qualifier with invalid value");
    }

    SearchFilter {
        search_value: free_text(&caps[3]),
        qualifier: qualifier.unwrap_or_default(),
    }
}

fn free_text(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_lowercase())
}

fn reporter(token: &str) -> Option<String> {
    let email = token.trim();
    (!email.is_empty()).then(|| email.to_lowercase())
}

fn parse_date(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, DATE_FORMAT).ok()
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

// Last representable millisecond of the day
fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid time");
    day.and_time(last_milli).and_utc()
}
