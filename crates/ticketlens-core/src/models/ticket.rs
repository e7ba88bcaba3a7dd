//! Ticket data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A reported ticket, as loaded from storage.
///
/// Read-only input: nothing in this crate mutates or persists tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Opaque unique identifier
    pub id: String,

    /// Ticket title
    #[serde(default)]
    pub title: String,

    /// Ticket body
    #[serde(default)]
    pub content: String,

    /// When the ticket was created
    #[serde(
        default,
        alias = "creationTime",
        deserialize_with = "deserialize_instant"
    )]
    pub creation_time: Option<DateTime<Utc>>,

    /// Reporter email, kept verbatim; empty when the reporter is unknown
    #[serde(default, alias = "userEmail")]
    pub user_email: String,

    /// Labels attached by the reporter
    #[serde(default, deserialize_with = "deserialize_labels")]
    pub labels: Vec<String>,
}

impl Ticket {
    /// Create a ticket with no labels
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        creation_time: DateTime<Utc>,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            creation_time: Some(creation_time),
            user_email: user_email.into(),
            labels: Vec::new(),
        }
    }

    /// Builder-style label assignment
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// Creation times arrive either as RFC 3339 text or as epoch milliseconds
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInstant {
    Millis(i64),
    Text(DateTime<Utc>),
}

fn deserialize_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawInstant>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawInstant::Text(instant)) => Ok(Some(instant)),
        Some(RawInstant::Millis(ms)) => DateTime::from_timestamp_millis(ms)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
    }
}

// `"labels": null` is treated the same as a missing field
fn deserialize_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_epoch_millis_and_camel_case() {
        let ticket: Ticket = serde_json::from_str(
            r#"{
                "id": "t-1",
                "title": "XSS in search box",
                "content": "reflected",
                "creationTime": 1704067200000,
                "userEmail": "alice@example.com",
                "labels": ["xss"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            ticket.creation_time,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(ticket.user_email, "alice@example.com");
        assert_eq!(ticket.labels, vec!["xss".to_string()]);
    }

    #[test]
    fn test_deserialize_rfc3339() {
        let ticket: Ticket = serde_json::from_str(
            r#"{"id": "t-2", "creation_time": "2024-03-05T10:00:00Z", "user_email": "bob@example.com"}"#,
        )
        .unwrap();

        assert_eq!(
            ticket.creation_time,
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_optional_fields() {
        let ticket: Ticket =
            serde_json::from_str(r#"{"id": "t-3", "user_email": "carol@example.com", "labels": null}"#)
                .unwrap();

        assert!(ticket.labels.is_empty());
        assert!(ticket.creation_time.is_none());
        assert!(ticket.title.is_empty());
    }

    #[test]
    fn test_missing_reporter_reads_as_empty() {
        let tickets: Vec<Ticket> = serde_json::from_str(
            r#"[
                {"id": "t-4", "userEmail": "dave@example.com"},
                {"id": "t-5", "title": "anonymous report"}
            ]"#,
        )
        .unwrap();

        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[1].user_email, "");
        assert_eq!(tickets[1].title, "anonymous report");
    }
}
