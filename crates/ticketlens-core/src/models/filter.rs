//! Structured search filter produced by the query parser

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single structured directive a search string may carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Qualifier {
    /// Plain free-text search
    #[default]
    None,
    /// Tickets created strictly before this instant
    Before(DateTime<Utc>),
    /// Tickets created strictly after this instant (end of the given day)
    After(DateTime<Utc>),
    /// Tickets from this reporter, lowercased
    Reporter(String),
}

/// Search filter for the ticket listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchFilter {
    /// Lowercased free-text fragment; `None` when nothing is left to match
    pub search_value: Option<String>,

    /// At most one structured qualifier
    pub qualifier: Qualifier,
}

impl SearchFilter {
    /// Exclusive upper bound on creation time
    pub fn before_date(&self) -> Option<DateTime<Utc>> {
        match self.qualifier {
            Qualifier::Before(instant) => Some(instant),
            _ => None,
        }
    }

    /// Exclusive lower bound on creation time
    pub fn after_date(&self) -> Option<DateTime<Utc>> {
        match self.qualifier {
            Qualifier::After(instant) => Some(instant),
            _ => None,
        }
    }

    /// Reporter email for exact, case-insensitive matching
    pub fn reporter_email(&self) -> Option<&str> {
        match &self.qualifier {
            Qualifier::Reporter(email) => Some(email.as_str()),
            _ => None,
        }
    }

    /// True when the filter matches every ticket
    pub fn is_empty(&self) -> bool {
        self.search_value.is_none() && self.qualifier == Qualifier::None
    }
}
