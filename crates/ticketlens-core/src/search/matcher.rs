//! In-memory evaluation of a [`SearchFilter`]

use crate::config::SearchConfig;
use crate::models::{Qualifier, SearchFilter, Ticket};

impl SearchFilter {
    /// Check whether a ticket satisfies this filter.
    ///
    /// Date bounds are exclusive. A ticket with no creation time never
    /// satisfies a date qualifier.
    pub fn matches(&self, ticket: &Ticket, config: &SearchConfig) -> bool {
        let qualified = match &self.qualifier {
            Qualifier::None => true,
            Qualifier::Before(bound) => ticket.creation_time.is_some_and(|t| t < *bound),
            Qualifier::After(bound) => ticket.creation_time.is_some_and(|t| t > *bound),
            Qualifier::Reporter(email) => ticket.user_email.trim().to_lowercase() == *email,
        };

        qualified
            && self
                .search_value
                .as_deref()
                .is_none_or(|needle| contains_text(ticket, needle, config))
    }
}

fn contains_text(ticket: &Ticket, needle: &str, config: &SearchConfig) -> bool {
    let needle = needle.to_lowercase();
    let found = |haystack: &str| haystack.to_lowercase().contains(&needle);

    found(&ticket.title)
        || found(&ticket.content)
        || (config.match_reporter_email && found(&ticket.user_email))
}

/// Keep the tickets matching `filter`, in input order
pub fn apply<'a>(
    tickets: &'a [Ticket],
    filter: &SearchFilter,
    config: &SearchConfig,
) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|ticket| filter.matches(ticket, config))
        .collect()
}
