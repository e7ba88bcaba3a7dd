//! Ticket list to [`Analytics`]

use std::collections::BTreeMap;

use chrono::{DateTime, Local, Utc};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::models::{
    Analytics, AnalyticsStats, LabelCount, MonthCount, ReporterCount, Ticket,
};

use super::tally::Tally;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Aggregate tickets with default settings against the current time
pub fn aggregate(tickets: &[Ticket]) -> Analytics {
    Aggregator::default().aggregate_at(tickets, Utc::now())
}

/// Builds dashboard analytics from a ticket list
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AnalyticsConfig,
}

impl Aggregator {
    /// Create an aggregator with the given settings
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Aggregate against the current time
    pub fn aggregate(&self, tickets: &[Ticket]) -> Analytics {
        self.aggregate_at(tickets, Utc::now())
    }

    /// Aggregate, measuring the ticket rate up to `now`
    pub fn aggregate_at(&self, tickets: &[Ticket], now: DateTime<Utc>) -> Analytics {
        let labels = count_labels(tickets);
        let reporters = count_reporters(tickets);
        let unique_reporters = reporters.len();

        let label_counts: Vec<LabelCount> = labels
            .ranked()
            .into_iter()
            .map(|(label, count)| LabelCount { label, count })
            .collect();

        let top_reporters: Vec<ReporterCount> = reporters
            .ranked()
            .into_iter()
            .take(self.config.top_reporters)
            .map(|(email, count)| ReporterCount { email, count })
            .collect();

        let most_common_label = label_counts
            .first()
            .map_or_else(|| self.config.no_label.clone(), |top| top.label.clone());

        let stats = AnalyticsStats {
            total_tickets: tickets.len(),
            unique_reporters,
            most_common_label,
            avg_tickets_per_day: tickets_per_day(tickets, now),
        };

        debug!(
            tickets = stats.total_tickets,
            labels = label_counts.len(),
            reporters = stats.unique_reporters,
            "Aggregated ticket analytics"
        );

        Analytics {
            label_counts,
            timeline: monthly_timeline(tickets),
            top_reporters,
            stats,
        }
    }
}

fn count_labels(tickets: &[Ticket]) -> Tally<String> {
    let mut tally = Tally::new();
    for label in tickets.iter().flat_map(|t| &t.labels) {
        tally.bump(label.as_str());
    }
    tally
}

// Keyed verbatim: "Alice@x" and "alice@x" are different reporters here
fn count_reporters(tickets: &[Ticket]) -> Tally<String> {
    let mut tally = Tally::new();
    for ticket in tickets {
        tally.bump(ticket.user_email.as_str());
    }
    tally
}

fn monthly_timeline(tickets: &[Ticket]) -> Vec<MonthCount> {
    let mut months: BTreeMap<String, usize> = BTreeMap::new();
    for created in tickets.iter().filter_map(|t| t.creation_time) {
        let key = created.with_timezone(&Local).format("%Y-%m").to_string();
        *months.entry(key).or_insert(0) += 1;
    }

    months
        .into_iter()
        .map(|(month, count)| MonthCount { month, count })
        .collect()
}

fn tickets_per_day(tickets: &[Ticket], now: DateTime<Utc>) -> f64 {
    if tickets.is_empty() {
        return 0.0;
    }

    let days = tickets
        .iter()
        .filter_map(|t| t.creation_time)
        .min()
        .map_or(0.0, |earliest| {
            (now - earliest).num_milliseconds() as f64 / MILLIS_PER_DAY
        });

    round_one_decimal(tickets.len() as f64 / days.max(1.0))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
