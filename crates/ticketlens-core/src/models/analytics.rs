//! Dashboard analytics models

use serde::{Deserialize, Serialize};

/// Occurrences of one label across all tickets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    /// Label text, as attached
    pub label: String,
    /// Number of occurrences
    pub count: usize,
}

/// Tickets created in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    /// `YYYY-MM`, in the local calendar
    pub month: String,
    /// Tickets created that month
    pub count: usize,
}

/// Tickets filed by one reporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterCount {
    /// Reporter email, verbatim
    pub email: String,
    /// Tickets filed
    pub count: usize,
}

/// Summary card statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsStats {
    /// Number of tickets aggregated
    pub total_tickets: usize,

    /// Distinct reporter emails, compared verbatim
    pub unique_reporters: usize,

    /// Label with the highest count, or the configured sentinel
    pub most_common_label: String,

    /// Tickets per day since the earliest ticket, one decimal place
    pub avg_tickets_per_day: f64,
}

/// Aggregated dashboard data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    /// Label histogram, most frequent first
    pub label_counts: Vec<LabelCount>,

    /// Tickets per month, oldest first
    pub timeline: Vec<MonthCount>,

    /// Reporter leaderboard, most active first
    pub top_reporters: Vec<ReporterCount>,

    /// Derived statistics
    pub stats: AnalyticsStats,
}
