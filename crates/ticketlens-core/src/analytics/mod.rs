//! Dashboard analytics
//!
//! Turns a ticket list into the label histogram, monthly timeline,
//! reporter leaderboard and summary statistics shown on the dashboard.

mod aggregator;
mod tally;

pub use aggregator::{aggregate, Aggregator};
pub use tally::Tally;
