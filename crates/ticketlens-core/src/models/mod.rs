//! Data models for TicketLens

mod analytics;
mod filter;
mod ticket;

pub use analytics::*;
pub use filter::*;
pub use ticket::*;
