//! # TicketLens
//!
//! Search-filter parsing and dashboard analytics for a ticket listing.
//!
//! Two independent, pure components:
//!
//! - **Search**: turns the raw search-box text into a [`SearchFilter`]
//!   (`before:`, `after:` and `reporter:` qualifiers plus free text)
//! - **Analytics**: turns a ticket list into an [`Analytics`] summary
//!   (label histogram, monthly timeline, top reporters, derived stats)
//!
//! ## Quick Start
//!
//! ```
//! use ticketlens::{analytics, search};
//!
//! let filter = search::parse("reporter:Alice@Example.com bug");
//! assert_eq!(filter.reporter_email(), Some("alice@example.com"));
//!
//! let summary = analytics::aggregate(&[]);
//! assert_eq!(summary.stats.most_common_label, "None");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod source;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::models::{Analytics, SearchFilter, Ticket};

/// Re-exports for convenience
pub mod prelude {
    pub use crate::analytics::{aggregate, Aggregator};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::models::*;
    pub use crate::search::{apply, parse};
}
