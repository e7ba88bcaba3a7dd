//! Search-box mini-language
//!
//! A query is either plain free text, or one `qualifier:token` directive
//! followed by free text:
//!
//! - `before:dd/MM/yyyy` - created before the start of that day (UTC)
//! - `after:dd/MM/yyyy` - created after the end of that day (UTC)
//! - `reporter:email` - filed by that reporter, case-insensitive

mod matcher;
mod parser;

pub use matcher::apply;
pub use parser::parse;
