//! Ticket loading for the command-line tools

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::Ticket;

/// Read a JSON array of tickets from `path`, or from stdin when `path` is `-`
pub fn load_tickets(path: &Path) -> Result<Vec<Ticket>> {
    let tickets = if path == Path::new("-") {
        read_tickets(io::stdin().lock())?
    } else {
        read_tickets(BufReader::new(File::open(path)?))?
    };

    debug!(count = tickets.len(), path = %path.display(), "Loaded tickets");
    Ok(tickets)
}

/// Read a JSON array of tickets from any reader
pub fn read_tickets<R: Read>(reader: R) -> Result<Vec<Ticket>> {
    Ok(serde_json::from_reader(reader)?)
}
