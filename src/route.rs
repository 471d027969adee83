use std::fmt;

use crate::ticket::TicketRecord;

pub const DEFAULT_ORIGIN: &str = "VVO";
pub const DEFAULT_DESTINATION: &str = "TLV";

/// ordered origin/destination pair. codes are compared exactly, without
/// case folding or trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: &str, destination: &str) -> Route {
        Route {
            origin: String::from(origin),
            destination: String::from(destination),
        }
    }

    pub fn matches(&self, record: &TicketRecord) -> bool {
        record.origin == self.origin && record.destination == self.destination
    }

    pub fn filter(&self, records: Vec<TicketRecord>) -> Vec<TicketRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new(DEFAULT_ORIGIN, DEFAULT_DESTINATION)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
