use serde::Deserialize;

use crate::duration;
use crate::error::TicketStatsError;

/// top-level shape of the ticket document.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct TicketDocument {
    pub tickets: Vec<TicketRecord>,
}

/// one entry of the `tickets` list, as it appears on disk. missing text
/// fields become empty strings and a missing price becomes 0.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TicketRecord {
    pub origin: String,
    pub destination: String,
    pub carrier: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub price: u64,
}

impl TicketRecord {
    pub fn departure(&self) -> String {
        format!("{} {}", self.departure_date, self.departure_time)
    }

    pub fn arrival(&self) -> String {
        format!("{} {}", self.arrival_date, self.arrival_time)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub origin: String,
    pub destination: String,
    pub carrier: String,
    pub flight_time_minutes: i64,
    pub price: u64,
}

impl Ticket {
    /// builds a ticket from a raw record, computing the flight time from
    /// its departure and arrival fields.
    pub fn from_record(record: TicketRecord) -> Result<Ticket, TicketStatsError> {
        let flight_time_minutes = duration::flight_minutes(&record.departure(), &record.arrival())?;
        Ok(Ticket {
            origin: record.origin,
            destination: record.destination,
            carrier: record.carrier,
            flight_time_minutes,
            price: record.price,
        })
    }
}
