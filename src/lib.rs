//! Route price and flight-time statistics over a document of flight tickets.
//!
//! The run is one pass: load the records, keep those on the requested route,
//! compute each ticket's flight time, group and summarize, then render.
#[macro_use]
extern crate prettytable;

pub mod duration;
pub mod error;
pub mod loader;
pub mod report;
pub mod route;
pub mod stats;
pub mod ticket;

use log::{debug, warn};

use error::TicketStatsError;
use report::Report;
use route::Route;
use stats::Grouping;
use ticket::{Ticket, TicketRecord};

/// filters `records` to `route`, computes flight times and groups the result.
/// a date/time that fails to parse aborts the whole report.
pub fn build_report(
    records: Vec<TicketRecord>,
    route: &Route,
    grouping: Grouping,
) -> Result<Report, TicketStatsError> {
    let tickets = route
        .filter(records)
        .into_iter()
        .map(Ticket::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("{} tickets on route {}", tickets.len(), route);

    if tickets.is_empty() {
        warn!("no tickets matched route {}", route);
    }

    Ok(Report {
        route: route.clone(),
        grouping,
        groups: grouping.summarize(&tickets),
    })
}
