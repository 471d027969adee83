use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::ticket::Ticket;

/// descriptive statistics over a non-empty group of tickets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightStats {
    pub tickets: usize,
    pub min_flight_time: i64,
    pub avg_price: f64,
    pub median_price: f64,
    pub price_difference: f64,
}

impl FlightStats {
    /// computes the statistics for a group, or `None` when the group is empty.
    pub fn from_tickets(tickets: &[&Ticket]) -> Option<FlightStats> {
        let min_flight_time = tickets.iter().map(|t| t.flight_time_minutes).min()?;

        let mut prices: Vec<u64> = tickets.iter().map(|t| t.price).collect();
        prices.sort_unstable();

        let avg_price = prices.iter().sum::<u64>() as f64 / prices.len() as f64;
        let median_price = median(&prices)?;

        Some(FlightStats {
            tickets: prices.len(),
            min_flight_time,
            avg_price,
            median_price,
            price_difference: avg_price - median_price,
        })
    }
}

/// median of an ascending slice. an even count averages the two central values.
pub fn median(sorted: &[u64]) -> Option<f64> {
    let size = sorted.len();
    if size == 0 {
        None
    } else if size % 2 == 0 {
        Some((sorted[size / 2 - 1] as f64 + sorted[size / 2] as f64) / 2.0)
    } else {
        Some(sorted[size / 2] as f64)
    }
}

/// folds tickets into groups by `key` and finalizes each group's statistics.
/// every group in the result holds at least one ticket.
pub fn aggregate<'a, K, F>(tickets: &'a [Ticket], key: F) -> BTreeMap<K, FlightStats>
where
    K: Ord,
    F: Fn(&'a Ticket) -> K,
{
    let groups = tickets
        .iter()
        .fold(BTreeMap::<K, Vec<&Ticket>>::new(), |mut groups, ticket| {
            groups.entry(key(ticket)).or_default().push(ticket);
            groups
        });

    groups
        .into_iter()
        .filter_map(|(k, group)| FlightStats::from_tickets(&group).map(|stats| (k, stats)))
        .collect()
}

/// which aggregation policy to report with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// one block per carrier
    Carrier,
    /// one block for the whole route
    Route,
}

impl Grouping {
    pub const VARIANTS: [&'static str; 2] = ["carrier", "route"];

    pub fn summarize(&self, tickets: &[Ticket]) -> Vec<GroupStats> {
        match self {
            Grouping::Carrier => aggregate(tickets, |t| t.carrier.as_str())
                .into_iter()
                .map(|(carrier, stats)| GroupStats {
                    carrier: Some(String::from(carrier)),
                    stats,
                })
                .collect(),
            Grouping::Route => aggregate(tickets, |_| ())
                .into_iter()
                .map(|(_, stats)| GroupStats {
                    carrier: None,
                    stats,
                })
                .collect(),
        }
    }
}

impl Default for Grouping {
    fn default() -> Self {
        Grouping::Carrier
    }
}

impl FromStr for Grouping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "carrier" => Ok(Grouping::Carrier),
            "route" => Ok(Grouping::Route),
            other => Err(format!(
                "unknown grouping '{}', expected one of: {}",
                other,
                Grouping::VARIANTS.join(", ")
            )),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grouping::Carrier => write!(f, "carrier"),
            Grouping::Route => write!(f, "route"),
        }
    }
}

/// statistics for one reported group. `carrier` is `None` for the whole route.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub carrier: Option<String>,
    pub stats: FlightStats,
}
