use prettytable::Table;

use crate::route::Route;
use crate::stats::{GroupStats, Grouping};

/// finalized result of one run: the route, the policy it was grouped by and
/// one entry per group. `groups` is empty when no ticket matched the route.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub route: Route,
    pub grouping: Grouping,
    pub groups: Vec<GroupStats>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn empty_message(route: &Route) -> String {
    format!("No tickets found for route {}", route)
}

/// labelled text blocks, one per group.
pub fn render_lines(report: &Report) -> String {
    let mut out = format!("=== {} ===\n", report.route);

    if report.is_empty() {
        out.push_str(&empty_message(&report.route));
        out.push('\n');
        return out;
    }

    for group in &report.groups {
        out.push_str(&render_block(group, report.grouping));
    }
    out
}

fn render_block(group: &GroupStats, grouping: Grouping) -> String {
    let stats = &group.stats;
    let mut block = String::new();
    if let Some(carrier) = &group.carrier {
        block.push_str(&format!("Carrier: {}\n", carrier));
    }
    block.push_str(&format!("Minimum flight time: {} minutes\n", stats.min_flight_time));
    block.push_str(&format!("Average price: {:.2}\n", stats.avg_price));
    if grouping == Grouping::Route {
        block.push_str(&format!("Median price: {:.2}\n", stats.median_price));
    }
    block.push_str(&format!(
        "Price difference (average - median): {:.2}\n\n",
        stats.price_difference
    ));
    block
}

pub fn render_table(report: &Report) -> String {
    if report.is_empty() {
        return format!("=== {} ===\n{}\n", report.route, empty_message(&report.route));
    }

    let mut table = Table::new();
    table.add_row(row![b->"Carrier", b->"Tickets", b->"Min flight time", b->"Average", b->"Median", b->"Difference"]);

    for group in &report.groups {
        let stats = &group.stats;
        let carrier = group.carrier.as_deref().unwrap_or("(all)");

        table.add_row(row![
            carrier,
            stats.tickets,
            format!("{}min", stats.min_flight_time),
            format!("{:.2}", stats.avg_price),
            format!("{:.2}", stats.median_price),
            format!("{:.2}", stats.price_difference)]);
    }

    format!("=== {} ===\n{}", report.route, table)
}
