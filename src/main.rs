extern crate clap;

use std::path::Path;
use std::process;

use clap::{App, Arg};
use log::{error, info};

use ticket_stats::error::TicketStatsError;
use ticket_stats::route::{Route, DEFAULT_DESTINATION, DEFAULT_ORIGIN};
use ticket_stats::stats::Grouping;
use ticket_stats::{build_report, loader, report};

struct Options {
    route: Route,
    input: Option<String>,
    grouping: Grouping,
    table: bool,
}

fn get_args() -> Options {
    let matches = App::new("ticket-stats")
        .version("0.1.0")
        .about("Flight time and price statistics for a single route")
        .arg(Arg::with_name("from")
            .short("f")
            .long("from")
            .takes_value(true)
            .default_value(DEFAULT_ORIGIN)
            .help("Origin code"))
        .arg(Arg::with_name("to")
            .short("t")
            .long("to")
            .takes_value(true)
            .default_value(DEFAULT_DESTINATION)
            .help("Destination code"))
        .arg(Arg::with_name("input")
            .short("i")
            .long("input")
            .takes_value(true)
            .help("Ticket document to read instead of the bundled one"))
        .arg(Arg::with_name("group-by")
            .short("g")
            .long("group-by")
            .takes_value(true)
            .possible_values(&Grouping::VARIANTS)
            .default_value("carrier")
            .help("Report per carrier or for the whole route"))
        .arg(Arg::with_name("table")
            .long("table")
            .help("Print the report as a table"))
        .get_matches();

    let from = matches.value_of("from").unwrap_or(DEFAULT_ORIGIN);
    let to = matches.value_of("to").unwrap_or(DEFAULT_DESTINATION);
    let grouping = matches
        .value_of("group-by")
        .and_then(|g| g.parse::<Grouping>().ok())
        .unwrap_or_default();

    Options {
        route: Route::new(from, to),
        input: matches.value_of("input").map(String::from),
        grouping,
        table: matches.is_present("table"),
    }
}

fn run(options: &Options) -> Result<(), TicketStatsError> {
    info!("reporting route {} grouped by {}", options.route, options.grouping);

    let records = match &options.input {
        Some(path) => loader::load_from_path(Path::new(path))?,
        None => loader::load_bundled()?,
    };

    let report = build_report(records, &options.route, options.grouping)?;

    if options.table {
        print!("{}", report::render_table(&report));
    } else {
        print!("{}", report::render_lines(&report));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let options = get_args();

    if let Err(e) = run(&options) {
        error!("{:?}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
