use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::TicketStatsError;
use crate::ticket::{TicketDocument, TicketRecord};

const BUNDLED_TICKETS: &[u8] = include_bytes!("../resources/tickets.json");

pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<TicketRecord>, TicketStatsError> {
    let document: TicketDocument = serde_json::from_reader(reader)?;
    debug!("loaded {} ticket records", document.tickets.len());
    Ok(document.tickets)
}

/// reads the document at `path`. the file handle is dropped before returning,
/// whether or not parsing succeeded.
pub fn load_from_path(path: &Path) -> Result<Vec<TicketRecord>, TicketStatsError> {
    let file = File::open(path).map_err(|source| TicketStatsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(BufReader::new(file))
}

/// the ticket document compiled into the binary.
pub fn load_bundled() -> Result<Vec<TicketRecord>, TicketStatsError> {
    load_from_reader(BUNDLED_TICKETS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let json = r#"{"tickets": [{
            "origin": "VVO", "destination": "TLV", "carrier": "TK",
            "departure_date": "12.05.18", "departure_time": "16:20",
            "arrival_date": "12.05.18", "arrival_time": "22:10",
            "stops": 3, "price": 12400
        }]}"#;
        let records = load_from_reader(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].carrier, "TK");
        assert_eq!(records[0].departure(), "12.05.18 16:20");
        assert_eq!(records[0].price, 12400);
    }

    #[test]
    fn test_missing_fields_default() {
        let records = load_from_reader(r#"{"tickets": [{"origin": "VVO"}]}"#.as_bytes()).unwrap();
        assert_eq!(records[0].destination, "");
        assert_eq!(records[0].carrier, "");
        assert_eq!(records[0].price, 0);
    }

    #[test]
    fn test_missing_tickets_key() {
        let records = load_from_reader(r#"{"flights": []}"#.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = load_from_reader("{\"tickets\": [".as_bytes()).unwrap_err();
        assert!(err.is_data_source());
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_path(Path::new("does/not/exist/tickets.json")).unwrap_err();
        assert!(matches!(err, TicketStatsError::Io { .. }));
        assert!(err.is_data_source());
    }

    #[test]
    fn test_bundled() {
        let records = load_bundled().unwrap();
        assert!(records.iter().any(|r| r.origin == "VVO" && r.destination == "TLV"));
        assert!(records.iter().any(|r| r.origin != "VVO"));
    }
}
