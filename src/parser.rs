use csv::Reader;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An assistant's availability answer for one planning date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
    Reserve,
    Unknown,
}

impl AvailabilityStatus {
    /// Maps a raw CSV cell to a status. Unrecognized tokens become Unknown
    /// rather than being passed through.
    pub fn parse(token: &str) -> AvailabilityStatus {
        match token.trim() {
            "Yes" => AvailabilityStatus::Available,
            "No" => AvailabilityStatus::Unavailable,
            "Under reserve" => AvailabilityStatus::Reserve,
            _ => AvailabilityStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub date: NaiveDate,
    pub status: AvailabilityStatus,
}

/// One roster row. The name is the identity key; there is no separate id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assistant {
    pub name: String,
    pub availability: Vec<Availability>,
}

impl Assistant {
    /// Status on a given date, Unknown if the date is not in this
    /// assistant's availability row.
    pub fn status_on(&self, date: NaiveDate) -> AvailabilityStatus {
        self.availability
            .iter()
            .find(|a| a.date == date)
            .map(|a| a.status)
            .unwrap_or(AvailabilityStatus::Unknown)
    }
}

/// Loads the roster from a CSV file
pub fn load_roster<P: AsRef<Path>>(csv_path: P) -> Result<Vec<Assistant>, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(csv_path)?;
    read_roster(file)
}

/// Reads the roster from any CSV source
///
/// Expected layout: the header row holds the name-column label followed by
/// one ISO date (YYYY-MM-DD) per planning day. The last header column carries
/// no defined meaning and is dropped. Each following row is one assistant:
/// name, then one status cell per date. Rows with an empty name are skipped.
pub fn read_roster<R: Read>(source: R) -> Result<Vec<Assistant>, Box<dyn std::error::Error>> {
    let mut reader = Reader::from_reader(source);

    let headers = reader.headers()?;
    if headers.len() < 2 {
        return Ok(Vec::new());
    }

    // Columns 1..len-1 are the planning dates; the final column is ignored.
    let mut dates = Vec::new();
    for header in headers.iter().skip(1).take(headers.len().saturating_sub(2)) {
        dates.push(NaiveDate::parse_from_str(header.trim(), "%Y-%m-%d")?);
    }

    let mut assistants = Vec::new();
    for result in reader.records() {
        let record = result?;

        let name = record.get(0).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let availability = dates
            .iter()
            .enumerate()
            .map(|(i, &date)| Availability {
                date,
                status: AvailabilityStatus::parse(record.get(i + 1).unwrap_or("")),
            })
            .collect();

        assistants.push(Assistant { name, availability });
    }

    Ok(assistants)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "\
Name,2024-01-01,2024-01-02,2024-01-03,Notes
Anna,Yes,No,Under reserve,prefers mornings
Ben (3-4/1-2),Yes,Yes,maybe,
";

    #[test]
    fn parses_names_and_dates() {
        let roster = read_roster(ROSTER.as_bytes()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Anna");
        assert_eq!(roster[1].name, "Ben (3-4/1-2)");
        assert_eq!(roster[0].availability.len(), 3);
        assert_eq!(
            roster[0].availability[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn maps_status_tokens() {
        let roster = read_roster(ROSTER.as_bytes()).unwrap();
        let anna = &roster[0];
        assert_eq!(anna.availability[0].status, AvailabilityStatus::Available);
        assert_eq!(anna.availability[1].status, AvailabilityStatus::Unavailable);
        assert_eq!(anna.availability[2].status, AvailabilityStatus::Reserve);
        // Unrecognized token falls back to Unknown
        assert_eq!(roster[1].availability[2].status, AvailabilityStatus::Unknown);
    }

    #[test]
    fn last_column_is_dropped() {
        let roster = read_roster(ROSTER.as_bytes()).unwrap();
        // "Notes" is not part of the date axis
        assert_eq!(roster[0].availability.len(), 3);
    }

    #[test]
    fn skips_rows_without_a_name() {
        let csv = "Name,2024-01-01,Notes\n,Yes,\nAnna,Yes,\n";
        let roster = read_roster(csv.as_bytes()).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Anna");
    }

    #[test]
    fn status_on_missing_date_is_unknown() {
        let roster = read_roster(ROSTER.as_bytes()).unwrap();
        let off_axis = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(roster[0].status_on(off_axis), AvailabilityStatus::Unknown);
    }

    #[test]
    fn empty_input_yields_empty_roster() {
        let roster = read_roster("".as_bytes()).unwrap();
        assert!(roster.is_empty());
    }
}
