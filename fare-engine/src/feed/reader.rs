//! CSV readers for the feed tables.
//!
//! Both readers validate the header row up front, then deserialize
//! leniently: a malformed data row is logged and skipped rather than
//! aborting the load, matching how the published feed is actually
//! consumed (odd rows do appear in it from time to time).

use serde::de::DeserializeOwned;
use std::io;
use tracing::warn;

use super::error::LoadError;
use super::rows::{FareRow, LineRow};
use crate::domain::FareCategory;

/// Table name used in errors and log events for the fares CSV.
pub const FARES_TABLE: &str = "fares";
/// Table name used in errors and log events for the lines CSV.
pub const LINES_TABLE: &str = "lines-and-stations";

/// Key columns of the fares table. The nine fare columns are required as
/// well; those come from [`FareCategory::ALL`].
const FARE_KEY_COLUMNS: [&str; 4] = [
    "SRC_STATION_ID",
    "SRC_STATION_NAME",
    "DEST_STATION_ID",
    "DEST_STATION_NAME",
];

const LINE_COLUMNS: [&str; 4] = ["Line Code", "Direction", "English Name", "Sequence"];

/// Read the fares table from CSV text.
pub fn read_fare_rows<R: io::Read>(reader: R) -> Result<Vec<FareRow>, LoadError> {
    let mut required: Vec<&'static str> = FARE_KEY_COLUMNS.to_vec();
    required.extend(FareCategory::ALL.iter().map(|c| c.column()));
    read_rows(FARES_TABLE, reader, &required)
}

/// Read the lines-and-stations table from CSV text.
pub fn read_line_rows<R: io::Read>(reader: R) -> Result<Vec<LineRow>, LoadError> {
    read_rows(LINES_TABLE, reader, &LINE_COLUMNS)
}

fn read_rows<T, R>(table: &'static str, reader: R, required: &[&'static str]) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: io::Read,
{
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?;
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { table, column });
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        match record {
            Ok(row) => rows.push(row),
            Err(err) => warn!(table, error = %err, "skipping malformed row"),
        }
    }
    Ok(rows)
}
