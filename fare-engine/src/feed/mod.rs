//! Fare data feed: row models, CSV readers and load sources.
//!
//! The engine is fed by two published tables: the station-pair fares CSV
//! and the lines-and-stations CSV. Fetch plumbing (HTTP, bundling, local
//! mirrors) is the caller's concern; anything that can produce the two
//! tables implements [`FareSource`] and the engine builds from that.

mod error;
mod reader;
mod rows;

pub use error::LoadError;
pub use reader::{FARES_TABLE, LINES_TABLE, read_fare_rows, read_line_rows};
pub use rows::{FareRow, LineRow};

use std::fs::File;
use std::path::PathBuf;

/// The parsed contents of one feed fetch.
#[derive(Debug, Clone)]
pub struct FeedData {
    pub fares: Vec<FareRow>,
    pub lines: Vec<LineRow>,
}

/// A source of the two feed tables.
///
/// This abstraction allows the engine to be built from files, embedded
/// text or test fixtures without caring where the bytes came from.
pub trait FareSource {
    /// Fetch and parse both tables.
    fn fetch(&self) -> Result<FeedData, LoadError>;
}

/// Loads the feed from two CSV files on disk.
#[derive(Debug, Clone)]
pub struct CsvFeed {
    fares_path: PathBuf,
    lines_path: PathBuf,
}

impl CsvFeed {
    /// A feed reading `fares` and `lines` CSV files from the given paths.
    pub fn new(fares_path: impl Into<PathBuf>, lines_path: impl Into<PathBuf>) -> Self {
        CsvFeed {
            fares_path: fares_path.into(),
            lines_path: lines_path.into(),
        }
    }
}

impl FareSource for CsvFeed {
    fn fetch(&self) -> Result<FeedData, LoadError> {
        let fares = read_fare_rows(File::open(&self.fares_path)?)?;
        let lines = read_line_rows(File::open(&self.lines_path)?)?;
        Ok(FeedData { fares, lines })
    }
}

/// Loads the feed from CSV text already in memory.
///
/// Useful for applications that ship a bundled copy of the feed, and for
/// tests.
#[derive(Debug, Clone)]
pub struct MemoryFeed {
    fares_csv: String,
    lines_csv: String,
}

impl MemoryFeed {
    pub fn new(fares_csv: impl Into<String>, lines_csv: impl Into<String>) -> Self {
        MemoryFeed {
            fares_csv: fares_csv.into(),
            lines_csv: lines_csv.into(),
        }
    }
}

impl FareSource for MemoryFeed {
    fn fetch(&self) -> Result<FeedData, LoadError> {
        let fares = read_fare_rows(self.fares_csv.as_bytes())?;
        let lines = read_line_rows(self.lines_csv.as_bytes())?;
        Ok(FeedData { fares, lines })
    }
}
