//! Feed loading errors.

/// Error returned when the fare data cannot be loaded.
///
/// Load failures are fatal for the affected load attempt: nothing here is
/// retried automatically, the caller decides whether to try again.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data source could not be opened or read.
    #[error("fare data source unreachable: {0}")]
    Io(#[from] std::io::Error),

    /// The source was readable but not structurally parsable as CSV.
    #[error("malformed fare data: {0}")]
    Csv(#[from] csv::Error),

    /// A column the engine depends on is absent from the header row.
    #[error("{table} table is missing required column {column:?}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}
