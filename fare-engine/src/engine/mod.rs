//! The fare engine.
//!
//! [`FareEngine`] is built once from a feed snapshot and then answers
//! every query without further I/O. [`SharedEngine`] wraps it for
//! concurrent callers that want the load to happen lazily, exactly once.

mod firstclass;
mod table;

pub use firstclass::FIRST_CLASS_LINE;
pub use table::{FareSet, FareTable};

use tokio::sync::OnceCell;

use crate::catalog::Catalog;
use crate::domain::{Fare, FareCategory, Station, StationId};
use crate::feed::{FareSource, FeedData, LoadError};
use crate::planner::FareLookup;

/// Immutable fare and line data, indexed for lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FareEngine {
    table: FareTable,
    catalog: Catalog,
}

impl FareEngine {
    /// Index a feed snapshot.
    pub fn from_feed(data: &FeedData) -> Self {
        FareEngine {
            table: FareTable::from_rows(&data.fares),
            catalog: Catalog::from_rows(&data.lines),
        }
    }

    /// Fetch from a source and index the result.
    pub fn from_source<S: FareSource>(source: &S) -> Result<Self, LoadError> {
        Ok(Self::from_feed(&source.fetch()?))
    }

    /// Every station, in feed order.
    pub fn stations(&self) -> &[Station] {
        self.table.stations()
    }

    /// The id for an exact station name. Names used as an origin anywhere
    /// in the feed win over destination-only sightings.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.table.station_id(name)
    }

    /// The display name recorded for an id.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.table.station_name(id)
    }

    /// Whether the id appears anywhere in the fare table.
    pub fn contains(&self, id: StationId) -> bool {
        self.table.contains(id)
    }

    /// The published standard fare, or `None` for an unpublished pair.
    pub fn fare(&self, origin: StationId, dest: StationId, category: FareCategory) -> Option<Fare> {
        self.table.fare(origin, dest, category)
    }

    /// The derived first-class fare, or `None` for an unpublished pair.
    pub fn first_class_fare(
        &self,
        origin: StationId,
        dest: StationId,
        category: FareCategory,
    ) -> Option<Fare> {
        firstclass::first_class_fare(&self.table, &self.catalog, origin, dest, category)
    }

    /// Name-keyed variant of [`Self::first_class_fare`].
    pub fn first_class_fare_by_name(
        &self,
        origin: &str,
        dest: &str,
        category: FareCategory,
    ) -> Option<Fare> {
        let origin = self.station_id(origin)?;
        let dest = self.station_id(dest)?;
        self.first_class_fare(origin, dest, category)
    }

    /// The line catalog built alongside the fare table.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl FareLookup for FareEngine {
    fn stations(&self) -> &[Station] {
        self.table.stations()
    }

    fn fare(&self, origin: StationId, dest: StationId, category: FareCategory) -> Option<Fare> {
        self.table.fare(origin, dest, category)
    }

    fn first_class_fare(
        &self,
        origin: StationId,
        dest: StationId,
        category: FareCategory,
    ) -> Option<Fare> {
        FareEngine::first_class_fare(self, origin, dest, category)
    }

    fn contains(&self, id: StationId) -> bool {
        self.table.contains(id)
    }
}

/// Shares one lazily-built engine between tasks.
///
/// The first call to [`get`](Self::get) fetches and indexes the feed;
/// concurrent callers await that same build. A failed load is not cached,
/// so a later call retries the source.
pub struct SharedEngine<S> {
    source: S,
    cell: OnceCell<FareEngine>,
}

impl<S: FareSource> SharedEngine<S> {
    pub fn new(source: S) -> Self {
        SharedEngine {
            source,
            cell: OnceCell::new(),
        }
    }

    /// The engine, loading it on first use.
    pub async fn get(&self) -> Result<&FareEngine, LoadError> {
        self.cell
            .get_or_try_init(|| async { FareEngine::from_source(&self.source) })
            .await
    }

    /// The engine, if a load has already succeeded.
    pub fn ready(&self) -> Option<&FareEngine> {
        self.cell.get()
    }
}
