//! The indexed fare table.
//!
//! [`FareTable::from_rows`] turns the raw fares feed into an immutable
//! structure answering every lookup the rest of the crate needs: fare by
//! ordered station pair, station name by id, and station id by name.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info};

use crate::domain::{Fare, FareCategory, Station, StationId};
use crate::feed::FareRow;

/// The nine published fares for one ordered station pair, stored in
/// [`FareCategory::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FareSet([Fare; 9]);

impl FareSet {
    /// Price every category cell of a feed row. Cells that do not parse as
    /// an amount (blank, stray text) price as zero.
    fn from_row(row: &FareRow) -> Self {
        let mut fares = [Fare::ZERO; 9];
        for category in FareCategory::ALL {
            fares[category.index()] = Fare::parse(row.cell(category)).unwrap_or(Fare::ZERO);
        }
        FareSet(fares)
    }

    /// The fare for one category.
    pub fn get(&self, category: FareCategory) -> Fare {
        self.0[category.index()]
    }
}

/// Immutable fare lookup built once from the feed.
///
/// A pair absent from the index has no published fare, which is not the
/// same thing as a published fare of zero; lookups return `Option` so
/// callers can tell the two apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FareTable {
    index: HashMap<(StationId, StationId), FareSet>,
    stations: Vec<Station>,
    by_id: HashMap<StationId, usize>,
    by_name: HashMap<String, StationId>,
}

impl FareTable {
    /// Build the table from fare rows.
    ///
    /// Station ids keep the name from their first appearance in the feed.
    /// Name lookup prefers ids seen in the origin column: a name only
    /// resolves through a destination cell if it never appears as an
    /// origin. Later rows for an already-indexed pair are ignored.
    pub fn from_rows(rows: &[FareRow]) -> Self {
        let mut index = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        let mut by_id: HashMap<StationId, usize> = HashMap::new();

        for row in rows {
            let src = StationId::new(row.src_station_id);
            let dest = StationId::new(row.dest_station_id);

            if !by_id.contains_key(&src) {
                by_id.insert(src, stations.len());
                stations.push(Station::new(src, row.src_station_name.as_str()));
            }
            if !by_id.contains_key(&dest) {
                by_id.insert(dest, stations.len());
                stations.push(Station::new(dest, row.dest_station_name.as_str()));
            }

            match index.entry((src, dest)) {
                Entry::Vacant(slot) => {
                    slot.insert(FareSet::from_row(row));
                }
                Entry::Occupied(_) => {
                    debug!(origin = %src, dest = %dest, "duplicate fare row ignored");
                }
            }
        }

        let mut by_name: HashMap<String, StationId> = HashMap::new();
        for row in rows {
            if !by_name.contains_key(row.src_station_name.as_str()) {
                by_name.insert(
                    row.src_station_name.clone(),
                    StationId::new(row.src_station_id),
                );
            }
        }
        for row in rows {
            if !by_name.contains_key(row.dest_station_name.as_str()) {
                by_name.insert(
                    row.dest_station_name.clone(),
                    StationId::new(row.dest_station_id),
                );
            }
        }

        info!(
            stations = stations.len(),
            pairs = index.len(),
            "fare table built"
        );

        FareTable {
            index,
            stations,
            by_id,
            by_name,
        }
    }

    /// The published fare for an ordered pair and category, or `None` if
    /// the feed has no row for the pair.
    pub fn fare(&self, origin: StationId, dest: StationId, category: FareCategory) -> Option<Fare> {
        self.fares(origin, dest).map(|set| set.get(category))
    }

    /// All nine fares for an ordered pair.
    pub fn fares(&self, origin: StationId, dest: StationId) -> Option<&FareSet> {
        self.index.get(&(origin, dest))
    }

    /// Every station, in feed order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Whether the id appears anywhere in the table.
    pub fn contains(&self, id: StationId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// The display name recorded for an id.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.by_id.get(&id).map(|&i| self.stations[i].name.as_str())
    }

    /// The id for an exact station name.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Number of ordered pairs with a published fare.
    pub fn pair_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::read_fare_rows;

    const HEADER: &str = "SRC_STATION_ID,SRC_STATION_NAME,DEST_STATION_ID,DEST_STATION_NAME,\
                          OCT_ADT_FARE,OCT_STD_FARE,OCT_JOYYOU_SIXTY_FARE,SINGLE_ADT_FARE,\
                          OCT_CON_CHILD_FARE,OCT_CON_ELDERLY_FARE,OCT_CON_PWD_FARE,\
                          SINGLE_CON_CHILD_FARE,SINGLE_CON_ELDERLY_FARE";

    fn table(body: &str) -> FareTable {
        let csv = format!("{HEADER}\n{body}");
        let rows = read_fare_rows(csv.as_bytes()).unwrap();
        FareTable::from_rows(&rows)
    }

    fn id(n: u32) -> StationId {
        StationId::new(n)
    }

    #[test]
    fn looks_up_fares_by_pair_and_category() {
        let table = table(
            "1,Central,2,Admiralty,4.9,3.7,2,5.5,2.3,2,2.3,2.5,5.5\n\
             2,Admiralty,1,Central,5.1,3.8,2,5.5,2.4,2,2.4,2.5,5.5",
        );

        assert_eq!(
            table.fare(id(1), id(2), FareCategory::OctopusAdult),
            Some(Fare::from_cents(490))
        );
        assert_eq!(
            table.fare(id(1), id(2), FareCategory::SingleAdult),
            Some(Fare::from_cents(550))
        );
        assert_eq!(
            table.fare(id(2), id(1), FareCategory::OctopusAdult),
            Some(Fare::from_cents(510))
        );
        assert_eq!(
            table.fare(id(1), id(2), FareCategory::OctopusChild),
            Some(Fare::from_cents(230))
        );
    }

    #[test]
    fn absent_pair_is_none_not_zero() {
        let table = table("1,Central,2,Admiralty,4.9,3.7,2,5.5,2.3,2,2.3,2.5,5.5");

        assert_eq!(table.fare(id(2), id(1), FareCategory::OctopusAdult), None);
        assert_eq!(table.fare(id(1), id(9), FareCategory::OctopusAdult), None);
    }

    #[test]
    fn unparseable_cells_price_as_zero() {
        let table = table("1,Central,2,Admiralty,4.9,,n/a,5.5,--,2,2.3,2.5,5.5");

        assert_eq!(
            table.fare(id(1), id(2), FareCategory::OctopusStudent),
            Some(Fare::ZERO)
        );
        assert_eq!(
            table.fare(id(1), id(2), FareCategory::OctopusJoyYou),
            Some(Fare::ZERO)
        );
        assert_eq!(
            table.fare(id(1), id(2), FareCategory::OctopusChild),
            Some(Fare::ZERO)
        );
        // Parseable neighbours are untouched.
        assert_eq!(
            table.fare(id(1), id(2), FareCategory::OctopusAdult),
            Some(Fare::from_cents(490))
        );
    }

    #[test]
    fn station_names_keep_their_first_spelling() {
        let table = table(
            "1,Central,2,Admiralty,4.9,3.7,2,5.5,2.3,2,2.3,2.5,5.5\n\
             1,CENTRAL STATION,3,Tsim Sha Tsui,9,4.5,2,10,4.5,2,4.5,5,10",
        );

        assert_eq!(table.station_name(id(1)), Some("Central"));
        assert_eq!(table.station_name(id(2)), Some("Admiralty"));
        assert_eq!(table.station_name(id(7)), None);
    }

    #[test]
    fn name_lookup_prefers_origin_column() {
        // "Admiralty" appears first as a destination (id 2) and later as an
        // origin (id 20); the origin sighting wins.
        let table = table(
            "1,Central,2,Admiralty,4.9,3.7,2,5.5,2.3,2,2.3,2.5,5.5\n\
             20,Admiralty,1,Central,5.1,3.8,2,5.5,2.4,2,2.4,2.5,5.5",
        );

        assert_eq!(table.station_id("Admiralty"), Some(id(20)));
        assert_eq!(table.station_id("Central"), Some(id(1)));
        assert_eq!(table.station_id("Nowhere"), None);
    }

    #[test]
    fn destination_only_names_still_resolve() {
        let table = table("1,Central,2,Admiralty,4.9,3.7,2,5.5,2.3,2,2.3,2.5,5.5");

        assert_eq!(table.station_id("Admiralty"), Some(id(2)));
    }

    #[test]
    fn duplicate_pairs_keep_the_first_row() {
        let table = table(
            "1,Central,2,Admiralty,4.9,3.7,2,5.5,2.3,2,2.3,2.5,5.5\n\
             1,Central,2,Admiralty,99,99,99,99,99,99,99,99,99",
        );

        assert_eq!(
            table.fare(id(1), id(2), FareCategory::OctopusAdult),
            Some(Fare::from_cents(490))
        );
        assert_eq!(table.pair_count(), 1);
    }

    #[test]
    fn stations_list_in_feed_order() {
        let table = table(
            "3,Mong Kok,1,Central,12,6,2,13,6,2,6,6.5,13\n\
             1,Central,2,Admiralty,4.9,3.7,2,5.5,2.3,2,2.3,2.5,5.5",
        );

        let names: Vec<&str> = table.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Mong Kok", "Central", "Admiralty"]);
        assert!(table.contains(id(3)));
        assert!(!table.contains(id(4)));
    }

    #[test]
    fn build_is_deterministic() {
        let body = "1,Central,2,Admiralty,4.9,3.7,2,5.5,2.3,2,2.3,2.5,5.5\n\
                    2,Admiralty,3,Mong Kok,6,4,2,7,3,2,3,3.5,7";

        assert_eq!(table(body), table(body));
    }

    #[test]
    fn fare_set_maps_categories_to_columns() {
        let table = table("1,A,2,B,1,2,3,4,5,6,7,8,9");
        let set = table.fares(id(1), id(2)).unwrap();

        for (i, category) in FareCategory::ALL.into_iter().enumerate() {
            assert_eq!(set.get(category), Fare::from_cents((i as u32 + 1) * 100));
        }
    }
}
