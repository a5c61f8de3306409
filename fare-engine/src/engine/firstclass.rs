//! First-class fare derivation.
//!
//! Only the East Rail Line runs first-class coaches, and the published
//! table prices standard class only. For a journey wholly on the line the
//! first-class premium equals the passenger's own standard fare. For a
//! journey that merely touches the line the premium approximates the East
//! Rail portion with a surcharge picked by the regions of the two ends.

use tracing::debug;

use crate::catalog::{Catalog, region_of};
use crate::domain::{Fare, FareCategory, LineCode, Region, StationId};

use super::table::FareTable;

/// The one line with first-class carriages.
pub const FIRST_CLASS_LINE: LineCode = LineCode::from_ascii(*b"EAL");

/// Flat component of the JoyYou first-class fare.
const JOYYOU_FLAT: Fare = Fare::from_cents(200);

/// Rule B surcharge: the network's minimum adult fare.
const MINIMUM_ADULT_FARE: Fare = Fare::from_cents(500);

/// East Rail's cross-harbour terminus, used as the interchange reference.
const INTERCHANGE: &str = "Hung Hom";

/// Rule C reference pair, island side and New Territories side.
const ISLAND_REFERENCE: &str = "Admiralty";
const NEW_TERRITORIES_REFERENCE: &str = "Sha Tin";

/// The first-class fare for an ordered pair, or `None` if the pair has no
/// published standard fare at all.
pub(crate) fn first_class_fare(
    table: &FareTable,
    catalog: &Catalog,
    origin: StationId,
    dest: StationId,
    category: FareCategory,
) -> Option<Fare> {
    let base = table.fare(origin, dest, category)?;
    let child = table
        .fare(origin, dest, category.child_equivalent())
        .unwrap_or(Fare::ZERO);

    let origin_name = table.station_name(origin)?;
    let dest_name = table.station_name(dest)?;

    let on_line = catalog.on_line(origin_name, FIRST_CLASS_LINE)
        && catalog.on_line(dest_name, FIRST_CLASS_LINE);
    let premium = if on_line {
        base
    } else {
        region_surcharge(table, (origin, origin_name), (dest, dest_name))
    };

    Some(adjust(category, base, premium, child))
}

/// Concessionary categories pay their own fare plus the child fare instead
/// of the full premium; JoyYou pays a flat amount plus the child fare.
fn adjust(category: FareCategory, base: Fare, premium: Fare, child: Fare) -> Fare {
    if category == FareCategory::OctopusJoyYou {
        JOYYOU_FLAT + child
    } else if category.is_concession() {
        base + child
    } else {
        base + premium
    }
}

/// The premium for a journey not wholly on the first-class line.
///
/// Rules, checked in order:
///   A. one end in the New Territories and no island end: the fare from
///      that end to the interchange (origin checked before destination);
///   B. neither end on the island: the minimum adult fare;
///   C. an island end: the fare between fixed reference stations, with the
///      far reference picked by the other end's region.
fn region_surcharge(table: &FareTable, origin: (StationId, &str), dest: (StationId, &str)) -> Fare {
    let (origin_id, origin_name) = origin;
    let (dest_id, dest_name) = dest;
    let origin_region = region_of(origin_name);
    let dest_region = region_of(dest_name);

    use Region::*;
    if origin_region == NewTerritories && dest_region != HongKongIsland {
        return reference_fare_from(table, origin_id, INTERCHANGE);
    }
    if dest_region == NewTerritories && origin_region != HongKongIsland {
        return reference_fare_from(table, dest_id, INTERCHANGE);
    }
    if origin_region != HongKongIsland && dest_region != HongKongIsland {
        return MINIMUM_ADULT_FARE;
    }

    let other = if origin_region == HongKongIsland {
        dest_region
    } else {
        origin_region
    };
    let far = match other {
        NewTerritories => NEW_TERRITORIES_REFERENCE,
        _ => INTERCHANGE,
    };
    reference_fare_between(table, ISLAND_REFERENCE, far)
}

/// Adult Octopus fare from a station to a named reference. A reference
/// missing from the table zeroes the surcharge instead of failing the
/// whole query.
fn reference_fare_from(table: &FareTable, from: StationId, reference: &str) -> Fare {
    let Some(to) = table.station_id(reference) else {
        debug!(reference, "reference station not in fare table; surcharge is zero");
        return Fare::ZERO;
    };
    match table.fare(from, to, FareCategory::OctopusAdult) {
        Some(fare) => fare,
        None => {
            debug!(%from, reference, "no fare to reference station; surcharge is zero");
            Fare::ZERO
        }
    }
}

fn reference_fare_between(table: &FareTable, near: &str, far: &str) -> Fare {
    let Some(from) = table.station_id(near) else {
        debug!(reference = near, "reference station not in fare table; surcharge is zero");
        return Fare::ZERO;
    };
    reference_fare_from(table, from, far)
}
