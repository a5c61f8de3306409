//! Station identity types.

use std::fmt;

/// The numeric station identifier used by the MTR open-data feed.
///
/// Ids are opaque: they carry no ordering or line information, they are
/// simply the join key between the fare table and anything that refers to
/// a station. Display names live alongside ids in [`Station`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u32);

impl StationId {
    /// Wrap a raw feed identifier.
    pub const fn new(id: u32) -> Self {
        StationId(id)
    }

    /// Returns the raw numeric identifier.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station as the engine knows it: a stable id and the display name the
/// feed first used for that id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Station {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrip() {
        let id = StationId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn id_display() {
        assert_eq!(StationId::new(7).to_string(), "7");
        assert_eq!(format!("{:?}", StationId::new(7)), "StationId(7)");
    }

    #[test]
    fn id_equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId::new(1));
        assert!(set.contains(&StationId::new(1)));
        assert!(!set.contains(&StationId::new(2)));
    }

    #[test]
    fn station_display() {
        let station = Station::new(StationId::new(2), "Admiralty");
        assert_eq!(station.to_string(), "Admiralty (2)");
    }
}
