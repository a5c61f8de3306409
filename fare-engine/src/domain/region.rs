//! Geographic fare regions.

use std::fmt;

/// The three fare regions of the network.
///
/// Region membership drives the first-class surcharge rules for journeys
/// that leave the East Rail Line; see the engine's first-class module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    HongKongIsland,
    Kowloon,
    NewTerritories,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::HongKongIsland => "Hong Kong Island",
            Region::Kowloon => "Kowloon",
            Region::NewTerritories => "New Territories",
        };
        f.write_str(name)
    }
}
