//! Static region membership.
//!
//! The first-class surcharge rules need to know which side of the harbour
//! a station is on. The feed does not carry this, so membership is a
//! static table of English station names. Hong Kong Island and Kowloon are
//! listed explicitly; everything else, including any station the lists
//! have never heard of, counts as New Territories, which keeps
//! classification total.

use crate::domain::Region;

/// Stations on Hong Kong Island (Island Line, South Island Line and the
/// cross-harbour East Rail stations).
const HONG_KONG_ISLAND: &[&str] = &[
    "Kennedy Town",
    "HKU",
    "Sai Ying Pun",
    "Sheung Wan",
    "Central",
    "Hong Kong",
    "Admiralty",
    "Exhibition Centre",
    "Wan Chai",
    "Causeway Bay",
    "Tin Hau",
    "Fortress Hill",
    "North Point",
    "Quarry Bay",
    "Tai Koo",
    "Sai Wan Ho",
    "Shau Kei Wan",
    "Heng Fa Chuen",
    "Chai Wan",
    "Ocean Park",
    "Wong Chuk Hang",
    "Lei Tung",
    "South Horizons",
];

/// Stations in Kowloon.
const KOWLOON: &[&str] = &[
    "Whampoa",
    "Ho Man Tin",
    "Hung Hom",
    "East Tsim Sha Tsui",
    "Tsim Sha Tsui",
    "Jordan",
    "Austin",
    "Yau Ma Tei",
    "Mong Kok",
    "Mong Kok East",
    "Prince Edward",
    "Sham Shui Po",
    "Shek Kip Mei",
    "Cheung Sha Wan",
    "Lai Chi Kok",
    "Mei Foo",
    "Nam Cheong",
    "Olympic",
    "Kowloon",
    "Kowloon Tong",
    "Lok Fu",
    "Wong Tai Sin",
    "Diamond Hill",
    "Choi Hung",
    "Kowloon Bay",
    "Ngau Tau Kok",
    "Kwun Tong",
    "Lam Tin",
    "Yau Tong",
    "To Kwa Wan",
    "Sung Wong Toi",
    "Kai Tak",
];

/// Classify a station by its English display name.
///
/// Stations not in the explicit lists are New Territories.
pub fn region_of(station: &str) -> Region {
    if HONG_KONG_ISLAND.contains(&station) {
        Region::HongKongIsland
    } else if KOWLOON.contains(&station) {
        Region::Kowloon
    } else {
        Region::NewTerritories
    }
}
