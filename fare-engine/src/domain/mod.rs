//! Domain types for the fare engine.
//!
//! This module contains the core domain model types that represent
//! validated fare data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod category;
mod fare;
mod line;
mod region;
mod station;

pub use category::{FareCategory, TicketType};
pub use fare::Fare;
pub use line::{Branch, BranchStructure, InvalidLineCode, Line, LineCode};
pub use region::Region;
pub use station::{Station, StationId};
