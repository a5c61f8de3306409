//! Route planning over the fare table.
//!
//! This module answers: "what is the cheapest way to ticket this
//! journey?" A journey is priced straight through, or split into two
//! legs at an intermediate station when that costs strictly less.

mod optimize;

pub use optimize::{FareLookup, MAX_RESULTS, PlanError, RoutePlanner, RouteResult};
