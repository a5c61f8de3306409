//! Split-route optimization.
//!
//! A journey can sometimes be ticketed more cheaply as two legs through an
//! intermediate station than as one through fare. The planner enumerates
//! every such split, keeps the ones that strictly beat the direct fare,
//! and returns a short ranked list.

use tracing::debug;

use crate::domain::{Fare, FareCategory, Station, StationId};

/// Read access to the fare data the planner needs.
///
/// The engine implements this; tests substitute a mock.
pub trait FareLookup {
    /// Every station, in table order. Split enumeration follows this
    /// order, which makes tie-breaking deterministic.
    fn stations(&self) -> &[Station];

    /// The published standard fare for an ordered pair, if any.
    fn fare(&self, origin: StationId, dest: StationId, category: FareCategory) -> Option<Fare>;

    /// The derived first-class fare for an ordered pair, if any.
    fn first_class_fare(
        &self,
        origin: StationId,
        dest: StationId,
        category: FareCategory,
    ) -> Option<Fare>;

    /// Whether the id appears in the fare data.
    fn contains(&self, id: StationId) -> bool {
        self.stations().iter().any(|station| station.id == id)
    }
}

/// Why an optimization request could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("origin and destination are the same station")]
    SameStation,
    #[error("station {0} is not in the fare table")]
    UnknownStation(StationId),
    #[error("no fare connects {start} to {dest}, directly or with one change")]
    NoRoute { start: StationId, dest: StationId },
}

/// One priced route in an optimization result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    /// The intermediate station, `None` for the direct route.
    pub via: Option<StationId>,
    /// Total standard fare; for a split, the sum of both legs.
    pub fare: Fare,
    /// Derived first-class total, summed per leg for a split.
    pub first_class_fare: Option<Fare>,
    pub is_direct: bool,
    /// Set on exactly one result per response: the cheapest candidate.
    pub is_cheapest: bool,
}

/// Responses never list more routes than this.
pub const MAX_RESULTS: usize = 5;

/// Finds cheap ways to ticket a journey.
pub struct RoutePlanner<'a, P: FareLookup> {
    fares: &'a P,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    via: Option<StationId>,
    fare: Fare,
}

impl<'a, P: FareLookup> RoutePlanner<'a, P> {
    pub fn new(fares: &'a P) -> Self {
        RoutePlanner { fares }
    }

    /// Rank ways of ticketing `start` → `dest`.
    ///
    /// The response opens with the cheapest candidate, then the direct
    /// route if it exists and did not win, then the remaining splits by
    /// ascending fare. Splits qualify only by strictly undercutting the
    /// direct fare; no `(via, fare)` pair appears twice; at most
    /// [`MAX_RESULTS`] routes come back.
    pub fn optimize(
        &self,
        start: StationId,
        dest: StationId,
        category: FareCategory,
    ) -> Result<Vec<RouteResult>, PlanError> {
        if start == dest {
            return Err(PlanError::SameStation);
        }
        if !self.fares.contains(start) {
            return Err(PlanError::UnknownStation(start));
        }
        if !self.fares.contains(dest) {
            return Err(PlanError::UnknownStation(dest));
        }

        let direct = self.fares.fare(start, dest, category);

        // Candidates in enumeration order: direct first, then one split
        // per intermediate station with both legs published.
        let mut candidates: Vec<Candidate> = Vec::new();
        if let Some(fare) = direct {
            candidates.push(Candidate { via: None, fare });
        }
        for station in self.fares.stations() {
            let k = station.id;
            if k == start || k == dest {
                continue;
            }
            let Some(first) = self.fares.fare(start, k, category) else {
                continue;
            };
            let Some(second) = self.fares.fare(k, dest, category) else {
                continue;
            };
            let Some(total) = first.checked_add(second) else {
                continue;
            };
            if direct.is_none_or(|fare| total < fare) {
                candidates.push(Candidate {
                    via: Some(k),
                    fare: total,
                });
            }
        }

        if candidates.is_empty() {
            return Err(PlanError::NoRoute { start, dest });
        }

        // Stable sort: equal fares keep enumeration order, so the winner
        // of a tie is deterministic.
        candidates.sort_by_key(|candidate| candidate.fare);

        let mut picked: Vec<Candidate> = vec![candidates[0]];
        if let Some(fare) = direct {
            let straight = Candidate { via: None, fare };
            if !picked.contains(&straight) {
                picked.push(straight);
            }
        }
        for candidate in &candidates {
            if picked.len() >= MAX_RESULTS {
                break;
            }
            if !picked.contains(candidate) {
                picked.push(*candidate);
            }
        }
        picked.truncate(MAX_RESULTS);

        let results: Vec<RouteResult> = picked
            .iter()
            .enumerate()
            .map(|(rank, candidate)| RouteResult {
                via: candidate.via,
                fare: candidate.fare,
                first_class_fare: self.first_class_total(start, dest, candidate.via, category),
                is_direct: candidate.via.is_none(),
                is_cheapest: rank == 0,
            })
            .collect();

        debug!(
            %start,
            %dest,
            category = %category,
            candidates = candidates.len(),
            results = results.len(),
            "optimization complete"
        );

        Ok(results)
    }

    fn first_class_total(
        &self,
        start: StationId,
        dest: StationId,
        via: Option<StationId>,
        category: FareCategory,
    ) -> Option<Fare> {
        match via {
            None => self.fares.first_class_fare(start, dest, category),
            Some(k) => {
                let first = self.fares.first_class_fare(start, k, category)?;
                let second = self.fares.first_class_fare(k, dest, category)?;
                first.checked_add(second)
            }
        }
    }
}

#[cfg(test)]
mod mock {
    use std::collections::HashMap;

    use super::FareLookup;
    use crate::domain::{Fare, FareCategory, Station, StationId};

    /// In-memory fare data keyed by ordered pair, ignoring category. The
    /// first-class fare is defined as double the standard fare so tests
    /// can tell the two lookups apart.
    #[derive(Debug)]
    pub(super) struct MockFares {
        stations: Vec<Station>,
        fares: HashMap<(u32, u32), u32>,
    }

    impl MockFares {
        /// Stations numbered 1..=n, named S1..Sn, no fares.
        pub(super) fn new(n: u32) -> Self {
            MockFares {
                stations: (1..=n)
                    .map(|i| Station::new(StationId::new(i), format!("S{i}")))
                    .collect(),
                fares: HashMap::new(),
            }
        }

        pub(super) fn set(&mut self, from: u32, to: u32, cents: u32) {
            self.fares.insert((from, to), cents);
        }
    }

    impl FareLookup for MockFares {
        fn stations(&self) -> &[Station] {
            &self.stations
        }

        fn fare(&self, origin: StationId, dest: StationId, _: FareCategory) -> Option<Fare> {
            self.fares
                .get(&(origin.value(), dest.value()))
                .map(|&cents| Fare::from_cents(cents))
        }

        fn first_class_fare(
            &self,
            origin: StationId,
            dest: StationId,
            category: FareCategory,
        ) -> Option<Fare> {
            let standard = self.fare(origin, dest, category)?;
            Some(standard + standard)
        }
    }
}
