//! Network-wide split-saving scan.
//!
//! Walks every ordered station pair with a published direct fare and
//! reports the ones where changing tickets at an intermediate station is
//! cheaper. The scan is exposed as a lazy iterator so callers can stop,
//! sample, or stream results without paying for the whole cubic pass.

use tracing::debug;

use crate::domain::{Fare, FareCategory, Station, StationId};
use crate::planner::FareLookup;

/// Savings at or below this threshold are noise and are not reported.
const MIN_SAVING: Fare = Fare::from_cents(1);

/// One pair where a split undercuts the direct fare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingInfo {
    pub start: StationId,
    pub dest: StationId,
    /// The cheapest intermediate; the first one in station order on ties.
    pub via: StationId,
    pub direct_fare: Fare,
    pub split_fare: Fare,
    pub saving: Fare,
}

/// Scans the whole network for split savings.
pub struct SavingsScanner<'a, P: FareLookup> {
    fares: &'a P,
}

impl<'a, P: FareLookup> SavingsScanner<'a, P> {
    pub fn new(fares: &'a P) -> Self {
        SavingsScanner { fares }
    }

    /// Lazily scan every ordered pair in station order. Dropping the
    /// iterator abandons the rest of the scan.
    pub fn scan(&self, category: FareCategory) -> SavingsScan<'a, P> {
        SavingsScan {
            fares: self.fares,
            category,
            origin: 0,
            dest: 0,
        }
    }

    /// Run the scan to completion.
    pub fn scan_all(&self, category: FareCategory) -> Vec<SavingInfo> {
        let savings: Vec<SavingInfo> = self.scan(category).collect();
        debug!(category = %category, savings = savings.len(), "savings scan complete");
        savings
    }
}

/// Iterator over split savings, ordered by (origin, destination) position
/// in the station list.
pub struct SavingsScan<'a, P: FareLookup> {
    fares: &'a P,
    category: FareCategory,
    origin: usize,
    dest: usize,
}

impl<'a, P: FareLookup> SavingsScan<'a, P> {
    fn check(&self, stations: &[Station], i: usize, j: usize) -> Option<SavingInfo> {
        let start = stations[i].id;
        let dest = stations[j].id;

        // Pairs with no direct fare, or a zero one, are not comparable.
        let direct = self.fares.fare(start, dest, self.category)?;
        if direct.is_zero() {
            return None;
        }

        let mut best: Option<(StationId, Fare)> = None;
        for station in stations {
            let k = station.id;
            if k == start || k == dest {
                continue;
            }
            let Some(first) = self.fares.fare(start, k, self.category) else {
                continue;
            };
            let Some(second) = self.fares.fare(k, dest, self.category) else {
                continue;
            };
            let Some(total) = first.checked_add(second) else {
                continue;
            };
            // Strict comparison keeps the first minimum on ties.
            if best.is_none_or(|(_, fare)| total < fare) {
                best = Some((k, total));
            }
        }

        let (via, split_fare) = best?;
        let saving = direct.checked_sub(split_fare)?;
        if saving <= MIN_SAVING {
            return None;
        }

        Some(SavingInfo {
            start,
            dest,
            via,
            direct_fare: direct,
            split_fare,
            saving,
        })
    }
}

impl<'a, P: FareLookup> Iterator for SavingsScan<'a, P> {
    type Item = SavingInfo;

    fn next(&mut self) -> Option<SavingInfo> {
        let stations = self.fares.stations();
        while self.origin < stations.len() {
            while self.dest < stations.len() {
                let (i, j) = (self.origin, self.dest);
                self.dest += 1;
                if i == j {
                    continue;
                }
                if let Some(saving) = self.check(stations, i, j) {
                    return Some(saving);
                }
            }
            self.dest = 0;
            self.origin += 1;
        }
        None
    }
}

/// Aggregate statistics over a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsSummary {
    pub count: usize,
    pub min: Fare,
    pub max: Fare,
    /// Arithmetic mean, rounded to the nearest cent.
    pub mean: Fare,
    /// Median; the midpoint of an even-sized scan rounds half-cents up.
    pub median: Fare,
}

impl SavingsSummary {
    /// Summarize scan output. `None` when nothing was saved anywhere.
    pub fn from_savings(savings: &[SavingInfo]) -> Option<Self> {
        if savings.is_empty() {
            return None;
        }

        let mut cents: Vec<u64> = savings
            .iter()
            .map(|info| u64::from(info.saving.cents()))
            .collect();
        cents.sort_unstable();

        let count = cents.len();
        let sum: u64 = cents.iter().sum();
        let mean = (sum + count as u64 / 2) / count as u64;
        let median = if count % 2 == 1 {
            cents[count / 2]
        } else {
            (cents[count / 2 - 1] + cents[count / 2] + 1) / 2
        };

        Some(SavingsSummary {
            count,
            min: Fare::from_cents(cents[0] as u32),
            max: Fare::from_cents(cents[count - 1] as u32),
            mean: Fare::from_cents(mean as u32),
            median: Fare::from_cents(median as u32),
        })
    }
}

#[cfg(test)]
mod mock {
    use std::collections::HashMap;

    use super::FareLookup;
    use crate::domain::{Fare, FareCategory, Station, StationId};

    /// Fare data keyed by ordered pair, the same for every category.
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
            self.fare(origin, dest, category)
        }
    }
}
