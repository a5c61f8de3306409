//! Station and line catalog.
//!
//! Built once from the lines-and-stations table. Branch topology is
//! inferred at build time from direction codes: a line with more than one
//! downtrack direction has branches, and the branch point is the first
//! station that every downtrack direction serves. All tie-breaks live
//! here, nothing downstream re-derives topology.

mod regions;

pub use regions::region_of;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{Branch, BranchStructure, Line, LineCode};
use crate::feed::LineRow;

/// Display names for the line codes in the published network.
fn line_name(code: LineCode) -> Option<&'static str> {
    match code.as_str() {
        "AEL" => Some("Airport Express"),
        "DRL" => Some("Disneyland Resort Line"),
        "EAL" => Some("East Rail Line"),
        "ISL" => Some("Island Line"),
        "KTL" => Some("Kwun Tong Line"),
        "SIL" => Some("South Island Line"),
        "TCL" => Some("Tung Chung Line"),
        "TKL" => Some("Tseung Kwan O Line"),
        "TML" => Some("Tuen Ma Line"),
        "TWL" => Some("Tsuen Wan Line"),
        _ => None,
    }
}

/// The assembled line catalog: every line with its ordered stations and
/// branch structure, plus a station-name → lines index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    lines: Vec<Line>,
    membership: HashMap<String, Vec<LineCode>>,
}

impl Catalog {
    /// Build the catalog from feed rows.
    ///
    /// Rows with an invalid line code are skipped. Lines appear in the
    /// order the feed first mentions them; stations within a direction are
    /// ordered by the feed's sequence numbers.
    pub fn from_rows(rows: &[LineRow]) -> Self {
        let mut order: Vec<LineCode> = Vec::new();
        let mut grouped: HashMap<LineCode, HashMap<String, Vec<(f64, String)>>> = HashMap::new();

        for row in rows {
            let code = match LineCode::parse(&row.line_code) {
                Ok(code) => code,
                Err(err) => {
                    warn!(line = %row.line_code, error = %err, "skipping row with invalid line code");
                    continue;
                }
            };
            let directions = grouped.entry(code).or_insert_with(|| {
                order.push(code);
                HashMap::new()
            });
            directions
                .entry(row.direction.clone())
                .or_default()
                .push((row.sequence, row.english_name.clone()));
        }

        let mut lines = Vec::with_capacity(order.len());
        let mut membership: HashMap<String, Vec<LineCode>> = HashMap::new();

        for code in order {
            let Some(dirs) = grouped.remove(&code) else {
                continue;
            };

            // Stations in sequence order within each direction; directions
            // in code order so the build is deterministic.
            let mut directions: Vec<(String, Vec<String>)> = dirs
                .into_iter()
                .map(|(direction, mut stops)| {
                    stops.sort_by(|a, b| a.0.total_cmp(&b.0));
                    let stations = stops.into_iter().map(|(_, name)| name).collect();
                    (direction, stations)
                })
                .collect();
            directions.sort_by(|a, b| a.0.cmp(&b.0));

            let line = assemble_line(code, directions);
            for station in &line.stations {
                let codes = membership.entry(station.clone()).or_default();
                if !codes.contains(&code) {
                    codes.push(code);
                }
            }
            lines.push(line);
        }

        debug!(
            lines = lines.len(),
            stations = membership.len(),
            "catalog built"
        );
        Catalog { lines, membership }
    }

    /// All lines, in feed order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up one line by code.
    ///
    /// If the feed did not mention the line, `None` is returned.
    pub fn line(&self, code: LineCode) -> Option<&Line> {
        self.lines.iter().find(|line| line.code == code)
    }

    /// The codes of every line serving the named station. Empty for
    /// stations the catalog does not know.
    pub fn lines_serving(&self, station: &str) -> &[LineCode] {
        self.membership
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the named station is on the given line.
    pub fn on_line(&self, station: &str, code: LineCode) -> bool {
        self.lines_serving(station).contains(&code)
    }
}

fn assemble_line(code: LineCode, directions: Vec<(String, Vec<String>)>) -> Line {
    let name = line_name(code)
        .map(str::to_owned)
        .unwrap_or_else(|| code.to_string());

    // Branch inference works on downtrack directions only. Some sparse
    // feed extracts carry a single uptrack direction; fall back to
    // whatever is there rather than dropping the line.
    let mut downtrack: Vec<(String, Vec<String>)> = directions
        .iter()
        .filter(|(direction, _)| direction.ends_with("DT"))
        .cloned()
        .collect();
    if downtrack.is_empty() {
        downtrack = directions;
    }

    let (stations, branch) = if downtrack.len() == 1 {
        (downtrack.swap_remove(0).1, None)
    } else {
        assemble_branches(code, &downtrack)
    };

    Line {
        code,
        name,
        stations,
        branch,
    }
}

/// Split branch-exclusive prefixes from the common trunk.
///
/// The branch point is the first station of the first direction that every
/// other downtrack direction also serves. Each direction's stations
/// strictly before it form that direction's branch; the first direction
/// from the branch point onward is the trunk.
fn assemble_branches(
    code: LineCode,
    downtrack: &[(String, Vec<String>)],
) -> (Vec<String>, Option<BranchStructure>) {
    let Some((_, reference)) = downtrack.first() else {
        return (Vec::new(), None);
    };

    let branch_point = reference.iter().find(|station| {
        downtrack[1..]
            .iter()
            .all(|(_, stations)| stations.iter().any(|s| s == *station))
    });

    let Some(branch_point) = branch_point.cloned() else {
        // Directions that never meet; keep every station, no topology.
        debug!(line = %code, "downtrack directions share no station");
        let mut stations: Vec<String> = Vec::new();
        for (_, sequence) in downtrack {
            for station in sequence {
                if !stations.contains(station) {
                    stations.push(station.clone());
                }
            }
        }
        return (stations, None);
    };

    let split = reference
        .iter()
        .position(|s| s == &branch_point)
        .unwrap_or(reference.len());
    let trunk: Vec<String> = reference[split..].to_vec();

    let mut branches = Vec::new();
    for (direction, sequence) in downtrack {
        let cut = sequence
            .iter()
            .position(|s| s == &branch_point)
            .unwrap_or(sequence.len());
        branches.push(Branch {
            name: branch_name(direction),
            stations: sequence[..cut].to_vec(),
        });
    }

    let mut stations: Vec<String> = Vec::new();
    for branch in &branches {
        for station in &branch.stations {
            if !stations.contains(station) {
                stations.push(station.clone());
            }
        }
    }
    for station in &trunk {
        if !stations.contains(station) {
            stations.push(station.clone());
        }
    }

    let structure = BranchStructure {
        branch_point,
        trunk,
        branches,
    };
    (stations, Some(structure))
}

/// "LMC-DT" names the LMC branch; the bare "DT" direction is the main arm.
fn branch_name(direction: &str) -> String {
    let prefix = direction
        .strip_suffix("DT")
        .unwrap_or(direction)
        .trim_end_matches('-');
    if prefix.is_empty() {
        "Main".to_owned()
    } else {
        prefix.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: &str, direction: &str, name: &str, sequence: f64) -> LineRow {
        LineRow {
            line_code: line.to_owned(),
            direction: direction.to_owned(),
            english_name: name.to_owned(),
            sequence,
        }
    }

    fn eal() -> LineCode {
        LineCode::parse("EAL").unwrap()
    }

    #[test]
    fn single_direction_line() {
        let rows = vec![
            row("ISL", "DT", "Kennedy Town", 1.0),
            row("ISL", "DT", "HKU", 2.0),
            row("ISL", "DT", "Sai Ying Pun", 3.0),
        ];

        let catalog = Catalog::from_rows(&rows);
        let line = catalog.line(LineCode::parse("ISL").unwrap()).unwrap();

        assert_eq!(line.name, "Island Line");
        assert_eq!(line.stations, ["Kennedy Town", "HKU", "Sai Ying Pun"]);
        assert!(line.branch.is_none());
    }

    #[test]
    fn stations_are_ordered_by_sequence_not_row_order() {
        let rows = vec![
            row("ISL", "DT", "Sai Ying Pun", 3.0),
            row("ISL", "DT", "Kennedy Town", 1.0),
            row("ISL", "DT", "HKU", 2.0),
        ];

        let catalog = Catalog::from_rows(&rows);
        let line = catalog.line(LineCode::parse("ISL").unwrap()).unwrap();
        assert_eq!(line.stations, ["Kennedy Town", "HKU", "Sai Ying Pun"]);
    }

    #[test]
    fn uptrack_rows_are_ignored_when_downtrack_exists() {
        let rows = vec![
            row("ISL", "UT", "Sai Ying Pun", 1.0),
            row("ISL", "UT", "HKU", 2.0),
            row("ISL", "UT", "Kennedy Town", 3.0),
            row("ISL", "DT", "Kennedy Town", 1.0),
            row("ISL", "DT", "HKU", 2.0),
            row("ISL", "DT", "Sai Ying Pun", 3.0),
        ];

        let catalog = Catalog::from_rows(&rows);
        let line = catalog.line(LineCode::parse("ISL").unwrap()).unwrap();
        assert_eq!(line.stations, ["Kennedy Town", "HKU", "Sai Ying Pun"]);
        assert!(line.branch.is_none());
    }

    #[test]
    fn uptrack_only_line_still_appears() {
        let rows = vec![
            row("AEL", "UT", "Hong Kong", 1.0),
            row("AEL", "UT", "Kowloon", 2.0),
        ];

        let catalog = Catalog::from_rows(&rows);
        let line = catalog.line(LineCode::parse("AEL").unwrap()).unwrap();
        assert_eq!(line.stations, ["Hong Kong", "Kowloon"]);
    }

    #[test]
    fn branched_line_finds_branch_point() {
        // Two downtrack directions that join at Sheung Shui
        let rows = vec![
            row("EAL", "DT", "Lo Wu", 1.0),
            row("EAL", "DT", "Sheung Shui", 2.0),
            row("EAL", "DT", "Fanling", 3.0),
            row("EAL", "DT", "Tai Po Market", 4.0),
            row("EAL", "LMC-DT", "Lok Ma Chau", 1.0),
            row("EAL", "LMC-DT", "Sheung Shui", 2.0),
            row("EAL", "LMC-DT", "Fanling", 3.0),
            row("EAL", "LMC-DT", "Tai Po Market", 4.0),
        ];

        let catalog = Catalog::from_rows(&rows);
        let line = catalog.line(eal()).unwrap();

        let branch = line.branch.as_ref().unwrap();
        assert_eq!(branch.branch_point, "Sheung Shui");
        assert_eq!(branch.trunk, ["Sheung Shui", "Fanling", "Tai Po Market"]);

        assert_eq!(branch.branches.len(), 2);
        assert_eq!(branch.branches[0].name, "Main");
        assert_eq!(branch.branches[0].stations, ["Lo Wu"]);
        assert_eq!(branch.branches[1].name, "LMC");
        assert_eq!(branch.branches[1].stations, ["Lok Ma Chau"]);

        // Full line is every branch prefix then the trunk, once each
        assert_eq!(
            line.stations,
            ["Lo Wu", "Lok Ma Chau", "Sheung Shui", "Fanling", "Tai Po Market"]
        );
    }

    #[test]
    fn disjoint_directions_fall_back_to_a_flat_union() {
        let rows = vec![
            row("XXL", "DT", "Alpha", 1.0),
            row("XXL", "B-DT", "Beta", 1.0),
        ];

        let catalog = Catalog::from_rows(&rows);
        let line = catalog.line(LineCode::parse("XXL").unwrap()).unwrap();
        assert!(line.branch.is_none());
        // Directions are processed in code order: "B-DT" sorts before "DT"
        assert_eq!(line.stations, ["Beta", "Alpha"]);
    }

    #[test]
    fn membership_spans_lines() {
        let rows = vec![
            row("ISL", "DT", "Admiralty", 1.0),
            row("ISL", "DT", "Central", 2.0),
            row("TWL", "DT", "Admiralty", 1.0),
            row("TWL", "DT", "Tsim Sha Tsui", 2.0),
        ];

        let catalog = Catalog::from_rows(&rows);

        let serving = catalog.lines_serving("Admiralty");
        assert_eq!(serving.len(), 2);
        assert!(serving.contains(&LineCode::parse("ISL").unwrap()));
        assert!(serving.contains(&LineCode::parse("TWL").unwrap()));

        assert!(catalog.on_line("Central", LineCode::parse("ISL").unwrap()));
        assert!(!catalog.on_line("Central", LineCode::parse("TWL").unwrap()));
        assert!(catalog.lines_serving("Nowhere").is_empty());
    }

    #[test]
    fn invalid_line_codes_are_skipped() {
        let rows = vec![
            row("bad", "DT", "Alpha", 1.0),
            row("ISL", "DT", "Central", 1.0),
        ];

        let catalog = Catalog::from_rows(&rows);
        assert_eq!(catalog.lines().len(), 1);
        assert_eq!(catalog.lines()[0].code, LineCode::parse("ISL").unwrap());
    }

    #[test]
    fn unknown_codes_display_as_the_code() {
        let rows = vec![row("ZZL", "DT", "Somewhere", 1.0)];
        let catalog = Catalog::from_rows(&rows);
        assert_eq!(catalog.lines()[0].name, "ZZL");
    }

    #[test]
    fn lines_keep_feed_order() {
        let rows = vec![
            row("TWL", "DT", "Central", 1.0),
            row("ISL", "DT", "Chai Wan", 1.0),
            row("TWL", "DT", "Admiralty", 2.0),
        ];

        let catalog = Catalog::from_rows(&rows);
        let codes: Vec<&str> = catalog.lines().iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["TWL", "ISL"]);
    }

    #[test]
    fn branch_names() {
        assert_eq!(branch_name("DT"), "Main");
        assert_eq!(branch_name("LMC-DT"), "LMC");
        assert_eq!(branch_name("TKS-DT"), "TKS");
    }
}
