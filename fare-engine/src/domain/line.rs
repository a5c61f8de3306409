//! Rail line types.

use std::fmt;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// A valid 3-letter MTR line code.
///
/// Line codes are always 3 uppercase ASCII letters ("EAL", "TML", "ISL").
/// This type guarantees that any `LineCode` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use fare_engine::domain::LineCode;
///
/// let eal = LineCode::parse("EAL").unwrap();
/// assert_eq!(eal.as_str(), "EAL");
///
/// // Lowercase is rejected
/// assert!(LineCode::parse("eal").is_err());
///
/// // Wrong length is rejected
/// assert!(LineCode::parse("EA").is_err());
/// assert!(LineCode::parse("EALX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCode([u8; 3]);

impl LineCode {
    /// Parse a line code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidLineCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidLineCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(LineCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Build a code from bytes known to be uppercase ASCII letters.
    /// For in-crate constants only; `parse` is the checked entry point.
    pub(crate) const fn from_ascii(bytes: [u8; 3]) -> Self {
        LineCode(bytes)
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.as_str())
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rail line as assembled from the lines-and-stations feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub code: LineCode,
    /// Display name ("East Rail Line"). Falls back to the code for lines
    /// without a known name.
    pub name: String,
    /// Every station on the line, by feed display name. For a branched
    /// line this is the union of all branches and the trunk; stations
    /// appear exactly once.
    pub stations: Vec<String>,
    /// Present only for lines with more than one downtrack direction.
    pub branch: Option<BranchStructure>,
}

impl Line {
    /// Whether the named station is on this line.
    pub fn serves(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s == station)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Branch topology of a line whose downtrack directions diverge.
///
/// Invariants, maintained by the catalog builder:
/// - `branch_point` is the first station shared by every downtrack
///   direction and is also the first station of `trunk`.
/// - each `Branch` holds only the stations strictly before the branch
///   point in its direction, so branches and trunk are disjoint.
/// - the union of `trunk` and all branch stations is the whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchStructure {
    pub branch_point: String,
    /// Stations shared by all directions, from the branch point onward.
    pub trunk: Vec<String>,
    pub branches: Vec<Branch>,
}

/// One diverging arm of a branched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Human name, derived from the direction code ("LMC" for the
    /// `LMC-DT` direction).
    pub name: String,
    /// Stations exclusive to this branch, in travel order towards the
    /// branch point.
    pub stations: Vec<String>,
}
