//! Student record types and input normalization.

use std::collections::HashMap;

/// Unique student identifier.
///
/// `0` is reserved as the "unset" sentinel in raw reference lists and is
/// never a valid roster id.
pub type StudentId = u32;

/// Seat position class a student occupied in the previous housing cycle.
///
/// Rooms group their four seats into two classes (two seats each); the
/// allocator alternates a student's class between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatPosition {
    /// Previously on a hallway-adjacent seat (codes 1 and 4).
    Hallway,

    /// Previously on a window-adjacent seat (codes 2 and 3).
    Window,

    /// No usable previous-position data. Treated like `Window` by the
    /// alternation rule (the student is seeded on a hallway seat).
    Unknown,
}

impl SeatPosition {
    /// Maps a raw numeric seat code from the input table.
    ///
    /// Codes 1 and 4 are hallway-adjacent, 2 and 3 window-adjacent.
    /// Anything else (absent, NaN, fractional, out of range) is [`Unknown`].
    ///
    /// [`Unknown`]: SeatPosition::Unknown
    pub fn from_code(code: Option<f64>) -> Self {
        match code {
            Some(c) if c == 1.0 || c == 4.0 => SeatPosition::Hallway,
            Some(c) if c == 2.0 || c == 3.0 => SeatPosition::Window,
            _ => SeatPosition::Unknown,
        }
    }
}

/// One student, as read from one input row.
///
/// # Construction
///
/// ```
/// use u_dormassign::roster::{SeatPosition, StudentRecord};
///
/// let record = StudentRecord::new(7, SeatPosition::Hallway)
///     .with_roommates(&[3, 12])
///     .with_avoid(&[25])
///     .with_feature("NoiseSensitivity", 8.0);
/// assert_eq!(record.previous_roommates, vec![3, 12]);
/// ```
///
/// For raw spreadsheet values (where references arrive as optional floats
/// with 0/NaN meaning "unset"), use [`StudentRecord::from_raw`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentRecord {
    /// Unique positive id.
    pub id: StudentId,

    /// Seat position class in the previous cycle.
    pub previous_position: SeatPosition,

    /// Students this one roomed with last cycle (up to 3). Never co-roomed
    /// again.
    pub previous_roommates: Vec<StudentId>,

    /// Students this one must never co-room with (up to 2).
    pub avoid: Vec<StudentId>,

    /// Named feature values, nominally in [1, 10]. Consulted only when the
    /// caller selects feature columns for similarity tie-breaking.
    pub features: HashMap<String, f64>,
}

impl StudentRecord {
    /// Creates a record with no constraints and no features.
    pub fn new(id: StudentId, previous_position: SeatPosition) -> Self {
        Self {
            id,
            previous_position,
            previous_roommates: Vec::new(),
            avoid: Vec::new(),
            features: HashMap::new(),
        }
    }

    /// Sets the previous-roommate list.
    pub fn with_roommates(mut self, ids: &[StudentId]) -> Self {
        self.previous_roommates = ids.to_vec();
        self
    }

    /// Sets the avoid list.
    pub fn with_avoid(mut self, ids: &[StudentId]) -> Self {
        self.avoid = ids.to_vec();
        self
    }

    /// Adds one named feature value.
    pub fn with_feature(mut self, name: &str, value: f64) -> Self {
        self.features.insert(name.to_string(), value);
        self
    }

    /// Builds a record from raw spreadsheet values.
    ///
    /// Reference entries that are `None`, NaN, non-positive, or the
    /// student's own id are dropped — they all mean "no constraint" in the
    /// input encoding. The seat-position code is mapped via
    /// [`SeatPosition::from_code`].
    pub fn from_raw(
        id: StudentId,
        position_code: Option<f64>,
        roommate_codes: &[Option<f64>],
        avoid_codes: &[Option<f64>],
        features: HashMap<String, f64>,
    ) -> Self {
        Self {
            id,
            previous_position: SeatPosition::from_code(position_code),
            previous_roommates: resolve_references(roommate_codes, id),
            avoid: resolve_references(avoid_codes, id),
            features,
        }
    }
}

/// Cleans a raw reference list: keeps positive integral ids other than the
/// owner's, in input order.
fn resolve_references(codes: &[Option<f64>], owner: StudentId) -> Vec<StudentId> {
    codes
        .iter()
        .filter_map(|code| match code {
            Some(c) if c.is_finite() && *c >= 1.0 => Some(c.trunc() as StudentId),
            _ => None,
        })
        .filter(|&id| id != owner)
        .collect()
}
