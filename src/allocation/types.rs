//! Core allocation types: seats, rooms, pair exclusions, failure records.

use crate::roster::StudentId;
use std::collections::HashSet;
use std::fmt;

/// Number of seats per room.
pub const ROOM_CAPACITY: usize = 4;

/// One of the four named seats of a room.
///
/// Seats 1 and 4 are hallway-adjacent, seats 2 and 3 window-adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatId {
    Seat1,
    Seat2,
    Seat3,
    Seat4,
}

impl SeatId {
    /// Fixed fill order: seat1 → seat2 → seat3 → seat4.
    pub const ALL: [SeatId; 4] = [SeatId::Seat1, SeatId::Seat2, SeatId::Seat3, SeatId::Seat4];

    /// Hallway-adjacent seats, in candidate order (seat1 before seat4).
    pub const HALLWAY: [SeatId; 2] = [SeatId::Seat1, SeatId::Seat4];

    /// Window-adjacent seats, in candidate order (seat2 before seat3).
    pub const WINDOW: [SeatId; 2] = [SeatId::Seat2, SeatId::Seat3];

    /// The seat's name as it appears in reports.
    pub fn name(&self) -> &'static str {
        match self {
            SeatId::Seat1 => "seat1",
            SeatId::Seat2 => "seat2",
            SeatId::Seat3 => "seat3",
            SeatId::Seat4 => "seat4",
        }
    }

    /// Whether this seat is hallway-adjacent.
    pub fn is_hallway(&self) -> bool {
        matches!(self, SeatId::Seat1 | SeatId::Seat4)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A four-seat room.
///
/// Created empty, mutated only by the allocator during a run. A student id
/// appears in at most one seat across the entire room set of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    seat1: Option<StudentId>,
    seat2: Option<StudentId>,
    seat3: Option<StudentId>,
    seat4: Option<StudentId>,
}

impl Room {
    /// Creates a room with all four seats empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The occupant of a seat, if any.
    pub fn seat(&self, seat: SeatId) -> Option<StudentId> {
        match seat {
            SeatId::Seat1 => self.seat1,
            SeatId::Seat2 => self.seat2,
            SeatId::Seat3 => self.seat3,
            SeatId::Seat4 => self.seat4,
        }
    }

    /// Seats a student. The target seat must be empty.
    pub fn assign(&mut self, seat: SeatId, student: StudentId) {
        debug_assert!(self.seat(seat).is_none(), "seat already occupied");
        match seat {
            SeatId::Seat1 => self.seat1 = Some(student),
            SeatId::Seat2 => self.seat2 = Some(student),
            SeatId::Seat3 => self.seat3 = Some(student),
            SeatId::Seat4 => self.seat4 = Some(student),
        }
    }

    /// Current occupants, in seat order.
    pub fn occupants(&self) -> Vec<StudentId> {
        SeatId::ALL.iter().filter_map(|&s| self.seat(s)).collect()
    }

    /// The first empty seat among `candidates`, in the given order.
    pub fn first_empty(&self, candidates: &[SeatId]) -> Option<SeatId> {
        candidates.iter().copied().find(|&s| self.seat(s).is_none())
    }

    /// Number of occupied seats.
    pub fn filled_seats(&self) -> usize {
        SeatId::ALL.iter().filter(|&&s| self.seat(s).is_some()).count()
    }

    /// Whether all four seats are occupied.
    pub fn is_full(&self) -> bool {
        self.filled_seats() == ROOM_CAPACITY
    }

    /// Whether a student occupies one of this room's seats.
    pub fn contains(&self, student: StudentId) -> bool {
        SeatId::ALL.iter().any(|&s| self.seat(s) == Some(student))
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seat in SeatId::ALL {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            match self.seat(seat) {
                Some(id) => write!(f, "{seat}={id}")?,
                None => write!(f, "{seat}=-")?,
            }
        }
        Ok(())
    }
}

/// Caller-supplied set of unordered student-id pairs that must never share
/// a room.
///
/// Symmetric: `contains(a, b)` equals `contains(b, a)`. Pairs are stored
/// order-normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blacklist {
    pairs: HashSet<(StudentId, StudentId)>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exclusion pair. The two ids must be distinct.
    pub fn insert(&mut self, a: StudentId, b: StudentId) -> Result<(), String> {
        if a == b {
            return Err(format!("blacklist pair must name two distinct students, got {a}"));
        }
        self.pairs.insert(normalize(a, b));
        Ok(())
    }

    /// Whether the unordered pair {a, b} is excluded.
    pub fn contains(&self, a: StudentId, b: StudentId) -> bool {
        self.pairs.contains(&normalize(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn normalize(a: StudentId, b: StudentId) -> (StudentId, StudentId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A seat that could not be filled: room number (1-based) and seat name.
///
/// Carried through to the final result rather than raised as an error. The
/// `Display` rendering is presentational; the structured pair is the
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FailureRecord {
    /// 1-based room number.
    pub room: usize,

    /// The seat left empty.
    pub seat: SeatId,
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {} {}", self.room, self.seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_classes() {
        assert!(SeatId::Seat1.is_hallway());
        assert!(SeatId::Seat4.is_hallway());
        assert!(!SeatId::Seat2.is_hallway());
        assert!(!SeatId::Seat3.is_hallway());
    }

    #[test]
    fn test_candidate_orders() {
        assert_eq!(SeatId::HALLWAY, [SeatId::Seat1, SeatId::Seat4]);
        assert_eq!(SeatId::WINDOW, [SeatId::Seat2, SeatId::Seat3]);
    }

    #[test]
    fn test_room_assign_and_lookup() {
        let mut room = Room::empty();
        assert_eq!(room.filled_seats(), 0);

        room.assign(SeatId::Seat3, 42);
        assert_eq!(room.seat(SeatId::Seat3), Some(42));
        assert_eq!(room.seat(SeatId::Seat1), None);
        assert!(room.contains(42));
        assert!(!room.contains(7));
        assert_eq!(room.occupants(), vec![42]);
    }

    #[test]
    fn test_first_empty_respects_order() {
        let mut room = Room::empty();
        assert_eq!(room.first_empty(&SeatId::WINDOW), Some(SeatId::Seat2));

        room.assign(SeatId::Seat2, 1);
        assert_eq!(room.first_empty(&SeatId::WINDOW), Some(SeatId::Seat3));
        assert_eq!(room.first_empty(&SeatId::ALL), Some(SeatId::Seat1));

        room.assign(SeatId::Seat3, 2);
        assert_eq!(room.first_empty(&SeatId::WINDOW), None);
    }

    #[test]
    fn test_room_full() {
        let mut room = Room::empty();
        for (i, seat) in SeatId::ALL.into_iter().enumerate() {
            assert!(!room.is_full());
            room.assign(seat, i as StudentId + 1);
        }
        assert!(room.is_full());
        assert_eq!(room.occupants(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_room_display() {
        let mut room = Room::empty();
        room.assign(SeatId::Seat1, 12);
        room.assign(SeatId::Seat3, 7);
        assert_eq!(room.to_string(), "seat1=12 | seat2=- | seat3=7 | seat4=-");
    }

    #[test]
    fn test_blacklist_symmetric() {
        let mut bl = Blacklist::new();
        bl.insert(3, 9).unwrap();

        assert!(bl.contains(3, 9));
        assert!(bl.contains(9, 3));
        assert!(!bl.contains(3, 8));
        assert_eq!(bl.len(), 1);
    }

    #[test]
    fn test_blacklist_deduplicates_reversed_pairs() {
        let mut bl = Blacklist::new();
        bl.insert(3, 9).unwrap();
        bl.insert(9, 3).unwrap();
        assert_eq!(bl.len(), 1);
    }

    #[test]
    fn test_blacklist_rejects_degenerate_pair() {
        let mut bl = Blacklist::new();
        assert!(bl.insert(5, 5).is_err());
        assert!(bl.is_empty());
    }

    #[test]
    fn test_failure_record_display() {
        let failure = FailureRecord {
            room: 3,
            seat: SeatId::Seat2,
        };
        assert_eq!(failure.to_string(), "room 3 seat2");
    }
}
