//! Allocation execution: validation, shuffle, two-phase seat filling.

use super::config::AllocationConfig;
use super::types::{Blacklist, FailureRecord, Room, SeatId, ROOM_CAPACITY};
use crate::roster::{SeatPosition, StudentId, StudentRecord};
use crate::similarity::{feature_vector, neutral_vector, room_score};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Fatal input-shape errors.
///
/// These fail the whole invocation before any room is built. Per-seat
/// assignment failures are not errors — they are part of the
/// [`AllocationResult`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("student roster is empty")]
    EmptyRoster,

    #[error("student id 0 is reserved as the unset sentinel")]
    ReservedStudentId,

    #[error("duplicate student id {0}")]
    DuplicateStudentId(StudentId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result of an allocation run.
///
/// Room numbers are implicit: room `i + 1` is `rooms[i]`. Every seat of
/// every room is either occupied or named in `failures`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationResult {
    /// The completed room table.
    pub rooms: Vec<Room>,

    /// Seats left empty, in the order they were given up on.
    pub failures: Vec<FailureRecord>,
}

impl AllocationResult {
    /// Total number of occupied seats.
    pub fn filled_seats(&self) -> usize {
        self.rooms.iter().map(|r| r.filled_seats()).sum()
    }

    /// Whether every seat was filled.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Finds a student's room number (1-based) and seat.
    pub fn locate(&self, student: StudentId) -> Option<(usize, SeatId)> {
        self.rooms.iter().enumerate().find_map(|(i, room)| {
            SeatId::ALL
                .iter()
                .find(|&&s| room.seat(s) == Some(student))
                .map(|&s| (i + 1, s))
        })
    }
}

impl fmt::Display for AllocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, room) in self.rooms.iter().enumerate() {
            writeln!(f, "room {:>2}: {room}", i + 1)?;
        }
        for failure in &self.failures {
            writeln!(f, "unfilled: {failure}")?;
        }
        Ok(())
    }
}

/// Executes the two-phase room assignment.
///
/// # Usage
///
/// ```
/// use u_dormassign::allocation::{AllocationConfig, AllocationRunner};
/// use u_dormassign::roster::{SeatPosition, StudentRecord};
///
/// let students: Vec<StudentRecord> = (1..=8)
///     .map(|id| StudentRecord::new(id, SeatPosition::Unknown))
///     .collect();
///
/// let config = AllocationConfig::default().with_seed(42);
/// let result = AllocationRunner::run(&students, &config).unwrap();
/// assert_eq!(result.rooms.len(), 2);
/// assert!(result.is_complete());
/// ```
pub struct AllocationRunner;

impl AllocationRunner {
    /// Runs the allocation.
    ///
    /// Phase 1 shuffles the roster and seeds one student per room on a seat
    /// whose position class alternates with the student's previous cycle.
    /// Phase 2 walks rooms in ascending order and fills the remaining seats
    /// from the shuffled pool, admitting only constraint-free candidates and
    /// breaking ties by feature similarity when feature columns are
    /// selected. A single greedy forward pass: no seat is revisited, no
    /// constraint is relaxed, every unfillable seat is reported.
    pub fn run(
        students: &[StudentRecord],
        config: &AllocationConfig,
    ) -> Result<AllocationResult, AllocationError> {
        config.validate().map_err(AllocationError::InvalidConfig)?;
        if students.is_empty() {
            return Err(AllocationError::EmptyRoster);
        }

        let mut index: HashMap<StudentId, &StudentRecord> = HashMap::with_capacity(students.len());
        for record in students {
            if record.id == 0 {
                return Err(AllocationError::ReservedStudentId);
            }
            if index.insert(record.id, record).is_some() {
                return Err(AllocationError::DuplicateStudentId(record.id));
            }
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut order: Vec<StudentId> = students.iter().map(|s| s.id).collect();
        order.shuffle(&mut rng);

        let room_count = students.len().div_ceil(ROOM_CAPACITY);
        let mut rooms = vec![Room::empty(); room_count];

        seed_rooms(&mut rooms, &order, &index);
        let failures = fill_rooms(&mut rooms, &order, &index, config);

        Ok(AllocationResult { rooms, failures })
    }
}

/// Phase 1: one position-aware seat per room.
///
/// Shuffled student `i` goes to room `i`. A student previously on a hallway
/// seat is offered the window seats and vice versa (unknown history counts
/// as window). If both candidate seats are taken the first empty seat in
/// fixed order is used instead.
fn seed_rooms(
    rooms: &mut [Room],
    order: &[StudentId],
    index: &HashMap<StudentId, &StudentRecord>,
) {
    for (room, &id) in rooms.iter_mut().zip(order.iter()) {
        let Some(record) = index.get(&id) else {
            tracing::debug!(student = id, "shuffled id missing from roster index, skipped");
            continue;
        };

        let candidates: &[SeatId] = match record.previous_position {
            SeatPosition::Hallway => &SeatId::WINDOW,
            SeatPosition::Window | SeatPosition::Unknown => &SeatId::HALLWAY,
        };

        let seat = room
            .first_empty(candidates)
            .or_else(|| room.first_empty(&SeatId::ALL));
        if let Some(seat) = seat {
            room.assign(seat, id);
        }
    }
}

/// Phase 2: constrained fill of every remaining seat.
fn fill_rooms(
    rooms: &mut [Room],
    order: &[StudentId],
    index: &HashMap<StudentId, &StudentRecord>,
    config: &AllocationConfig,
) -> Vec<FailureRecord> {
    let seated: HashSet<StudentId> = rooms.iter().flat_map(|r| r.occupants()).collect();
    let mut remaining: Vec<StudentId> = order
        .iter()
        .copied()
        .filter(|id| !seated.contains(id))
        .collect();

    let mut failures = Vec::new();

    for (room_idx, room) in rooms.iter_mut().enumerate() {
        let room_number = room_idx + 1;
        let mut members = room.occupants();

        for seat in SeatId::ALL {
            if room.seat(seat).is_some() {
                continue;
            }

            let eligible: Vec<StudentId> = remaining
                .iter()
                .copied()
                .filter(|&candidate| match index.get(&candidate) {
                    Some(record) => admissible(record, &members, index, &config.blacklist),
                    None => {
                        tracing::debug!(
                            student = candidate,
                            "candidate missing from roster index, skipped"
                        );
                        false
                    }
                })
                .collect();

            match select_seat_candidate(&eligible, &members, index, config) {
                Some(chosen) => {
                    room.assign(seat, chosen);
                    remaining.retain(|&id| id != chosen);
                    members.push(chosen);
                }
                None => {
                    tracing::debug!(
                        room = room_number,
                        seat = seat.name(),
                        "no eligible candidate, seat left empty"
                    );
                    failures.push(FailureRecord {
                        room: room_number,
                        seat,
                    });
                }
            }
        }
    }

    failures
}

/// Whether a candidate may join a room with the given members.
///
/// The check is mutual: the candidate's avoid and previous-roommate lists
/// must not name a member, no member's lists may name the candidate, and no
/// {candidate, member} pair may be blacklisted.
fn admissible(
    candidate: &StudentRecord,
    members: &[StudentId],
    index: &HashMap<StudentId, &StudentRecord>,
    blacklist: &Blacklist,
) -> bool {
    if candidate.avoid.iter().any(|a| members.contains(a)) {
        return false;
    }
    if candidate
        .previous_roommates
        .iter()
        .any(|p| members.contains(p))
    {
        return false;
    }

    for &m in members {
        if blacklist.contains(candidate.id, m) {
            return false;
        }
        if let Some(member) = index.get(&m) {
            if member.avoid.contains(&candidate.id)
                || member.previous_roommates.contains(&candidate.id)
            {
                return false;
            }
        }
    }

    true
}

/// Picks the winner among the eligible candidates for one seat.
///
/// First-eligible when no feature columns are selected or the room is still
/// empty; otherwise the strictly highest room-similarity score, with ties
/// keeping the earliest-scanned candidate.
fn select_seat_candidate(
    eligible: &[StudentId],
    members: &[StudentId],
    index: &HashMap<StudentId, &StudentRecord>,
    config: &AllocationConfig,
) -> Option<StudentId> {
    let (&first, rest) = eligible.split_first()?;
    if config.features.is_empty() || members.is_empty() {
        return Some(first);
    }

    let member_vectors: Vec<Vec<f64>> = members
        .iter()
        .map(|m| match index.get(m) {
            Some(record) => feature_vector(record, &config.features),
            None => neutral_vector(config.features.len()),
        })
        .collect();

    let score_of = |candidate: StudentId| -> f64 {
        let vector = match index.get(&candidate) {
            Some(record) => feature_vector(record, &config.features),
            None => neutral_vector(config.features.len()),
        };
        room_score(&member_vectors, &vector)
    };

    let mut best = first;
    let mut best_score = score_of(first);
    for &candidate in rest {
        let score = score_of(candidate);
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }
    Some(best)
}
