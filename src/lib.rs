//! Dormitory room assignment engine.
//!
//! Assigns students to shared four-seat rooms in a single greedy forward
//! pass:
//!
//! - **Allocation**: randomized two-phase seat filling. Phase 1 seeds one
//!   student per room on a seat whose position class (hallway vs window)
//!   alternates with the student's previous cycle. Phase 2 fills the
//!   remaining seats from the shuffled pool, admitting only candidates that
//!   violate no avoid-list, previous-roommate, or blacklist constraint
//!   against the room's current occupants.
//! - **Similarity**: when several candidates are admissible and feature
//!   columns are selected, the candidate whose feature vector is closest
//!   (on average) to the current occupants wins the seat.
//!
//! Seats that cannot be filled are reported as failure records alongside the
//! completed room table; they are part of the result, not an error.
//!
//! # Determinism
//!
//! The only source of randomness is the initial shuffle. With a fixed seed
//! ([`allocation::AllocationConfig::with_seed`]) a run is reproducible
//! end-to-end.
//!
//! # Architecture
//!
//! The engine is a pure, synchronous, in-process function boundary. Reading
//! spreadsheets, rendering results, and generating test data are consumer
//! concerns; the engine receives typed [`roster::StudentRecord`]s and never
//! inspects table schema.

pub mod allocation;
pub mod roster;
pub mod similarity;
