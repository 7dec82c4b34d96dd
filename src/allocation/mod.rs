//! Room allocation.
//!
//! A randomized two-phase greedy pass over the roster:
//!
//! 1. **Seeding** — a uniform shuffle of the roster; shuffled student `i`
//!    takes one seat in room `i`, chosen so that the seat's position class
//!    (hallway vs window) alternates with the student's previous cycle.
//! 2. **Constrained fill** — rooms in ascending order, empty seats in fixed
//!    order; every remaining student is screened against the room's current
//!    occupants (avoid lists, previous roommates, blacklist, all mutual)
//!    and the winner among the admissible candidates is either the first
//!    scanned or, when feature columns are selected, the one most similar
//!    to the occupants.
//!
//! Deliberately order-dependent and non-optimal: the contract is
//! determinism given a fixed seed and explicit reporting of every seat that
//! could not be filled, not a globally optimal assignment. There is no
//! backtracking and no constraint relaxation.

mod config;
mod runner;
mod types;

pub use config::AllocationConfig;
pub use runner::{AllocationError, AllocationResult, AllocationRunner};
pub use types::{Blacklist, FailureRecord, Room, SeatId, ROOM_CAPACITY};
