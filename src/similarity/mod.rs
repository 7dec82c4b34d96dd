//! Feature-vector similarity scoring.
//!
//! Ranks candidates by closeness to a room's current occupants. A pair of
//! vectors is scored by normalized Euclidean distance ([`pair_score`]);
//! similarity to a room is the arithmetic mean of the pairwise scores
//! against each occupant ([`room_score`]), not distance to a centroid.

mod features;
mod scorer;

pub use features::{feature_vector, neutral_vector, FEATURE_MAX, FEATURE_MIN, NEUTRAL_VALUE};
pub use scorer::{pair_score, room_score};
