//! Student records.
//!
//! One [`StudentRecord`] per input row. Records are immutable for the
//! duration of an allocation run; the constructors normalize the raw
//! spreadsheet encodings (numeric seat-position codes, zero/NaN "unset"
//! sentinels in reference lists) so the engine never sees them.

mod types;

pub use types::{SeatPosition, StudentId, StudentRecord};
