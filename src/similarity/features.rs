//! Feature-vector extraction.

use crate::roster::StudentRecord;

/// Lower bound of the feature value domain.
pub const FEATURE_MIN: f64 = 1.0;

/// Upper bound of the feature value domain.
pub const FEATURE_MAX: f64 = 10.0;

/// Midpoint substituted for missing or NaN feature values.
pub const NEUTRAL_VALUE: f64 = 5.0;

/// Extracts a student's feature vector for the selected columns.
///
/// Values appear in the order of `selected`. A feature the record does not
/// carry, or carries as NaN, yields [`NEUTRAL_VALUE`] — extraction never
/// fails.
pub fn feature_vector(record: &StudentRecord, selected: &[String]) -> Vec<f64> {
    selected
        .iter()
        .map(|name| match record.features.get(name) {
            Some(v) if v.is_finite() => *v,
            _ => NEUTRAL_VALUE,
        })
        .collect()
}

/// The all-neutral vector, used when a record lookup misses entirely.
pub fn neutral_vector(len: usize) -> Vec<f64> {
    vec![NEUTRAL_VALUE; len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::SeatPosition;

    fn selected(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_extraction_preserves_selection_order() {
        let record = StudentRecord::new(1, SeatPosition::Unknown)
            .with_feature("A", 2.0)
            .with_feature("B", 9.0);

        let v = feature_vector(&record, &selected(&["B", "A"]));
        assert_eq!(v, vec![9.0, 2.0]);
    }

    #[test]
    fn test_missing_feature_is_neutral() {
        let record = StudentRecord::new(1, SeatPosition::Unknown).with_feature("A", 2.0);

        let v = feature_vector(&record, &selected(&["A", "Missing"]));
        assert_eq!(v, vec![2.0, NEUTRAL_VALUE]);
    }

    #[test]
    fn test_nan_feature_is_neutral() {
        let record = StudentRecord::new(1, SeatPosition::Unknown).with_feature("A", f64::NAN);

        let v = feature_vector(&record, &selected(&["A"]));
        assert_eq!(v, vec![NEUTRAL_VALUE]);
    }

    #[test]
    fn test_neutral_vector() {
        assert_eq!(neutral_vector(3), vec![5.0, 5.0, 5.0]);
        assert!(neutral_vector(0).is_empty());
    }
}
