//! Allocation configuration.

use super::types::Blacklist;
use std::collections::HashSet;

/// Configuration for one allocation run.
///
/// # Examples
///
/// ```
/// use u_dormassign::allocation::{AllocationConfig, Blacklist};
///
/// let mut blacklist = Blacklist::new();
/// blacklist.insert(3, 17).unwrap();
///
/// let config = AllocationConfig::default()
///     .with_seed(42)
///     .with_blacklist(blacklist)
///     .with_features(&["NoiseSensitivity", "SleepTime"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationConfig {
    /// Shuffle seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Pairs of students that must never share a room. Pair validity
    /// (distinct ids within the roster's id domain) is the caller's
    /// responsibility.
    pub blacklist: Blacklist,

    /// Feature columns consulted for similarity tie-breaking, in scoring
    /// order. Empty disables similarity and reverts to first-eligible
    /// selection.
    pub features: Vec<String>,
}

impl AllocationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn with_features(mut self, names: &[&str]) -> Self {
        self.features = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Adds one feature column to the selection.
    pub fn with_feature(mut self, name: &str) -> Self {
        self.features.push(name.to_string());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for name in &self.features {
            if name.is_empty() {
                return Err("feature names must be non-empty".into());
            }
            if !seen.insert(name.as_str()) {
                return Err(format!("duplicate feature name: {name}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AllocationConfig::default();
        assert_eq!(config.seed, None);
        assert!(config.blacklist.is_empty());
        assert!(config.features.is_empty());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AllocationConfig::default().validate().is_ok());

        let config = AllocationConfig::default().with_features(&["A", "B"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_feature() {
        let config = AllocationConfig::default().with_features(&["A", "B", "A"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_feature_name() {
        let config = AllocationConfig::default().with_feature("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = AllocationConfig::default()
            .with_seed(7)
            .with_feature("A")
            .with_feature("B");

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.features, vec!["A", "B"]);
    }
}
