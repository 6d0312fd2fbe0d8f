//! Articulation point (cut vertex) detection.

pub use brute_force::{brute_force, brute_force_parallel};
pub use detector::{detect, detect_observed, Observer, Progress};

use crate::types::VId;
use std::collections::BTreeSet;

mod brute_force;
mod detector;

/// Membership of every vertex id in the set of articulation points.
#[derive(Debug, Clone, Default)]
pub struct ArticulationPoints {
    flags: Vec<bool>,
}

impl ArticulationPoints {
    pub(crate) fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    pub fn contains(&self, v: VId) -> bool {
        self.flags.get(v).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }

    /// Returns an iterator visiting the articulation points in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = VId> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(|(v, _)| v)
    }

    pub fn to_set(&self) -> BTreeSet<VId> {
        self.iter().collect()
    }

    /// Returns the membership flags indexed by vertex id.
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }
}

impl PartialEq for ArticulationPoints {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ArticulationPoints {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let points = ArticulationPoints::from_flags(vec![false, true, false, true]);
        assert!(points.contains(1));
        assert!(!points.contains(2));
        assert!(!points.contains(100));
        assert_eq!(points.len(), 2);
        assert_eq!(points.iter().collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn test_eq_ignores_trailing_flags() {
        assert_eq!(
            ArticulationPoints::from_flags(vec![false, true]),
            ArticulationPoints::from_flags(vec![false, true, false, false])
        );
        assert!(ArticulationPoints::default().is_empty());
    }
}
