//! Spending statistics read from the summary cells

use serde::{Deserialize, Serialize};

use super::Money;

/// The (total, average, projected) triple at one point in time
///
/// Serialized as a three-element array, which is the on-disk cache format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Money; 3]", into = "[Money; 3]")]
pub struct StatsSnapshot {
    pub total: Money,
    pub average: Money,
    pub projected: Money,
}

impl StatsSnapshot {
    pub fn new(total: Money, average: Money, projected: Money) -> Self {
        Self {
            total,
            average,
            projected,
        }
    }

    /// Change from a baseline snapshot to this one
    pub fn delta_from(&self, baseline: &StatsSnapshot) -> StatsDelta {
        StatsDelta {
            average: self.average - baseline.average,
            projected: self.projected - baseline.projected,
        }
    }
}

impl From<[Money; 3]> for StatsSnapshot {
    fn from([total, average, projected]: [Money; 3]) -> Self {
        Self::new(total, average, projected)
    }
}

impl From<StatsSnapshot> for [Money; 3] {
    fn from(s: StatsSnapshot) -> Self {
        [s.total, s.average, s.projected]
    }
}

/// How average and projected spend moved across one write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsDelta {
    pub average: Money,
    pub projected: Money,
}

/// Baseline and fresh snapshots around a meal write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsChange {
    pub baseline: StatsSnapshot,
    pub fresh: StatsSnapshot,
}

impl StatsChange {
    pub fn delta(&self) -> StatsDelta {
        self.fresh.delta_from(&self.baseline)
    }
}
