//! Record - Timestamped History Entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::health::HealthStatus;
use crate::domain::physics::DerivedPhysics;
use crate::domain::snapshot::ScadaSnapshot;

/// One fully derived observation: raw SCADA state plus everything the twin
/// engine computed from it. The unit the driver appends to its history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Wall-clock time the record was produced
    pub timestamp: DateTime<Utc>,
    /// Raw SCADA sensor state
    pub snapshot: ScadaSnapshot,
    /// Derived physics quantities
    pub physics: DerivedPhysics,
    /// Health classification
    pub health: HealthStatus,
}
