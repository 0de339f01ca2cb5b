use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capture-wide metadata, created once per capture and emitted exactly once
/// before any event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Identity of the captured container the events came from.
    pub file: String,

    /// OS version string reported by the capture session.
    pub os_version: String,

    /// Number of CPUs on the capture machine.
    pub num_cpu: u32,

    /// Capture start timestamp (UTC).
    pub start_time: DateTime<Utc>,

    /// Capture end timestamp (UTC).
    pub end_time: DateTime<Utc>,
}
