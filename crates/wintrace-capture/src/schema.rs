//! Raw on-disk shapes for the capture hand-off. The dump format lives
//! here; the conversion core only ever sees the domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;
use wintrace_types::{Opcode, PayloadValue, RawEvent, SessionContext};

/// First line of a dump: the capture session object.
#[derive(Debug, Deserialize)]
pub(crate) struct CaptureSession {
    /// Identity of the captured container; the dump path stands in when
    /// the agent did not record one.
    #[serde(default)]
    pub file: Option<String>,
    pub os_version: String,
    pub num_cpu: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CaptureSession {
    pub fn into_context(self, dump_path: &Path) -> SessionContext {
        SessionContext {
            file: self
                .file
                .unwrap_or_else(|| dump_path.display().to_string()),
            os_version: self.os_version,
            num_cpu: self.num_cpu,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// One event line of a dump.
#[derive(Debug, Deserialize)]
pub(crate) struct CaptureEvent {
    pub provider_id: Uuid,
    pub provider: String,
    pub event: String,
    pub task: u16,
    pub opcode: Opcode,
    pub ts: DateTime<Utc>,
    pub ts_rms: f64,
    pub cpu: u16,
    pub pid: i32,
    pub tid: i32,
    pub pname: String,
    #[serde(default)]
    pub payload: Vec<PayloadValue>,
}

impl CaptureEvent {
    pub fn into_raw_event(self) -> RawEvent {
        RawEvent {
            provider_id: self.provider_id,
            task: self.task,
            opcode: self.opcode,
            ts: self.ts,
            ts_rms: self.ts_rms,
            cpu: self.cpu,
            pid: self.pid,
            tid: self.tid,
            pname: self.pname,
            ename: self.event,
            provider: self.provider,
            payload: self.payload,
        }
    }
}
