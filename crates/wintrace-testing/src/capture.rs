//! Capture-dump writers.
//!
//! Integration tests generate the JSONL hand-off format a capture agent
//! writes: one session object on the first line, one event object per line
//! after it.

use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;
use wintrace_types::{RawEvent, SessionContext};

/// Render one event as its dump line.
pub fn capture_event_line(event: &RawEvent) -> String {
    json!({
        "provider_id": event.provider_id,
        "provider": event.provider,
        "event": event.ename,
        "task": event.task,
        "opcode": event.opcode,
        "ts": event.ts,
        "ts_rms": event.ts_rms,
        "cpu": event.cpu,
        "pid": event.pid,
        "tid": event.tid,
        "pname": event.pname,
        "payload": event.payload,
    })
    .to_string()
}

/// Render the session line.
pub fn capture_session_line(ctx: &SessionContext) -> String {
    json!({
        "file": ctx.file,
        "os_version": ctx.os_version,
        "num_cpu": ctx.num_cpu,
        "start_time": ctx.start_time,
        "end_time": ctx.end_time,
    })
    .to_string()
}

/// Write a complete capture dump to `path`.
pub fn write_capture_file(path: &Path, ctx: &SessionContext, events: &[RawEvent]) -> Result<()> {
    let mut lines = vec![capture_session_line(ctx)];
    lines.extend(events.iter().map(capture_event_line));
    lines.push(String::new());
    fs::write(path, lines.join("\n"))?;
    Ok(())
}
