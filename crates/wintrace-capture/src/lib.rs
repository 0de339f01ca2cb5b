//! Capture-dump input for wintrace.
//!
//! The live trace session is managed by an external capture agent; its
//! hand-off to this workspace is a JSONL dump with one session object on
//! the first line and one event object per line after it. This crate
//! parses that dump into the domain model and delivers events one at a
//! time, in arrival order.

mod reader;
mod schema;

pub use reader::CaptureReader;
