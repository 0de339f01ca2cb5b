//! Deterministic RawEvent and SessionContext builders.
//!
//! All timestamps are fixed so tests assert on exact output lines.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;
use wintrace_types::provider::{
    DXGKRNL_GUID, DXGKRNL_TASK_QUEUE_PACKET, DXGKRNL_TASK_VSYNC, STEAMVR_GUID,
};
use wintrace_types::{Opcode, PayloadValue, RawEvent, SessionContext};

/// Capture start instant shared by all fixtures.
pub fn capture_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// A capture context matching [`capture_start`].
pub fn session_context() -> SessionContext {
    SessionContext {
        file: "capture.jsonl".to_string(),
        os_version: "10.0.19045".to_string(),
        num_cpu: 8,
        start_time: capture_start(),
        end_time: capture_start() + Duration::seconds(30),
    }
}

/// Builder for one test event. Defaults are valid and deterministic; tests
/// override only what they assert on.
pub struct EventBuilder {
    event: RawEvent,
}

impl EventBuilder {
    pub fn new(provider_id: Uuid) -> Self {
        Self {
            event: RawEvent {
                provider_id,
                task: 0,
                opcode: Opcode::Info,
                ts: capture_start() + Duration::milliseconds(5),
                ts_rms: 5.0,
                cpu: 0,
                pid: 4242,
                tid: 4243,
                pname: "app.exe".to_string(),
                ename: "Event".to_string(),
                provider: "Unknown".to_string(),
                payload: Vec::new(),
            },
        }
    }

    pub fn task(mut self, task: u16) -> Self {
        self.event.task = task;
        self
    }

    pub fn opcode(mut self, opcode: Opcode) -> Self {
        self.event.opcode = opcode;
        self
    }

    pub fn ename(mut self, ename: &str) -> Self {
        self.event.ename = ename.to_string();
        self
    }

    pub fn provider_name(mut self, provider: &str) -> Self {
        self.event.provider = provider.to_string();
        self
    }

    pub fn pname(mut self, pname: &str) -> Self {
        self.event.pname = pname.to_string();
        self
    }

    pub fn ts_rms(mut self, ts_rms: f64) -> Self {
        self.event.ts_rms = ts_rms;
        self
    }

    pub fn payload(mut self, name: &str, value: &str) -> Self {
        self.event.payload.push(PayloadValue {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn build(self) -> RawEvent {
        self.event
    }
}

/// A SteamVR compositor event carrying one opaque payload string.
pub fn steamvr_event(vrevent: &str) -> RawEvent {
    EventBuilder::new(STEAMVR_GUID)
        .provider_name("SteamVR")
        .ename("VREvent")
        .pname("vrcompositor.exe")
        .payload("Event", vrevent)
        .build()
}

/// A graphics-kernel vsync interrupt with positional payloads.
pub fn vsync_event(adapter: &str, display: &str, address: &str) -> RawEvent {
    EventBuilder::new(DXGKRNL_GUID)
        .provider_name("DxgKrnl")
        .ename("VSyncInterrupt")
        .task(DXGKRNL_TASK_VSYNC)
        .payload("Adapter", adapter)
        .payload("Display", display)
        .payload("Address", address)
        .build()
}

/// A graphics-kernel queue-packet builder with the common payloads set;
/// tests add the opcode-specific ones.
pub fn queue_packet_event(opcode: Opcode) -> EventBuilder {
    EventBuilder::new(DXGKRNL_GUID)
        .provider_name("DxgKrnl")
        .ename("QueuePacket")
        .task(DXGKRNL_TASK_QUEUE_PACKET)
        .opcode(opcode)
        .payload("hContext", "0xFFFFC10D")
        .payload("SubmitSequence", "1,024")
}

/// An event from a provider no schema covers.
pub fn unknown_event() -> RawEvent {
    EventBuilder::new(Uuid::from_u128(0xdeadbeef_0000_4000_8000_000000000001))
        .provider_name("Mystery")
        .ename("Noise")
        .payload("Blob", "junk")
        .build()
}
