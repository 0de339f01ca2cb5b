use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// NOTE: Schema Design Goals
//
// 1. One event, one delivery: the conversion core reads a RawEvent exactly
//    once, synchronously, by reference. Nothing downstream retains it past
//    the call that delivers it, so the capture side stays free to reuse or
//    drop its buffers between events.
//
// 2. Provider-scoped meaning: `task` and `opcode` only mean something in
//    combination with `provider_id`. The classifier owns that mapping; this
//    type carries the values untouched.
//
// 3. Text-representable payloads: every payload value crosses the capture
//    boundary as text. Mixed numeric representations (hex, grouped decimal)
//    are normalized later, at record-construction time, never here.

/// Operation code of a trace event. The numeric values follow the tracing
/// subsystem's convention (0 = Info, 1 = Start, 2 = Stop); what an opcode
/// means for a given event family is provider-scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opcode {
    Info,
    Start,
    Stop,
}

impl Opcode {
    /// Stable numeric form used in the output format.
    pub fn value(self) -> u8 {
        match self {
            Opcode::Info => 0,
            Opcode::Start => 1,
            Opcode::Stop => 2,
        }
    }
}

/// One named payload value, kept in the order the provider declared it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadValue {
    pub name: String,
    pub value: String,
}

/// One captured trace occurrence, as handed over by the capture collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Stable 128-bit identity of the originating provider.
    pub provider_id: Uuid,

    /// Provider-scoped task identifier (distinguishes event families that
    /// share one provider identity).
    pub task: u16,

    /// Provider-scoped operation code.
    pub opcode: Opcode,

    /// Wall-clock timestamp (UTC).
    pub ts: DateTime<Utc>,

    /// Milliseconds since capture start.
    pub ts_rms: f64,

    /// CPU the event was recorded on.
    pub cpu: u16,

    /// Originating process id.
    pub pid: i32,

    /// Originating thread id.
    pub tid: i32,

    /// Originating process name.
    pub pname: String,

    /// Provider-defined event name.
    pub ename: String,

    /// Human-readable provider name.
    pub provider: String,

    /// Ordered named payload values, each representable as text.
    #[serde(default)]
    pub payload: Vec<PayloadValue>,
}

impl RawEvent {
    /// Payload value at a declared position.
    pub fn payload_string(&self, index: usize) -> Option<&str> {
        self.payload.get(index).map(|p| p.value.as_str())
    }

    /// Payload value by declared name.
    pub fn payload_named(&self, name: &str) -> Option<&str> {
        self.payload
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> RawEvent {
        RawEvent {
            provider_id: Uuid::nil(),
            task: 3,
            opcode: Opcode::Start,
            ts: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            ts_rms: 41.25,
            cpu: 1,
            pid: 100,
            tid: 200,
            pname: "proc".to_string(),
            ename: "Event".to_string(),
            provider: "Provider".to_string(),
            payload: vec![
                PayloadValue {
                    name: "First".to_string(),
                    value: "0x10".to_string(),
                },
                PayloadValue {
                    name: "Second".to_string(),
                    value: "2".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_payload_access() {
        let event = sample();
        assert_eq!(event.payload_string(0), Some("0x10"));
        assert_eq!(event.payload_string(2), None);
        assert_eq!(event.payload_named("Second"), Some("2"));
        assert_eq!(event.payload_named("Missing"), None);
    }

    #[test]
    fn test_serialization() {
        let event = sample();
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: RawEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.opcode, Opcode::Start);
        assert_eq!(deserialized.payload_named("First"), Some("0x10"));
    }

    #[test]
    fn test_opcode_values() {
        assert_eq!(Opcode::Info.value(), 0);
        assert_eq!(Opcode::Start.value(), 1);
        assert_eq!(Opcode::Stop.value(), 2);
    }
}
