use wintrace_types::{Error, Opcode, RawEvent, Result, SessionContext};

use crate::encode::LineBuilder;
use crate::normalize::normalize;

/// Any change to the WDAT format requires a version bump.
pub const WDAT_VERSION: &str = "1";

/// Stable record kind identifiers.
///
/// These values are the format contract: a new schema gets a value never
/// used before, and a removed schema's value is never reassigned. Backward
/// readers key off `id`, not field position. `Inspection` sits at a large
/// reserved sentinel so it can never collide with future schema ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WdatEntryId {
    Header = 0,
    Context = 1,
    SteamVr = 2,
    Vsync = 3,
    QueuePacket = 4,
    Inspection = 9999,
}

impl WdatEntryId {
    pub fn value(self) -> u16 {
        self as u16
    }
}

// Graphics-kernel queue-packet payload names, as declared by its event
// manifest. The manifest is versioned upstream; an incompatible revision
// shows up here as missing-payload skips, not as silent misparses.
const QP_CONTEXT: &str = "hContext";
const QP_SEQUENCE: &str = "SubmitSequence";
const QP_PACKET_TYPE: &str = "PacketType";
const QP_DMA_SIZE: &str = "DmaBufferSize";
const QP_DMA_HANDLE: &str = "hDmaBuffer";
const QP_PREEMPTED: &str = "bPreempted";
const QP_TIMED_OUT: &str = "bTimeouted";
const QP_PACKET_ID: &str = "PacketId";

/// Packet-type discriminant for present packets. Start-opcode packets carry
/// the DMA size/handle payloads only under this discriminant.
const QP_PRESENT_PACKET_TYPE: &str = "3";

/// One classified, typed, field-tagged unit of output.
///
/// A record is constructed from exactly one [`RawEvent`] (or from none, for
/// the header and context kinds), immediately rendered, then discarded. The
/// `id` field is always inserted first; after that, field insertion order is
/// deterministic per schema and is part of the format contract.
#[derive(Debug)]
pub struct WdatRecord {
    entry_id: WdatEntryId,
    line: LineBuilder,
}

impl WdatRecord {
    fn new(entry_id: WdatEntryId) -> Self {
        let mut line = LineBuilder::new();
        line.push_field("id", &entry_id.value().to_string());
        Self { entry_id, line }
    }

    fn add_field(&mut self, name: &str, value: &str) {
        self.line.push_field(name, value);
    }

    pub fn entry_id(&self) -> WdatEntryId {
        self.entry_id
    }

    /// Render the record as its output line, consuming it.
    pub fn render(self) -> String {
        self.line.finish()
    }

    /// The stream header. Consumers must check `version` before trusting
    /// any field layout.
    pub fn header() -> WdatRecord {
        let mut record = WdatRecord::new(WdatEntryId::Header);
        record.add_field("version", WDAT_VERSION);
        record
    }

    /// Capture-wide metadata that applies to all following event records.
    pub fn context(ctx: &SessionContext) -> WdatRecord {
        let mut record = WdatRecord::new(WdatEntryId::Context);
        record.add_field("file", &ctx.file);
        record.add_field("os_version", &ctx.os_version);
        record.add_field("num_cpu", &ctx.num_cpu.to_string());
        record.add_field("start_time", &ctx.start_time.timestamp_micros().to_string());
        record.add_field("end_time", &ctx.end_time.timestamp_micros().to_string());
        record
    }

    /// The fields every event-derived record contributes before its
    /// schema-specific ones.
    fn event_base(entry_id: WdatEntryId, event: &RawEvent) -> WdatRecord {
        let mut record = WdatRecord::new(entry_id);
        record.add_field("ts", &event.ts.timestamp_micros().to_string());
        record.add_field("ts_rms", &event.ts_rms.to_string());
        record.add_field("cpu", &event.cpu.to_string());
        record.add_field("pid", &event.pid.to_string());
        record.add_field("tid", &event.tid.to_string());
        record.add_field("pname", &event.pname);
        record.add_field("ename", &event.ename);
        record.add_field("provider", &event.provider);
        record
    }

    /// A SteamVR compositor event: one opaque payload string, not
    /// normalized.
    pub fn steamvr(event: &RawEvent) -> Result<WdatRecord> {
        let mut record = WdatRecord::event_base(WdatEntryId::SteamVr, event);
        record.add_field("vrevent", required_index(event, 0)?);
        Ok(record)
    }

    /// A vsync interrupt: adapter, display and address arrive in mixed
    /// numeric representations and are normalized to decimal.
    pub fn vsync(event: &RawEvent) -> Result<WdatRecord> {
        let mut record = WdatRecord::event_base(WdatEntryId::Vsync, event);
        record.add_field("adapter", &normalize(required_index(event, 0)?)?);
        record.add_field("display", &normalize(required_index(event, 1)?)?);
        record.add_field("address", &normalize(required_index(event, 2)?)?);
        Ok(record)
    }

    /// A graphics-kernel queue packet. The common context/sequence fields
    /// are always present; the rest depend on the opcode, and on Start
    /// additionally on the packet-type discriminant. A Start packet without
    /// the DMA payloads is a legitimate non-present packet, not an error.
    pub fn queue_packet(event: &RawEvent) -> Result<WdatRecord> {
        let mut record = WdatRecord::event_base(WdatEntryId::QueuePacket, event);
        record.add_field("context", &normalize(required_named(event, QP_CONTEXT)?)?);
        record.add_field("sequence", &normalize(required_named(event, QP_SEQUENCE)?)?);

        match event.opcode {
            Opcode::Start => {
                if event.payload_named(QP_PACKET_TYPE) == Some(QP_PRESENT_PACKET_TYPE) {
                    record.add_field("size", &normalize(required_named(event, QP_DMA_SIZE)?)?);
                    record.add_field("handle", &normalize(required_named(event, QP_DMA_HANDLE)?)?);
                }
            }
            Opcode::Stop => {
                record.add_field("preempted", &normalize(required_named(event, QP_PREEMPTED)?)?);
                record.add_field("timedout", &normalize(required_named(event, QP_TIMED_OUT)?)?);
                record.add_field("packet_id", &normalize(required_named(event, QP_PACKET_ID)?)?);
            }
            Opcode::Info => {}
        }

        Ok(record)
    }

    /// The fallback dump for unclassified events and for the explore-mode
    /// provider: provider identity, opcode, and every payload value.
    pub fn inspection(event: &RawEvent) -> WdatRecord {
        let mut record = WdatRecord::new(WdatEntryId::Inspection);
        record.add_field("provider", &event.provider_id.to_string());
        record.add_field("opcode", &event.opcode.value().to_string());

        let mut data = String::new();
        for (index, payload) in event.payload.iter().enumerate() {
            if index > 0 {
                data.push(' ');
            }
            data.push_str(&payload.name);
            data.push('[');
            data.push_str(&index.to_string());
            data.push_str("]='");
            data.push_str(&payload.value);
            data.push('\'');
        }
        record.add_field("data", &data);
        record
    }
}

fn required_index<'e>(event: &'e RawEvent, index: usize) -> Result<&'e str> {
    event.payload_string(index).ok_or(Error::MissingPayload {
        name: format!("[{}]", index),
    })
}

fn required_named<'e>(event: &'e RawEvent, name: &str) -> Result<&'e str> {
    event.payload_named(name).ok_or_else(|| Error::MissingPayload {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_values_are_stable() {
        assert_eq!(WdatEntryId::Header.value(), 0);
        assert_eq!(WdatEntryId::Context.value(), 1);
        assert_eq!(WdatEntryId::SteamVr.value(), 2);
        assert_eq!(WdatEntryId::Vsync.value(), 3);
        assert_eq!(WdatEntryId::QueuePacket.value(), 4);
        assert_eq!(WdatEntryId::Inspection.value(), 9999);
    }

    #[test]
    fn test_header_record() {
        assert_eq!(WdatRecord::header().render(), "id=`0` version=`1`");
    }

    #[test]
    fn test_kind_field_is_always_first() {
        let line = WdatRecord::header().render();
        assert!(line.starts_with("id=`"));
    }
}
