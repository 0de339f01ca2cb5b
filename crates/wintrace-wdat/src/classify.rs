use wintrace_types::{RawEvent, Result, WdatConfig};
use wintrace_types::provider::{
    DXGKRNL_GUID, DXGKRNL_TASK_QUEUE_PACKET, DXGKRNL_TASK_VSYNC, STEAMVR_GUID,
};

use crate::record::WdatRecord;

/// Map one raw event to at most one record.
///
/// Pure function of (event, config): same inputs, same selection. Decision
/// order:
///
/// 1. Explore mode accepts only the configured test provider, dumped as an
///    inspection record; everything else is rejected while it is active.
/// 2. Provider identity picks a schema; the graphics kernel additionally
///    dispatches on task id, and the selected schema on opcode.
/// 3. Unmatched events become inspection records when dump-all is enabled.
/// 4. Otherwise the event is rejected (`Ok(None)`). Rejection is the common
///    case and a normal outcome, never an error.
///
/// An `Err` here is an event-scoped payload failure raised while building
/// the selected record; the caller skips the event and keeps the stream.
pub fn classify(event: &RawEvent, config: &WdatConfig) -> Result<Option<WdatRecord>> {
    if let Some(test_provider) = config.explore {
        if event.provider_id == test_provider {
            return Ok(Some(WdatRecord::inspection(event)));
        }
        return Ok(None);
    }

    if event.provider_id == STEAMVR_GUID {
        return WdatRecord::steamvr(event).map(Some);
    }

    if event.provider_id == DXGKRNL_GUID {
        match event.task {
            DXGKRNL_TASK_VSYNC => return WdatRecord::vsync(event).map(Some),
            DXGKRNL_TASK_QUEUE_PACKET => return WdatRecord::queue_packet(event).map(Some),
            _ => {}
        }
    }

    if config.dump_all {
        return Ok(Some(WdatRecord::inspection(event)));
    }

    Ok(None)
}
