use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wintrace_types::{Error, RawEvent, Result, SessionContext, WdatConfig};

use crate::classify::classify;
use crate::record::{WdatEntryId, WdatRecord};

/// What happened to one delivered event.
#[derive(Debug)]
pub enum EventOutcome {
    /// Classified and appended as exactly one line.
    Written(WdatEntryId),
    /// No schema matched; nothing appended. The common case.
    Rejected,
    /// Event-scoped payload failure; the event was skipped and the stream
    /// stays usable. The caller surfaces the diagnostic.
    Skipped(Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Created,
    HeaderWritten,
    ContextWritten,
}

impl Stage {
    fn name(self) -> &'static str {
        match self {
            Stage::Created => "created",
            Stage::HeaderWritten => "header-written",
            Stage::ContextWritten => "context-written",
        }
    }
}

/// Append-only WDAT stream writer.
///
/// Owns the output handle exclusively for the duration of one run and is
/// driven strictly sequentially: header once, context once, then events one
/// at a time in arrival order. Each accepted event appends exactly one line;
/// durability is only guaranteed at [`flush`](WdatWriter::flush) and
/// [`close`](WdatWriter::close) boundaries. `close` consumes the writer; on
/// an IO failure mid-run, whatever was flushed before the error stays on
/// disk for inspection.
#[derive(Debug)]
pub struct WdatWriter {
    out: BufWriter<File>,
    config: WdatConfig,
    stage: Stage,
}

impl WdatWriter {
    /// Truncate-create the output file. Nothing is written yet.
    pub fn create(path: &Path, config: WdatConfig) -> Result<WdatWriter> {
        let file = File::create(path)?;
        Ok(WdatWriter {
            out: BufWriter::new(file),
            config,
            stage: Stage::Created,
        })
    }

    /// Emit the header record. Must be the first write.
    pub fn write_header(&mut self) -> Result<()> {
        self.expect_stage(Stage::Created, "write_header")?;
        self.append(WdatRecord::header())?;
        self.stage = Stage::HeaderWritten;
        Ok(())
    }

    /// Emit the context record. Must directly follow the header.
    pub fn write_context(&mut self, ctx: &SessionContext) -> Result<()> {
        self.expect_stage(Stage::HeaderWritten, "write_context")?;
        self.append(WdatRecord::context(ctx))?;
        self.stage = Stage::ContextWritten;
        Ok(())
    }

    /// Classify one event and append its record, if any.
    ///
    /// Event-scoped payload failures are reported in the outcome, not as
    /// `Err`; an `Err` from this method is an IO or sequencing failure and
    /// ends the run.
    pub fn write_event(&mut self, event: &RawEvent) -> Result<EventOutcome> {
        self.expect_stage(Stage::ContextWritten, "write_event")?;

        match classify(event, &self.config) {
            Ok(Some(record)) => {
                let entry_id = record.entry_id();
                self.append(record)?;
                Ok(EventOutcome::Written(entry_id))
            }
            Ok(None) => Ok(EventOutcome::Rejected),
            Err(err) if err.is_event_scoped() => Ok(EventOutcome::Skipped(err)),
            Err(err) => Err(err),
        }
    }

    /// Push buffered lines to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Flush and release the output handle.
    pub fn close(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn append(&mut self, record: WdatRecord) -> Result<()> {
        writeln!(self.out, "{}", record.render())?;
        Ok(())
    }

    fn expect_stage(&self, want: Stage, op: &'static str) -> Result<()> {
        if self.stage != want {
            return Err(Error::StreamState {
                op,
                stage: self.stage.name(),
            });
        }
        Ok(())
    }
}
