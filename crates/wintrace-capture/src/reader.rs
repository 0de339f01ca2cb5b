use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use wintrace_types::{RawEvent, SessionContext};

use crate::schema::{CaptureEvent, CaptureSession};

/// Streams one capture dump: session context up front, then events one at a
/// time, in the order the capture agent recorded them.
///
/// A line that fails to parse is a capture defect, reported with its line
/// number; arrival order is preserved as-is, never re-sorted.
#[derive(Debug)]
pub struct CaptureReader {
    lines: Lines<BufReader<File>>,
    context: SessionContext,
    path: PathBuf,
    line_no: usize,
}

impl CaptureReader {
    /// Open a dump and parse its session line.
    pub fn open(path: &Path) -> Result<CaptureReader> {
        let file = File::open(path)
            .with_context(|| format!("failed to open capture dump {}", path.display()))?;
        let mut lines = BufReader::new(file).lines();

        let first = match lines.next() {
            Some(line) => {
                line.with_context(|| format!("failed to read {}", path.display()))?
            }
            None => bail!("capture dump {} is empty", path.display()),
        };
        let session: CaptureSession = serde_json::from_str(&first)
            .with_context(|| format!("{}:1: malformed session line", path.display()))?;

        Ok(CaptureReader {
            lines,
            context: session.into_context(path),
            path: path.to_path_buf(),
            line_no: 1,
        })
    }

    /// The capture-wide metadata from the session line.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    fn parse_event(&self, line: &str) -> Result<RawEvent> {
        let event: CaptureEvent = serde_json::from_str(line).with_context(|| {
            format!("{}:{}: malformed event line", self.path.display(), self.line_no)
        })?;
        Ok(event.into_raw_event())
    }
}

impl Iterator for CaptureReader {
    type Item = Result<RawEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => {
                    return Some(Err(err).with_context(|| {
                        format!("failed to read {}", self.path.display())
                    }));
                }
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_event(&line));
        }
    }
}
