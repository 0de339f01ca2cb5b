use std::fmt;

/// Result type for wintrace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building and writing WDAT streams
#[derive(Debug)]
pub enum Error {
    /// Payload text that failed numeric normalization
    Payload { value: String },
    /// A schema-required payload value was absent from the event
    MissingPayload { name: String },
    /// A stream-writer operation was issued outside its valid stage
    StreamState { op: &'static str, stage: &'static str },
    /// IO operation failed
    Io(std::io::Error),
}

impl Error {
    /// Whether the error is scoped to a single event (skip it, keep the
    /// stream going) rather than fatal for the whole run.
    pub fn is_event_scoped(&self) -> bool {
        matches!(self, Error::Payload { .. } | Error::MissingPayload { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Payload { value } => {
                write!(f, "malformed numeric payload: {:?}", value)
            }
            Error::MissingPayload { name } => {
                write!(f, "missing payload value: {}", name)
            }
            Error::StreamState { op, stage } => {
                write!(f, "{} is not valid in the {} stage", op, stage)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
