pub mod classify;
pub mod encode;
pub mod normalize;
pub mod record;
pub mod writer;

pub use classify::classify;
pub use normalize::normalize;
pub use record::{WDAT_VERSION, WdatEntryId, WdatRecord};
pub use writer::{EventOutcome, WdatWriter};
