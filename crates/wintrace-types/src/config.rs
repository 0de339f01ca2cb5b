use uuid::Uuid;

use crate::provider::ProviderSelector;

/// Resolved configuration for one conversion run.
///
/// Owned and persisted by an external collaborator (the CLI's settings
/// layer); the conversion core only consumes the resolved values. Mode
/// toggles are explicit fields, never process-wide state; classification is
/// a pure function of (event, config).
#[derive(Debug, Clone, Default)]
pub struct WdatConfig {
    /// Emit an inspection record for every event no specific schema matched.
    /// Produces very large files; useful when searching for new providers.
    pub dump_all: bool,

    /// Explore mode: when set, only events from this provider produce
    /// records, dumped in full as inspection records.
    pub explore: Option<Uuid>,

    /// The provider-enablement selections the capture collaborator resolved
    /// for the session this run consumes.
    pub providers: Vec<ProviderSelector>,
}
