use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// SteamVR compositor provider.
pub const STEAMVR_GUID: Uuid = Uuid::from_u128(0x8f8f13b1_60eb_4b6a_a433_de86104115ac);

/// Graphics kernel provider (vsync interrupts, queue packets).
pub const DXGKRNL_GUID: Uuid = Uuid::from_u128(0x802ec45a_1e99_4b83_9920_87c98277ba9d);

/// Short symbolic id accepted in place of the graphics kernel GUID.
pub const DX_USER_ID: &str = "DX";

// Graphics-kernel task identifiers, from its event manifest. The provider
// multiplexes several event families under one identity; task id picks the
// family.
pub const DXGKRNL_TASK_VSYNC: u16 = 17;
pub const DXGKRNL_TASK_QUEUE_PACKET: u16 = 9;

/// Metadata for one provider the classifier knows how to handle.
#[derive(Debug, Clone)]
pub struct KnownProvider {
    pub name: &'static str,
    pub guid: Uuid,
    /// Short symbolic id accepted in enablement selections, if any.
    pub user_id: Option<&'static str>,
}

const PROVIDERS: &[KnownProvider] = &[
    KnownProvider {
        name: "SteamVR",
        guid: STEAMVR_GUID,
        user_id: None,
    },
    KnownProvider {
        name: "DxgKrnl",
        guid: DXGKRNL_GUID,
        user_id: Some(DX_USER_ID),
    },
];

pub fn known_providers() -> &'static [KnownProvider] {
    PROVIDERS
}

pub fn find_by_guid(guid: Uuid) -> Option<&'static KnownProvider> {
    PROVIDERS.iter().find(|p| p.guid == guid)
}

pub fn find_by_user_id(id: &str) -> Option<&'static KnownProvider> {
    PROVIDERS.iter().find(|p| p.user_id == Some(id))
}

/// One provider-enablement selection, as resolved by the capture
/// collaborator and passed through to a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderSelector {
    /// Raw 128-bit provider identity.
    Guid { guid: Uuid },
    /// Short symbolic id resolved via the known-provider table.
    UserId { id: String },
    /// The kernel logger, enabled by session flags rather than by GUID.
    Kernel,
}

impl ProviderSelector {
    /// Resolve the selector against the known-provider table.
    pub fn resolve(&self) -> Option<&'static KnownProvider> {
        match self {
            ProviderSelector::Guid { guid } => find_by_guid(*guid),
            ProviderSelector::UserId { id } => find_by_user_id(id),
            ProviderSelector::Kernel => None,
        }
    }
}

/// The default enablement set: every provider the record schemas cover.
pub fn default_selectors() -> Vec<ProviderSelector> {
    vec![
        ProviderSelector::Guid { guid: STEAMVR_GUID },
        ProviderSelector::Guid { guid: DXGKRNL_GUID },
        ProviderSelector::UserId {
            id: DX_USER_ID.to_string(),
        },
    ]
}
