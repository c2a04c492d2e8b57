use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events emitted as site data changes, consumed by SSE listeners
/// (live editor previews refresh on these).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SiteEvent {
    Welcome,
    SectionsMigrated(MigrationEvent),
    Reconnect,
}

/// Published after a legacy document is migrated and the result persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationEvent {
    pub site_id: String,
    pub subdomain: String,
    pub section_count: usize,
    pub timestamp: DateTime<Utc>,
}
