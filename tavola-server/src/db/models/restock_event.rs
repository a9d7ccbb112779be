//! Restock Event Model
//!
//! Append-only log of restock job mutations, one row per restocked item.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Automatic trigger source
pub const TRIGGER_AUTO: &str = "auto";

/// Restock event entity (补货记录)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockEvent {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Restocked inventory item reference
    #[serde(with = "serde_helpers::record_id")]
    pub item: RecordId,
    /// Item name snapshot at restock time
    pub item_name: String,
    pub previous_on_hand: i64,
    pub restocked_quantity: i64,
    pub new_on_hand: i64,
    /// Trigger source, e.g. "auto"
    pub triggered_by: String,
    #[serde(default)]
    pub created_at: i64,
}
