//! Table Type Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Table type entity (桌位类型)
///
/// Invariant: `name` is unique across the collection (unique index declared
/// at startup). Created and updated by authorized users; the updater
/// reference is recorded on every update. Table types are reference data
/// and are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableType {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Creating user reference
    #[serde(with = "serde_helpers::record_id")]
    pub created_by: RecordId,
    /// Last updating user reference
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub updated_by: Option<RecordId>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Create table type payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TableTypeCreate {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(max = 256))]
    pub description: Option<String>,
}

/// Update table type payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TableTypeUpdate {
    #[validate(length(min = 1, max = 64))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(max = 256))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
