//! Service Status Model (Singleton)

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Service status entity (营业功能开关)
///
/// Singleton record of boolean feature toggles, all enabled by default.
/// Created lazily by startup initialization, mutated only by administrators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub dine_in: bool,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub takeaway: bool,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub delivery: bool,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub qr_ordering: bool,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub takeaway_customer_end: bool,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub delivery_customer_end: bool,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub zomato: bool,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

/// Partial update payload for service status toggles
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceStatusUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dine_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaway: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_ordering: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaway_customer_end: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_customer_end: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zomato: Option<bool>,
}
