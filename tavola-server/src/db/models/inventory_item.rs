//! Inventory Item Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Inventory item entity (库存项)
///
/// Quantities are integer counts in the item's declared `unit`.
/// Invariant: `par_level >= reorder_level` (checked by the repository).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    /// Counting unit, e.g. "kg", "bottle", "tray"
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Current stock level
    #[serde(default)]
    pub on_hand: i64,
    /// Restock is triggered when `on_hand` falls to or below this level
    #[serde(default)]
    pub reorder_level: i64,
    /// Restock tops the item back up to this level
    #[serde(default)]
    pub par_level: i64,
    /// Whether the automatic restock job may touch this item
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub auto_restock: bool,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_unit() -> String {
    "unit".to_string()
}

fn default_true() -> bool {
    true
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InventoryItemCreate {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(min = 1, max = 16))]
    pub unit: Option<String>,
    pub on_hand: Option<i64>,
    pub reorder_level: i64,
    pub par_level: i64,
    pub auto_restock: Option<bool>,
}

/// Update inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InventoryItemUpdate {
    #[validate(length(min = 1, max = 64))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 16))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_hand: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub par_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_restock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
