//! Inventory Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{InventoryItem, InventoryItemCreate, InventoryItemUpdate};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct InventoryRepository {
    base: BaseRepository,
}

/// par_level 必须不低于 reorder_level，否则补货会越补越低
fn check_levels(reorder_level: i64, par_level: i64) -> RepoResult<()> {
    if par_level < reorder_level {
        return Err(RepoError::Validation(format!(
            "par_level ({}) must not be below reorder_level ({})",
            par_level, reorder_level
        )));
    }
    Ok(())
}

impl InventoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active inventory items
    pub async fn find_all(&self) -> RepoResult<Vec<InventoryItem>> {
        let items: Vec<InventoryItem> = self
            .base
            .db()
            .query("SELECT * FROM inventory_item WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<InventoryItem>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let item: Option<InventoryItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    /// Find item by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<InventoryItem>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM inventory_item WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let items: Vec<InventoryItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    /// Find active items eligible for automatic restocking
    ///
    /// An item qualifies when its stock has fallen to or below the reorder level.
    pub async fn find_needing_restock(&self) -> RepoResult<Vec<InventoryItem>> {
        let items: Vec<InventoryItem> = self
            .base
            .db()
            .query(
                "SELECT * FROM inventory_item WHERE is_active = true \
                 AND auto_restock = true AND on_hand <= reorder_level ORDER BY name",
            )
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Create a new inventory item
    pub async fn create(&self, data: InventoryItemCreate) -> RepoResult<InventoryItem> {
        check_levels(data.reorder_level, data.par_level)?;

        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Inventory item '{}' already exists",
                data.name
            )));
        }

        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                "CREATE inventory_item SET name = $name, unit = $unit, on_hand = $on_hand, \
                 reorder_level = $reorder_level, par_level = $par_level, \
                 auto_restock = $auto_restock, is_active = true, \
                 created_at = $now, updated_at = $now",
            )
            .bind(("name", data.name))
            .bind(("unit", data.unit.unwrap_or_else(|| "unit".to_string())))
            .bind(("on_hand", data.on_hand.unwrap_or(0)))
            .bind(("reorder_level", data.reorder_level))
            .bind(("par_level", data.par_level))
            .bind(("auto_restock", data.auto_restock.unwrap_or(true)))
            .bind(("now", now))
            .await?;
        let created: Vec<InventoryItem> = result.take(0)?;

        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create inventory item".to_string()))
    }

    /// Update an inventory item
    pub async fn update(&self, id: &str, data: InventoryItemUpdate) -> RepoResult<InventoryItem> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {} not found", id)))?;

        // Check duplicate name if changing name
        if let Some(name) = &data.name
            && name != &existing.name
            && self.find_by_name(name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Inventory item '{}' already exists",
                name
            )));
        }

        let name = data.name.unwrap_or(existing.name);
        let unit = data.unit.unwrap_or(existing.unit);
        let on_hand = data.on_hand.unwrap_or(existing.on_hand);
        let reorder_level = data.reorder_level.unwrap_or(existing.reorder_level);
        let par_level = data.par_level.unwrap_or(existing.par_level);
        let auto_restock = data.auto_restock.unwrap_or(existing.auto_restock);
        let is_active = data.is_active.unwrap_or(existing.is_active);

        check_levels(reorder_level, par_level)?;

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, unit = $unit, on_hand = $on_hand, \
                 reorder_level = $reorder_level, par_level = $par_level, \
                 auto_restock = $auto_restock, is_active = $is_active, updated_at = $now",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("unit", unit))
            .bind(("on_hand", on_hand))
            .bind(("reorder_level", reorder_level))
            .bind(("par_level", par_level))
            .bind(("auto_restock", auto_restock))
            .bind(("is_active", is_active))
            .bind(("now", now_millis()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {} not found", id)))
    }

    /// Hard delete an inventory item
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Set an item's stock level after a restock
    pub async fn apply_restock(&self, item: &RecordId, new_on_hand: i64, now: i64) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET on_hand = $on_hand, updated_at = $now")
            .bind(("thing", item.clone()))
            .bind(("on_hand", new_on_hand))
            .bind(("now", now))
            .await?;
        Ok(())
    }
}
