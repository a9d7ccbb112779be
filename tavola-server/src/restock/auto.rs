//! Automatic Restocker
//!
//! 一个补货周期：扫描库存中到达补货线的条目，补到目标水位，
//! 并为每次补货追加一条 restock_event 记录。

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{JobOutcome, RestockRunner};
use crate::db::models::RestockEvent;
use crate::db::models::restock_event::TRIGGER_AUTO;
use crate::db::repository::{InventoryRepository, RestockEventRepository};
use crate::utils::AppError;
use crate::utils::time::now_millis;

/// 自动补货任务
#[derive(Clone)]
pub struct AutoRestocker {
    db: Surreal<Db>,
}

impl AutoRestocker {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestockRunner for AutoRestocker {
    async fn run_cycle(&self) -> Result<JobOutcome, AppError> {
        let inventory = InventoryRepository::new(self.db.clone());
        let events = RestockEventRepository::new(self.db.clone());

        let candidates = inventory.find_needing_restock().await?;

        let mut restocked: i64 = 0;
        let mut skipped: i64 = 0;
        let mut failed: i64 = 0;

        for item in candidates {
            let Some(id) = item.id.clone() else {
                skipped += 1;
                continue;
            };

            let quantity = item.par_level - item.on_hand;
            if quantity <= 0 {
                // Already at or above par, nothing to order
                skipped += 1;
                continue;
            }

            let now = now_millis();
            match inventory.apply_restock(&id, item.par_level, now).await {
                Ok(()) => {
                    let event = RestockEvent {
                        id: None,
                        item: id,
                        item_name: item.name.clone(),
                        previous_on_hand: item.on_hand,
                        restocked_quantity: quantity,
                        new_on_hand: item.par_level,
                        triggered_by: TRIGGER_AUTO.to_string(),
                        created_at: now,
                    };
                    if let Err(e) = events.append(event).await {
                        // 库存已更新，记录缺失只记日志不算失败
                        tracing::warn!(item = %item.name, error = %e, "Failed to append restock event");
                    }
                    restocked += 1;
                    tracing::info!(item = %item.name, quantity, "Inventory item restocked");
                }
                Err(e) => {
                    failed += 1;
                    tracing::error!(item = %item.name, error = %e, "Failed to restock inventory item");
                }
            }
        }

        let success = failed == 0;
        let message = if success {
            format!("Restocked {} item(s)", restocked)
        } else {
            format!("Restock completed with {} failure(s)", failed)
        };

        let outcome = if success {
            JobOutcome::ok(message)
        } else {
            JobOutcome::failed(message)
        };

        Ok(outcome
            .with_detail("restocked", restocked)
            .with_detail("skipped", skipped)
            .with_detail("failed", failed))
    }
}
