//! Restock Event Repository (append-only)

use super::{BaseRepository, RepoResult};
use crate::db::models::RestockEvent;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct RestockEventRepository {
    base: BaseRepository,
}

impl RestockEventRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Append a restock event
    pub async fn append(&self, event: RestockEvent) -> RepoResult<()> {
        self.base
            .db()
            .query(
                "CREATE restock_event SET item = $item, item_name = $item_name, \
                 previous_on_hand = $previous_on_hand, restocked_quantity = $restocked_quantity, \
                 new_on_hand = $new_on_hand, triggered_by = $triggered_by, created_at = $created_at",
            )
            .bind(("item", event.item))
            .bind(("item_name", event.item_name))
            .bind(("previous_on_hand", event.previous_on_hand))
            .bind(("restocked_quantity", event.restocked_quantity))
            .bind(("new_on_hand", event.new_on_hand))
            .bind(("triggered_by", event.triggered_by))
            .bind(("created_at", event.created_at))
            .await?;
        Ok(())
    }

    /// Most recent events first
    pub async fn find_recent(&self, limit: i64) -> RepoResult<Vec<RestockEvent>> {
        let events: Vec<RestockEvent> = self
            .base
            .db()
            .query("SELECT * FROM restock_event ORDER BY created_at DESC LIMIT $limit")
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(events)
    }
}
