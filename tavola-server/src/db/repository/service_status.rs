//! Service Status Repository (Singleton)

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{ServiceStatus, ServiceStatusUpdate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "service_status";
const SINGLETON_KEY: &str = "current";

#[derive(Clone)]
pub struct ServiceStatusRepository {
    base: BaseRepository,
}

impl ServiceStatusRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Read the singleton record
    pub async fn get(&self) -> RepoResult<Option<ServiceStatus>> {
        let status: Option<ServiceStatus> =
            self.base.db().select((TABLE, SINGLETON_KEY)).await?;
        Ok(status)
    }

    /// Read the singleton record, creating it with all toggles enabled if absent
    pub async fn get_or_create(&self) -> RepoResult<ServiceStatus> {
        if let Some(status) = self.get().await? {
            return Ok(status);
        }

        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                "CREATE service_status:current SET dine_in = true, takeaway = true, \
                 delivery = true, qr_ordering = true, takeaway_customer_end = true, \
                 delivery_customer_end = true, zomato = true, updated_at = $now",
            )
            .bind(("now", now))
            .await?;
        let created: Vec<ServiceStatus> = result.take(0)?;

        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create service status".to_string()))
    }

    /// Partially update the toggles
    pub async fn update(&self, data: ServiceStatusUpdate) -> RepoResult<ServiceStatus> {
        let existing = self.get_or_create().await?;

        let dine_in = data.dine_in.unwrap_or(existing.dine_in);
        let takeaway = data.takeaway.unwrap_or(existing.takeaway);
        let delivery = data.delivery.unwrap_or(existing.delivery);
        let qr_ordering = data.qr_ordering.unwrap_or(existing.qr_ordering);
        let takeaway_customer_end = data
            .takeaway_customer_end
            .unwrap_or(existing.takeaway_customer_end);
        let delivery_customer_end = data
            .delivery_customer_end
            .unwrap_or(existing.delivery_customer_end);
        let zomato = data.zomato.unwrap_or(existing.zomato);

        self.base
            .db()
            .query(
                "UPDATE service_status:current SET dine_in = $dine_in, takeaway = $takeaway, \
                 delivery = $delivery, qr_ordering = $qr_ordering, \
                 takeaway_customer_end = $takeaway_customer_end, \
                 delivery_customer_end = $delivery_customer_end, zomato = $zomato, \
                 updated_at = $now",
            )
            .bind(("dine_in", dine_in))
            .bind(("takeaway", takeaway))
            .bind(("delivery", delivery))
            .bind(("qr_ordering", qr_ordering))
            .bind(("takeaway_customer_end", takeaway_customer_end))
            .bind(("delivery_customer_end", delivery_customer_end))
            .bind(("zomato", zomato))
            .bind(("now", now_millis()))
            .await?;

        self.get()
            .await?
            .ok_or_else(|| RepoError::Database("Failed to read service status after update".to_string()))
    }
}
