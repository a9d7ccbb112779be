//! Database Models

pub mod inventory_item;
pub mod restock_event;
pub mod serde_helpers;
pub mod service_status;
pub mod table_type;
pub mod user;

pub use inventory_item::{InventoryItem, InventoryItemCreate, InventoryItemUpdate};
pub use restock_event::RestockEvent;
pub use service_status::{ServiceStatus, ServiceStatusUpdate};
pub use table_type::{TableType, TableTypeCreate, TableTypeUpdate};
pub use user::User;
