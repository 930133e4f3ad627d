use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockItem {
    pub name: String,
    pub band: String,
    pub quantity: i64,
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
}
