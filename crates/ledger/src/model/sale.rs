use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i64,
    pub stock_item_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub sold_at: NaiveDateTime,
}

/// A sale joined with the catalog row it names, if that row still exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SaleWithItem {
    pub id: i64,
    pub stock_item_name: String,
    pub band: Option<String>,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub sold_at: NaiveDateTime,
}
