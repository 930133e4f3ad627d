use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{domain::money::cents_to_price, model::stock_item::StockItem as StockItemModel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItemResponse {
    pub name: String,
    pub band: String,
    pub quantity: i64,
    pub price: Decimal,
    pub created_at: NaiveDateTime,
}

impl From<StockItemModel> for StockItemResponse {
    fn from(value: StockItemModel) -> Self {
        StockItemResponse {
            name: value.name,
            band: value.band,
            quantity: value.quantity,
            price: cents_to_price(value.price_cents),
            created_at: value.created_at,
        }
    }
}
