use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::money::cents_to_price,
    model::sale::{Sale as SaleModel, SaleWithItem},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleResponse {
    pub id: i64,
    pub stock_item_name: String,
    /// Band of the catalog row as it is now; `None` once that row is deleted.
    pub band: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub sold_at: NaiveDateTime,
}

impl SaleResponse {
    pub fn from_sale(sale: SaleModel, band: Option<String>) -> Self {
        SaleResponse {
            id: sale.id,
            stock_item_name: sale.stock_item_name,
            band,
            quantity: sale.quantity,
            unit_price: cents_to_price(sale.unit_price_cents),
            sold_at: sale.sold_at,
        }
    }

    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

impl From<SaleWithItem> for SaleResponse {
    fn from(value: SaleWithItem) -> Self {
        SaleResponse {
            id: value.id,
            stock_item_name: value.stock_item_name,
            band: value.band,
            quantity: value.quantity,
            unit_price: cents_to_price(value.unit_price_cents),
            sold_at: value.sold_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleReversal {
    pub sale: SaleResponse,
    /// False when the catalog entry was deleted before the reversal, so there
    /// was nothing to put the units back into.
    pub stock_restored: bool,
}
