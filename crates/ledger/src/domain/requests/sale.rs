use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::requests::stock_item::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordSaleRequest {
    #[validate(custom(function = "not_blank"))]
    pub stock_item_name: String,

    #[validate(range(min = 1, message = "must be at least one unit"))]
    pub quantity: i64,
}

#[derive(Debug, Clone)]
pub struct CreateSaleRecord {
    pub stock_item_name: String,
    pub quantity: i64,
    pub sold_at: NaiveDateTime,
}
