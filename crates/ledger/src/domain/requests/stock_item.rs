use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::money::price_to_cents;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertStockItemRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub band: String,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity: i64,

    #[validate(custom(function = "valid_price"))]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdjustStockRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    /// Units to take out of stock; negative puts units back.
    pub delta: i64,
}

/// What the repository stores for an upsert, once the request has been validated.
#[derive(Debug, Clone)]
pub struct UpsertStockItemRecord {
    pub name: String,
    pub band: String,
    pub quantity: i64,
    pub price_cents: i64,
    pub created_at: chrono::NaiveDateTime,
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn valid_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() || price.is_zero() {
        return Err(ValidationError::new("price").with_message("must be greater than zero".into()));
    }
    if price_to_cents(*price).is_none() {
        return Err(
            ValidationError::new("price").with_message("must be a whole number of cents".into()),
        );
    }
    Ok(())
}
