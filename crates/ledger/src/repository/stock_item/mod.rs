mod command;
mod query;

pub use self::command::StockItemCommandRepository;
pub use self::query::StockItemQueryRepository;

use crate::model::stock_item::StockItem as StockItemModel;
use shared::errors::RepositoryError;
use sqlx::SqliteConnection;
use tracing::warn;

pub(crate) const STOCK_ITEM_COLUMNS: &str = "name, band, quantity, price_cents, created_at";

pub(crate) async fn fetch_stock_item(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<StockItemModel>, RepositoryError> {
    let item = sqlx::query_as::<_, StockItemModel>(&format!(
        "SELECT {STOCK_ITEM_COLUMNS} FROM stock_items WHERE name = ?"
    ))
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(item)
}

/// Applies `quantity = quantity - delta` on an open connection, refusing any
/// change that would leave the row negative. Callers own the transaction.
pub(crate) async fn apply_quantity_delta(
    conn: &mut SqliteConnection,
    name: &str,
    delta: i64,
) -> Result<StockItemModel, RepositoryError> {
    let current = fetch_stock_item(conn, name)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("stock item '{name}'")))?;

    let new_quantity = match current.quantity.checked_sub(delta) {
        Some(quantity) if quantity >= 0 => quantity,
        _ => {
            warn!(
                "🚫 Refusing to move '{}' from {} by {}",
                name, current.quantity, delta
            );
            return Err(RepositoryError::InvariantViolation {
                name: name.to_string(),
                current: current.quantity,
                delta,
            });
        }
    };

    let updated = sqlx::query_as::<_, StockItemModel>(&format!(
        "UPDATE stock_items SET quantity = ? WHERE name = ? RETURNING {STOCK_ITEM_COLUMNS}"
    ))
    .bind(new_quantity)
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(updated)
}
