mod command;
mod query;

pub use self::command::SaleCommandRepository;
pub use self::query::SaleQueryRepository;

pub(crate) const SALE_COLUMNS: &str = "id, stock_item_name, quantity, unit_price_cents, sold_at";
