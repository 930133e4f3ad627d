pub mod sale;
pub mod stock_item;
pub mod totals;
