pub mod ledger;
pub mod sale;
pub mod stock_item;
