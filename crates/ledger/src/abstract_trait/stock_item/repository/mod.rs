mod command;
mod query;

pub use self::command::{DynStockItemCommandRepository, StockItemCommandRepositoryTrait};
pub use self::query::{DynStockItemQueryRepository, StockItemQueryRepositoryTrait};
