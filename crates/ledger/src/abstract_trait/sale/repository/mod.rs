mod command;
mod query;

pub use self::command::{DynSaleCommandRepository, SaleCommandRepositoryTrait};
pub use self::query::{DynSaleQueryRepository, SaleQueryRepositoryTrait};
