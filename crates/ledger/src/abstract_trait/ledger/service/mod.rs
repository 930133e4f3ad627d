mod command;
mod query;

pub use self::command::{DynLedgerCommandService, LedgerCommandServiceTrait};
pub use self::query::{DynLedgerQueryService, LedgerQueryServiceTrait};
