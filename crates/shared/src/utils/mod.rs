mod clock;
mod logs;
mod metrics;

pub use self::clock::{Clock, DayWindow, DynClock, FixedClock, SystemClock};
pub use self::logs::init_logger;
pub use self::metrics::{Labels, Metrics, Operation, Status, encode_registry};
