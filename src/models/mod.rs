pub mod break_interval;
pub mod break_state;
pub mod daily_record;
pub mod remaining;
pub mod stored_value;

pub use daily_record::Millis;
