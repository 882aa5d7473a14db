pub mod errors;
pub mod import;
pub mod model;
pub mod reader;
pub mod time;

pub use errors::ParserError;
pub use import::import_talk;
pub use model::{RawRecord, Talk, TalkField, HIDDEN_DAY};
pub use reader::read_records;
pub use time::{decode_time, format_duration, format_time, zero_pad, MINUTES_PER_DAY};
