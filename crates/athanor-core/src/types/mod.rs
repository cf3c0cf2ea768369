pub mod row;
pub mod stream;
pub mod value;

pub use row::Row;
pub use stream::{StreamId, Version};
pub use value::{format_timestamp, parse_timestamp, SqlValue};
