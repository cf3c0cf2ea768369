pub mod command;
pub mod cursor;
pub mod selector;

pub use command::ReadCommand;
pub use cursor::RowCursor;
pub use selector::EventSelector;
