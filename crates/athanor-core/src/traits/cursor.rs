use crate::error::Result;
use crate::types::Row;

/// Forward-only reader over backend result rows
///
/// Single-pass: once `next_row` returns `Ok(None)` the cursor is exhausted
/// and cannot serve another read.
///
/// Note: intentionally not `Iterator` because advancing can fail and
/// callers must handle the error.
pub trait RowCursor {
    /// Fetch the next row, or `None` at exhaustion
    fn next_row(&mut self) -> Result<Option<Row>>;
}
