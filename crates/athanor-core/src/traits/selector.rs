use crate::cancel::CancelToken;
use crate::error::Result;
use crate::identity::IdentityMap;
use crate::stats::ReadStatistics;
use crate::traits::cursor::RowCursor;
use async_trait::async_trait;

/// Decoding strategy: owns the base selection clause and row-to-event
/// mapping
///
/// The query builder treats the clause as opaque text (it may already
/// encode table name, selected columns, or joins) and delegates all row
/// decoding here. Selectors are read-mostly collaborators that may be
/// shared across many reads.
///
/// `?Send` because backend cursors borrow a connection that is not `Sync`;
/// reads run to completion on the task that started them.
#[async_trait(?Send)]
pub trait EventSelector {
    /// Decoded record type produced by this strategy
    type Record;

    /// Base selection clause text
    ///
    /// `extra_filter` is appended opaquely by strategies that support it;
    /// the stream read query always passes `None`.
    fn select_clause(&self, extra_filter: Option<&str>) -> String;

    /// Decode every remaining cursor row, blocking until exhaustion.
    /// Records are returned in cursor order.
    fn read(
        &self,
        cursor: &mut dyn RowCursor,
        identity: &mut IdentityMap,
        stats: Option<&mut ReadStatistics>,
    ) -> Result<Vec<Self::Record>>;

    /// Suspension-capable decode of every remaining cursor row
    ///
    /// Must observe `cancel` between row fetches at minimum; once observed,
    /// no further rows are fetched and the read resolves to
    /// [`AthanorError::Cancelled`], never a truncated success.
    ///
    /// [`AthanorError::Cancelled`]: crate::error::AthanorError::Cancelled
    async fn read_async(
        &self,
        cursor: &mut dyn RowCursor,
        identity: &mut IdentityMap,
        stats: Option<&mut ReadStatistics>,
        cancel: &CancelToken,
    ) -> Result<Vec<Self::Record>>;
}
