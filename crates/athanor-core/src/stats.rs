/// Read-side statistics collected during materialization
///
/// Passed as `Option<&mut ReadStatistics>`; the decoding strategy updates
/// it per decoded row. Callers that don't care pass `None`.
#[derive(Debug, Clone, Default)]
pub struct ReadStatistics {
    /// Rows decoded from the cursor
    pub rows_read: u64,
}

impl ReadStatistics {
    pub fn new() -> Self {
        Self::default()
    }
}
