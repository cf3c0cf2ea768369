use uuid::Uuid;

/// Stream identifier - 128-bit, caller-supplied, never generated here
pub type StreamId = Uuid;

/// Sequence number of an event within its stream (1-based)
///
/// When used as an upper bound, 0 means "no upper bound".
pub type Version = u64;
