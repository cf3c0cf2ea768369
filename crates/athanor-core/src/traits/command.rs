use crate::types::SqlValue;

/// Mutable execution context for a not-yet-executed backend read
///
/// Implementations accumulate bound parameters and final query text. The
/// query builder only ever writes values through [`add_param`]; caller
/// values never appear in query text directly.
///
/// A command is exclusively owned by one in-flight read.
///
/// [`add_param`]: ReadCommand::add_param
pub trait ReadCommand {
    /// Bind a value, returning the placeholder to reference in query text
    /// (`:p1`, `:p2`, ...)
    fn add_param(&mut self, value: SqlValue) -> String;

    /// Append a fragment of final query text
    fn append_sql(&mut self, sql: &str);
}
