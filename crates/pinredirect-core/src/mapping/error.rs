//! Table validation errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// An entry with an empty `match_prefix` would rewrite every input.
    #[error("mapping #{index} has an empty match_prefix")]
    EmptyPrefix { index: usize },
}
