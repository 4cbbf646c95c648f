//! Errors reported by the fallible table operations.
//!
//! Every error leaves the table exactly as it was before the call.

use lexscope_ir::InternError;

/// Why a scope or declaration operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// `exit_scope` with nothing open, or `declare` at depth 0 when the
    /// table does not accept global declarations.
    #[error("no scope is open")]
    NoOpenScope,

    /// The identifier was the empty string.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// The identifier already has a live declaration at the current depth.
    #[error("`{name}` is already declared in this scope (previous declaration on line {previous_line})")]
    Redeclaration {
        name: String,
        previous_line: i32,
        depth: usize,
    },

    /// The identifier could not be stored.
    #[error(transparent)]
    Intern(#[from] InternError),
}
