//! Table configuration.

/// What `declare` does when no scope has been entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GlobalScopePolicy {
    /// Depth 0 is a valid outermost scope. Declarations made there are
    /// never evicted by `exit_scope`; they live until `clear` or drop.
    #[default]
    Implicit,
    /// Every declaration must sit inside at least one entered scope.
    /// Declaring at depth 0 fails with `ScopeError::NoOpenScope`.
    Reject,
}

/// Configuration for a [`ScopedSymbolTable`](crate::ScopedSymbolTable).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TableConfig {
    /// Handling of declarations made before any scope is entered.
    pub global_scope: GlobalScopePolicy,

    /// Expected number of distinct identifiers (0 = no pre-sizing).
    /// Only a sizing hint; the table grows past it as needed.
    pub capacity: usize,
}

impl TableConfig {
    /// Config that requires every declaration to be inside an entered scope.
    pub fn strict() -> Self {
        TableConfig {
            global_scope: GlobalScopePolicy::Reject,
            ..Default::default()
        }
    }

    /// Create a new config with the specified capacity hint.
    #[must_use]
    pub fn with_capacity(self, capacity: usize) -> Self {
        TableConfig { capacity, ..self }
    }

    /// Check if declarations at depth 0 are accepted.
    #[inline]
    pub fn allows_global_declarations(&self) -> bool {
        self.global_scope == GlobalScopePolicy::Implicit
    }
}
