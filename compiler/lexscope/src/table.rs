//! Scoped name table.
//!
//! Maps identifiers to the line of their innermost live declaration while a
//! semantic-analysis pass walks nested scopes.
//!
//! # Layout
//!
//! - `index`: identifier → live declarations, one per depth, ascending by
//!   depth (innermost last). Names with no live declaration are removed.
//! - `declared`: flat arena of the names declared in every open scope, in
//!   declaration order. Each entry matches exactly one live declaration.
//! - `frames`: start offset into `declared` for each open scope. Entries
//!   before the first frame were declared at depth 0.
//!
//! Exiting a scope drains its slice of `declared` and pops the matching
//! record from each name's shadow stack, so teardown costs
//! O(declarations in that scope) rather than a full table scan.

use lexscope_ir::{Name, StringInterner};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{ScopeError, TableConfig};

/// Line returned by [`ScopedSymbolTable::find`] for an undeclared identifier.
pub const NOT_FOUND: i32 = -1;

/// One live binding of an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// Interned identifier. Resolve with [`ScopedSymbolTable::identifier`].
    pub name: Name,
    /// Caller-supplied line number, stored unvalidated.
    pub line: i32,
    /// Number of scopes that were open when the declaration was made.
    pub depth: usize,
}

/// Live declarations of one identifier, innermost last.
///
/// Two inline slots cover the common case of one binding plus one shadow.
type ShadowStack = SmallVec<[Declaration; 2]>;

/// Symbol table with lexical scoping.
///
/// # Usage
///
/// ```
/// use lexscope::ScopedSymbolTable;
///
/// let mut table = ScopedSymbolTable::new();
/// table.enter_scope();
/// assert!(table.declare("x", 1));
/// table.enter_scope();
/// assert!(table.declare("x", 2));
/// assert_eq!(table.find("x"), 2);
/// assert!(table.exit_scope());
/// assert_eq!(table.find("x"), 1);
/// assert!(table.exit_scope());
/// assert_eq!(table.find("x"), -1);
/// assert!(!table.exit_scope());
/// ```
///
/// The `bool`/`i32` operations mirror the classic name-table contract.
/// The `try_*` and `resolve*` forms report why something failed and
/// distinguish a stored line of `-1` from a miss.
#[derive(Clone, Debug, Default)]
pub struct ScopedSymbolTable {
    interner: StringInterner,
    index: FxHashMap<Name, ShadowStack>,
    declared: Vec<Name>,
    frames: Vec<usize>,
    config: TableConfig,
}

impl ScopedSymbolTable {
    /// Create an empty table with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with an explicit configuration.
    pub fn with_config(config: TableConfig) -> Self {
        ScopedSymbolTable {
            interner: StringInterner::with_capacity(config.capacity),
            index: FxHashMap::with_capacity_and_hasher(config.capacity, Default::default()),
            declared: Vec::with_capacity(config.capacity),
            frames: Vec::new(),
            config,
        }
    }

    /// The configuration this table was built with.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of scopes currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of live declarations across all open scopes.
    #[inline]
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    /// Check if no declaration is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    /// Open a nested scope. Later declarations go into it.
    pub fn enter_scope(&mut self) {
        self.frames.push(self.declared.len());
        tracing::trace!(depth = self.depth(), "enter scope");
    }

    /// Close the innermost scope.
    ///
    /// Returns `false` and changes nothing if no scope is open.
    pub fn exit_scope(&mut self) -> bool {
        self.try_exit_scope().is_ok()
    }

    /// Close the innermost scope, returning how many declarations it held.
    ///
    /// Every declaration made in that scope is removed, which makes any
    /// outer declaration it shadowed visible again.
    pub fn try_exit_scope(&mut self) -> Result<usize, ScopeError> {
        let depth = self.depth();
        let Some(start) = self.frames.pop() else {
            tracing::debug!("exit scope rejected: no scope is open");
            return Err(ScopeError::NoOpenScope);
        };

        let evicted = self.declared.len() - start;
        for name in self.declared.drain(start..) {
            evict(&mut self.index, name, depth);
        }

        tracing::trace!(depth, evicted, "exit scope");
        Ok(evicted)
    }

    /// Declare `id` at the current depth.
    ///
    /// Returns `false` and changes nothing if `id` is empty, is already
    /// declared in the current scope, or no scope is open and the table
    /// rejects global declarations. Shadowing an outer declaration is fine.
    pub fn declare(&mut self, id: &str, line: i32) -> bool {
        self.try_declare(id, line).is_ok()
    }

    /// Declare `id` at the current depth, returning the new record.
    pub fn try_declare(&mut self, id: &str, line: i32) -> Result<Declaration, ScopeError> {
        if id.is_empty() {
            tracing::debug!(line, "declaration rejected: empty identifier");
            return Err(ScopeError::EmptyIdentifier);
        }

        let depth = self.depth();
        if depth == 0 && !self.config.allows_global_declarations() {
            tracing::debug!(id, line, "declaration rejected: no scope is open");
            return Err(ScopeError::NoOpenScope);
        }

        if let Some(previous) = self.resolve(id).filter(|d| d.depth == depth) {
            tracing::debug!(
                id,
                line,
                previous_line = previous.line,
                depth,
                "declaration rejected: already declared in this scope"
            );
            return Err(ScopeError::Redeclaration {
                name: id.to_owned(),
                previous_line: previous.line,
                depth,
            });
        }

        let name = self.interner.try_intern(id)?;
        let declaration = Declaration { name, line, depth };
        self.index.entry(name).or_default().push(declaration);
        self.declared.push(name);

        tracing::trace!(id, line, depth, "declare");
        Ok(declaration)
    }

    /// Line of the innermost live declaration of `id`, or [`NOT_FOUND`].
    pub fn find(&self, id: &str) -> i32 {
        self.resolve(id).map_or(NOT_FOUND, |d| d.line)
    }

    /// Innermost live declaration of `id`.
    pub fn resolve(&self, id: &str) -> Option<Declaration> {
        let name = self.interner.get(id)?;
        self.index.get(&name)?.last().copied()
    }

    /// Every live declaration of `id`, innermost first.
    pub fn resolve_all(&self, id: &str) -> impl Iterator<Item = Declaration> + '_ {
        self.interner
            .get(id)
            .and_then(|name| self.index.get(&name))
            .into_iter()
            .flat_map(|shadows| shadows.iter().rev().copied())
    }

    /// Check if declaring `id` now would be a redeclaration.
    pub fn is_declared_in_current_scope(&self, id: &str) -> bool {
        self.resolve(id).is_some_and(|d| d.depth == self.depth())
    }

    /// The outer declaration that declaring `id` now would shadow.
    pub fn shadowed_by(&self, id: &str) -> Option<Declaration> {
        self.resolve(id).filter(|d| d.depth < self.depth())
    }

    /// Text of an identifier held by a [`Declaration`] from this table.
    ///
    /// # Panics
    /// Panics if `name` did not come from this table (or predates `clear`).
    pub fn identifier(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Identifiers declared in the innermost scope, in declaration order.
    ///
    /// At depth 0 these are the global declarations.
    pub fn current_scope_names(&self) -> impl Iterator<Item = &str> + '_ {
        let start = self.frames.last().copied().unwrap_or(0);
        self.declared[start..]
            .iter()
            .map(|&name| self.interner.lookup(name))
    }

    /// Distinct identifiers with at least one live declaration.
    ///
    /// Order is unspecified.
    pub fn visible_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(|&name| self.interner.lookup(name))
    }

    /// Drop every scope and declaration, keeping the configuration.
    pub fn clear(&mut self) {
        self.interner.clear();
        self.index.clear();
        self.declared.clear();
        self.frames.clear();
        tracing::trace!("clear");
    }
}

/// Remove the declaration of `name` made at `depth`.
///
/// Outer declarations of the same name stay in place.
fn evict(index: &mut FxHashMap<Name, ShadowStack>, name: Name, depth: usize) {
    let Some(shadows) = index.get_mut(&name) else {
        return;
    };
    if let Some(pos) = shadows.iter().rposition(|d| d.depth == depth) {
        shadows.remove(pos);
    }
    if shadows.is_empty() {
        index.remove(&name);
    }
}
