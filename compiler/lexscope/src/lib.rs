//! Scoped name table for compiler semantic analysis.
//!
//! A [`ScopedSymbolTable`] tracks which identifiers are declared in each
//! open lexical scope. A driver walking a parse tree calls:
//!
//! - [`enter_scope`](ScopedSymbolTable::enter_scope) on entering a block
//! - [`declare`](ScopedSymbolTable::declare) for each declaration, which
//!   fails on a redeclaration in the same scope
//! - [`find`](ScopedSymbolTable::find) for each use, which yields the line
//!   of the innermost visible declaration
//! - [`exit_scope`](ScopedSymbolTable::exit_scope) on leaving the block
//!
//! Turning failures into user-facing diagnostics is left to the caller.
//! The `try_*` operations return a [`ScopeError`] carrying what is needed
//! for that, and [`find_similar`](ScopedSymbolTable::find_similar) offers
//! typo suggestions for undeclared identifiers.
//!
//! # Threading
//!
//! The table is a plain single-threaded value with no interior locking.
//! Use one table per compilation unit, or wrap it in a mutex.

mod config;
mod error;
mod suggest;
mod table;

pub use config::{GlobalScopePolicy, TableConfig};
pub use error::ScopeError;
pub use lexscope_ir::{InternError, Name};
pub use suggest::edit_distance;
pub use table::{Declaration, ScopedSymbolTable, NOT_FOUND};
