//! Identifier storage shared by the lexscope crates.
//!
//! Identifiers are interned once and handled as 32-bit [`Name`]s afterwards,
//! so scope frames and declaration records stay `Copy` and cheap to compare.

mod interner;
mod name;

pub use interner::{InternError, StringInterner};
pub use name::Name;
