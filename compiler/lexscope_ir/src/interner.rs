//! Single-threaded string interner for identifier storage.
//!
//! Each distinct identifier is stored once and mapped to a dense [`Name`].
//! The interner is append-only: names stay valid until the interner is
//! cleared or dropped.

use super::Name;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// More distinct strings than a `Name` can index.
    #[error("interner exceeded capacity: {count} strings, max is {max}", max = u32::MAX)]
    Overflow { count: usize },
}

/// String interner owning the text of every identifier it has seen.
///
/// # Example
///
/// ```
/// use lexscope_ir::StringInterner;
///
/// let mut interner = StringInterner::new();
/// let x = interner.try_intern("x").unwrap();
/// assert_eq!(interner.try_intern("x").unwrap(), x);
/// assert_eq!(interner.lookup(x), "x");
/// assert!(interner.get("y").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StringInterner {
    /// Map from string content to its name.
    map: FxHashMap<Box<str>, Name>,
    /// Storage for string contents, indexed by `Name::index`.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interner pre-sized for `capacity` distinct strings.
    pub fn with_capacity(capacity: usize) -> Self {
        StringInterner {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            strings: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its existing name or a fresh one.
    ///
    /// Fails without modifying the interner if no name is left.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        let name = Name::from_raw(raw);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        Ok(name)
    }

    /// Look up the name of an already-interned string without interning it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.index()]
    }

    /// Number of distinct strings interned.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if nothing has been interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Forget every interned string. Previously issued names become invalid.
    pub fn clear(&mut self) {
        self.map.clear();
        self.strings.clear();
    }
}
