//! Typo suggestions for undeclared identifiers.
//!
//! When `find` misses, the caller usually reports "undeclared identifier".
//! [`ScopedSymbolTable::find_similar`] supplies the "did you mean" part from
//! the names visible at that point.

use crate::ScopedSymbolTable;

impl ScopedSymbolTable {
    /// Find visible identifiers similar to `id`.
    ///
    /// Uses Levenshtein edit distance with a threshold that tightens for
    /// short names. Returns up to `max_results` names sorted by distance,
    /// then alphabetically. Never returns `id` itself.
    ///
    /// # Example
    ///
    /// ```
    /// use lexscope::ScopedSymbolTable;
    ///
    /// let mut table = ScopedSymbolTable::new();
    /// table.enter_scope();
    /// table.declare("length", 3);
    /// table.declare("width", 4);
    /// assert_eq!(table.find_similar("lenght", 3), vec!["length"]);
    /// ```
    pub fn find_similar(&self, id: &str, max_results: usize) -> Vec<&str> {
        if id.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let id_len = id.chars().count();
        let budget = edit_budget(id_len);

        let mut ranked = Vec::new();
        for candidate in self.visible_names() {
            if candidate == id {
                continue;
            }
            // Each edit changes the length by at most one.
            if id_len.abs_diff(candidate.chars().count()) > budget {
                continue;
            }
            let distance = edit_distance(id, candidate);
            if distance <= budget {
                ranked.push((distance, candidate));
            }
        }

        ranked.sort_unstable();
        ranked.truncate(max_results);
        ranked.into_iter().map(|(_, name)| name).collect()
    }
}

/// Largest edit distance still worth suggesting for a name of `len` chars.
///
/// Short names get a tight budget; otherwise nearly every one- or
/// two-letter identifier would match.
fn edit_budget(len: usize) -> usize {
    match len {
        0 => 0,
        1 | 2 => 1,
        3..=5 => 2,
        _ => 3,
    }
}

/// Levenshtein distance between `a` and `b`, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();

    // row[j] holds the distance between the prefix of `a` seen so far and b[..j].
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let replace = diagonal + usize::from(ca != cb);
            let remove = row[j + 1] + 1;
            let insert = row[j] + 1;
            diagonal = row[j + 1];
            row[j + 1] = replace.min(remove).min(insert);
        }
    }

    row[b.len()]
}
