//! String interner for symbol names.
//!
//! Interning happens once per distinct symbol when the reader meets it;
//! from then on the symbol travels as a [`Name`]. Interned text is leaked
//! into `'static` storage so lookups can hand out plain `&str` without a
//! guard; the leak is bounded by the number of distinct symbols in the
//! program.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::Name;

/// Interner handle shared by the reader, evaluator, and printer.
pub type SharedInterner = Arc<StringInterner>;

struct InternTable {
    /// Map from string content to storage index.
    map: FxHashMap<&'static str, u32>,
    /// Storage; a [`Name`] indexes into this.
    strings: Vec<&'static str>,
}

/// String interner with interior mutability, so a shared reference can
/// intern.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        StringInterner {
            table: RwLock::new(InternTable {
                map: FxHashMap::default(),
                strings: Vec::with_capacity(64),
            }),
        }
    }

    /// Intern `s`, returning its [`Name`]. Interning the same content
    /// twice returns the same name.
    #[expect(
        clippy::expect_used,
        reason = "interner capacity is four billion distinct symbols"
    )]
    pub fn intern(&self, s: &str) -> Name {
        if let Some(&index) = self.table.read().map.get(s) {
            return Name::from_index(index);
        }
        let mut table = self.table.write();
        // Re-check under the write lock: another caller may have interned
        // between the read and the write.
        if let Some(&index) = table.map.get(s) {
            return Name::from_index(index);
        }
        let owned: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let index = u32::try_from(table.strings.len()).expect("interner overflow");
        table.strings.push(owned);
        table.map.insert(owned, index);
        Name::from_index(index)
    }

    /// Resolve a [`Name`] back to its text. Names from a different
    /// interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// True when nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_twice_returns_the_same_name() {
        let interner = StringInterner::new();
        let a = interner.intern("lambda");
        let b = interner.intern("lambda");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn distinct_strings_get_distinct_names() {
        let interner = StringInterner::new();
        let a = interner.intern("head");
        let b = interner.intern("tail");
        assert_ne!(a, b);
    }

    #[test]
    fn lookup_round_trips() {
        let interner = StringInterner::new();
        let name = interner.intern("make-adder");
        assert_eq!(interner.lookup(name), "make-adder");
    }

    #[test]
    fn foreign_names_resolve_to_empty() {
        let interner = StringInterner::new();
        assert_eq!(interner.lookup(Name::from_index(17)), "");
    }
}
