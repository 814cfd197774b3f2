use std::collections::btree_map::{self, BTreeMap};

/// The value table, ordered by variable name. Every name is written once.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Values {
    table: BTreeMap<String, u64>,
}

impl Values {
    pub fn new() -> Values {
        Values::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: u64) {
        let previous = self.table.insert(name.to_owned(), value);
        debug_assert!(previous.is_none(), "`{name}` resolved twice");
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.table.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate in ascending name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.table.iter()
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Values {
    type Item = (String, u64);
    type IntoIter = btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}
