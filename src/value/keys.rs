//! Key ordering of an [`Object`](super::Object).

use std::{collections::btree_map, collections::BTreeMap, iter::FusedIterator, slice};

use faststr::FastStr;

use super::var::Var;

/// The order in which an object visits its keys. Chosen once at construction.
///
/// In sorted mode the order is computed from the sorted value store, so nothing
/// is stored. In insertion mode every key of the store appears exactly once,
/// in the order it was first inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeyIndex {
    Sorted,
    Insertion(Vec<FastStr>),
}

impl KeyIndex {
    #[inline]
    pub(crate) fn new(preserve_insertion_order: bool) -> Self {
        if preserve_insertion_order {
            KeyIndex::Insertion(Vec::new())
        } else {
            KeyIndex::Sorted
        }
    }

    #[inline]
    pub(crate) fn preserves_insertion_order(&self) -> bool {
        matches!(self, KeyIndex::Insertion(_))
    }

    /// Records a key that was not in the store before.
    #[inline]
    pub(crate) fn inserted(&mut self, key: &FastStr) {
        if let KeyIndex::Insertion(keys) = self {
            keys.push(key.clone());
        }
    }

    /// Forgets a key that was removed from the store.
    pub(crate) fn removed(&mut self, key: &str) {
        if let KeyIndex::Insertion(keys) = self {
            if let Some(pos) = keys.iter().position(|k| k.as_str() == key) {
                keys.remove(pos);
            }
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        if let KeyIndex::Insertion(keys) = self {
            keys.clear();
        }
    }

    #[inline]
    pub(crate) fn iter<'a>(&'a self, values: &'a BTreeMap<FastStr, Var>) -> Iter<'a> {
        match self {
            KeyIndex::Sorted => Iter(IterInner::Sorted(values.iter())),
            KeyIndex::Insertion(keys) => Iter(IterInner::Insertion {
                keys: keys.iter(),
                values,
            }),
        }
    }
}

enum IterInner<'a> {
    Sorted(btree_map::Iter<'a, FastStr, Var>),
    Insertion {
        keys: slice::Iter<'a, FastStr>,
        values: &'a BTreeMap<FastStr, Var>,
    },
}

/// An iterator over the entries of an object, in the object's key order.
pub struct Iter<'a>(IterInner<'a>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Var);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            IterInner::Sorted(iter) => iter.next().map(|(k, v)| (k.as_str(), v)),
            IterInner::Insertion { keys, values } => {
                let values: &'a BTreeMap<FastStr, Var> = *values;
                keys.find_map(|k| values.get_key_value(k.as_str()))
                    .map(|(k, v)| (k.as_str(), v))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            IterInner::Sorted(iter) => iter.size_hint(),
            IterInner::Insertion { keys, .. } => keys.size_hint(),
        }
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}
