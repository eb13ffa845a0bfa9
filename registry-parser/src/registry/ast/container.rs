//! Ordered child lists
//!
//! Children are append-only and kept in insertion order, which is declaration order in
//! the registry source. The index of the most recently appended child is stored rather
//! than derived, so the driver can keep mutating "the item it just added" without holding
//! a borrow across tokens.

use serde::{Serialize, Serializer};
use std::ops::Index;
use std::slice::Iter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Children<T> {
    items: Vec<T>,
    last: Option<usize>,
}

impl<T> Children<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            last: None,
        }
    }

    /// Append a child and return it for further mutation.
    pub fn push(&mut self, item: T) -> &mut T {
        let index = self.items.len();
        self.items.push(item);
        self.last = Some(index);
        &mut self.items[index]
    }

    /// The most recently appended child.
    pub fn last(&self) -> Option<&T> {
        self.last.map(|i| &self.items[i])
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        match self.last {
            Some(i) => Some(&mut self.items[i]),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Children<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Children<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Children<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut children = Children::new();
        for item in iter {
            children.push(item);
        }
        children
    }
}

// Serialized as a plain sequence; the last-item index is a parse-time detail.
impl<T: Serialize> Serialize for Children<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
