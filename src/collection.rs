//! Broadcasting collection: fans projections and calls out across elements

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::{MergeError, MergeResult};
use crate::slot::Slot;
use crate::tree::{ToTree, Tree};

/// Ordered container that broadcasts member projection and invocation
/// across all its elements.
///
/// `Collection<T>` derefs to its inner `Vec<T>`, so the whole sequence API
/// (push, indexing, iteration, length) applies unchanged. Construction from
/// an existing vector or iterator preserves element order and takes
/// ownership of exactly those elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Consumes the collection and returns the underlying vector.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Keeps exactly the elements satisfying `predicate`, in original
    /// relative order.
    ///
    /// The receiver is left untouched; the survivors are cloned into the
    /// returned collection. Filtering twice is equivalent to filtering once
    /// with the conjunction of both predicates.
    #[instrument(level = "trace", skip_all)]
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Collection<T>
    where
        T: Clone,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Applies `f` to every element, preserving order and length.
    #[instrument(level = "trace", skip_all)]
    pub fn apply<U>(&self, f: impl Fn(&T) -> U) -> Collection<U> {
        self.items.iter().map(f).collect()
    }

    /// Projects a member across all elements.
    ///
    /// The result has the same length as the receiver; position `i` holds
    /// `Present(value)` when `selector` yields a value for element `i` and
    /// `Missing` otherwise. Projection never fails for individual elements,
    /// so heterogeneous collections broadcast without crashing. An empty
    /// collection projects to an empty collection.
    #[instrument(level = "trace", skip_all)]
    pub fn project<U>(&self, selector: impl Fn(&T) -> Option<U>) -> Collection<Slot<U>> {
        self.items
            .iter()
            .map(|item| Slot::from(selector(item)))
            .collect()
    }
}

impl<T: ToTree> Collection<T> {
    /// Merges every element's tree into one aggregate tree.
    ///
    /// Trees are merged left to right in element order into a fresh
    /// accumulator; on conflicting keys the first-seen value wins (see
    /// [`Tree::merge_from`]). An empty collection yields an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn collection_tree(&self) -> Tree<T::Leaf> {
        let mut merged = Tree::new();
        for item in &self.items {
            merged.merge_from(item.tree());
        }
        merged
    }
}

impl<T> Collection<Slot<T>> {
    /// Projects a further member through an earlier broadcast.
    ///
    /// `Present` slots are projected again; `Missing` and `Skipped` slots
    /// propagate unchanged, so elements that dropped out at an earlier step
    /// never produce a value here.
    #[instrument(level = "trace", skip_all)]
    pub fn then_project<U>(&self, selector: impl Fn(&T) -> Option<U>) -> Collection<Slot<U>> {
        self.items
            .iter()
            .map(|slot| slot.as_ref().and_project(|item| selector(item)))
            .collect()
    }

    /// Invokes every present value with `call`.
    ///
    /// `Missing` and `Skipped` slots come through as `Skipped`, so elements
    /// marked missing by a prior projection are not invoked. Panics raised
    /// by `call` itself propagate unmodified.
    #[instrument(level = "trace", skip_all)]
    pub fn invoke<R>(&self, call: impl Fn(&T) -> R) -> Collection<Slot<R>> {
        self.items
            .iter()
            .map(|slot| match slot {
                Slot::Present(value) => Slot::Present(call(value)),
                Slot::Missing | Slot::Skipped => Slot::Skipped,
            })
            .collect()
    }
}

impl<T: ToTree> Collection<Slot<T>> {
    /// Fallible tree merge over a projected collection.
    ///
    /// Every position must carry a value; positions that are `Missing` or
    /// `Skipped` lack the tree capability, and the merge fails before
    /// merging anything rather than silently skipping them.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MissingTrees`] naming every offending position
    /// when one or more slots carry no value.
    #[instrument(level = "debug", skip(self))]
    pub fn try_collection_tree(&self) -> MergeResult<Tree<T::Leaf>> {
        let absent: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_present())
            .map(|(index, _)| index)
            .collect();
        if !absent.is_empty() {
            return Err(MergeError::MissingTrees { positions: absent });
        }

        let mut merged = Tree::new();
        for slot in &self.items {
            if let Slot::Present(item) = slot {
                merged.merge_from(item.tree());
            }
        }
        Ok(merged)
    }
}

impl<T> Deref for Collection<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for Collection<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
