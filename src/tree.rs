//! Nested key/value trees, the tree capability, and first-write-wins merging

use std::collections::btree_map::{self, BTreeMap, Entry};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Value stored under a tree key: either a terminal leaf or a subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeValue<V> {
    /// Nested subtree.
    Branch(Tree<V>),
    /// Terminal value.
    Leaf(V),
}

/// Hierarchical key/value mapping, analogous to a JSON object.
///
/// Keys are strings; values are leaves or nested trees. Serializes
/// transparently as the underlying mapping, so a merged tree round-trips
/// as a plain object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree<V> {
    entries: BTreeMap<String, TreeValue<V>>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Tree<V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of direct entries (not a recursive count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts a leaf under `key`, replacing whatever was there.
    pub fn insert_leaf(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), TreeValue::Leaf(value));
    }

    /// Inserts a subtree under `key`, replacing whatever was there.
    pub fn insert_branch(&mut self, key: impl Into<String>, branch: Tree<V>) {
        self.entries.insert(key.into(), TreeValue::Branch(branch));
    }

    pub fn get(&self, key: &str) -> Option<&TreeValue<V>> {
        self.entries.get(key)
    }

    /// Leaf value under `key`, if the entry exists and is a leaf.
    pub fn leaf(&self, key: &str) -> Option<&V> {
        match self.entries.get(key) {
            Some(TreeValue::Leaf(value)) => Some(value),
            _ => None,
        }
    }

    /// Subtree under `key`, if the entry exists and is a branch.
    pub fn branch(&self, key: &str) -> Option<&Tree<V>> {
        match self.entries.get(key) {
            Some(TreeValue::Branch(branch)) => Some(branch),
            _ => None,
        }
    }

    /// Iterates direct entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, TreeValue<V>> {
        self.entries.iter()
    }

    /// Deep-merges `other` into this tree; the first-seen value wins.
    ///
    /// Keys absent from this tree are inserted as-is. When a key is present
    /// on both sides and both values are branches, the merge recurses
    /// key-by-key. In every other conflict (leaf/leaf, leaf/branch,
    /// branch/leaf) the existing value stays and the incoming one is
    /// dropped; merges never overwrite.
    #[instrument(level = "trace", skip_all)]
    pub fn merge_from(&mut self, other: Tree<V>) {
        for (key, incoming) in other.entries {
            match self.entries.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
                Entry::Occupied(mut slot) => {
                    if let (TreeValue::Branch(existing), TreeValue::Branch(branch)) =
                        (slot.get_mut(), incoming)
                    {
                        existing.merge_from(branch);
                    }
                }
            }
        }
    }
}

impl<V: fmt::Display> Tree<V> {
    /// Renders the tree for terminal display, rooted at `label`.
    ///
    /// Branches are labeled by their key; leaves render as `key: value`.
    pub fn render(&self, label: &str) -> termtree::Tree<String> {
        let leaves: Vec<_> = self
            .entries
            .iter()
            .map(|(key, value)| match value {
                TreeValue::Leaf(leaf) => termtree::Tree::new(format!("{}: {}", key, leaf)),
                TreeValue::Branch(branch) => branch.render(key),
            })
            .collect();
        termtree::Tree::new(label.to_string()).with_leaves(leaves)
    }
}

impl<V: fmt::Display> fmt::Display for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render("."))
    }
}

/// Capability to render a value as a hierarchical tree.
///
/// Element types implementing this can have their collections merged with
/// `Collection::collection_tree`. Heterogeneous collections hold
/// `Box<dyn ToTree<Leaf = V>>` elements.
pub trait ToTree {
    /// Leaf type of the produced tree.
    type Leaf;

    /// Builds this value's tree representation.
    fn tree(&self) -> Tree<Self::Leaf>;
}

impl<T: ToTree + ?Sized> ToTree for &T {
    type Leaf = T::Leaf;

    fn tree(&self) -> Tree<Self::Leaf> {
        (**self).tree()
    }
}

impl<T: ToTree + ?Sized> ToTree for Box<T> {
    type Leaf = T::Leaf;

    fn tree(&self) -> Tree<Self::Leaf> {
        (**self).tree()
    }
}
