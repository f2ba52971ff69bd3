//! Snapshot store for generated trees.
//!
//! The engine itself is pure; the one piece of shared mutable state in the
//! surrounding system is "which tree is current" per document. This store
//! owns that: regeneration publishes a whole new tree and replaces the old
//! one in a single `Arc` swap. Readers that cloned the previous `Arc` keep
//! a fully queryable snapshot for as long as they hold it — nothing inside
//! a published tree is ever mutated.

use crate::virtual_code::VirtualCodeTree;
use std::collections::HashMap;
use std::sync::Arc;

/// Uri-keyed store of the current virtual-code tree per document
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: HashMap<String, Arc<VirtualCodeTree>>,
}

impl SnapshotStore {
    /// Create an empty store
    pub fn new() -> Self {
        SnapshotStore::default()
    }

    /// Publish the tree produced by a fresh generation pass
    ///
    /// Replaces any previous tree for the uri and returns the shared
    /// handle to the new one.
    pub fn publish(
        &mut self,
        uri: impl Into<String>,
        tree: VirtualCodeTree,
    ) -> Arc<VirtualCodeTree> {
        let tree = Arc::new(tree);
        self.current.insert(uri.into(), Arc::clone(&tree));
        tree
    }

    /// The current tree for a document, if one was published
    pub fn current(&self, uri: &str) -> Option<Arc<VirtualCodeTree>> {
        self.current.get(uri).cloned()
    }

    /// Drop the tree for a closed document
    pub fn close(&mut self, uri: &str) {
        self.current.remove(uri);
    }

    /// Number of documents with a published tree
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
