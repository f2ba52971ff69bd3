//! The generated-document tree.
//!
//! One generation pass produces a root [`VirtualCode`] plus nested embedded
//! codes: a tree, not a graph — each node exclusively owns its children.
//! The whole tree is immutable once built and is replaced wholesale by the
//! next generation pass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sfc_source_map::MappingTable;
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of one virtual code within its tree
///
/// Ids derive from section kind and ordinal within that kind (`script`,
/// `template`, `style_0`, …), never from tree-wide array positions, so
/// unrelated edits elsewhere in the document do not change existing ids.
/// Editors rely on this to keep open virtual-document views stable across
/// keystrokes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeId(String);

impl CodeId {
    /// Create an id
    pub fn new(id: impl Into<String>) -> Self {
        CodeId(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CodeId {
    fn from(id: &str) -> Self {
        CodeId::new(id)
    }
}

impl From<String> for CodeId {
    fn from(id: String) -> Self {
        CodeId(id)
    }
}

impl Borrow<str> for CodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Language of a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// The generated programming-language document the type checker consumes
    Script,
    /// A stylesheet document
    Css,
}

/// One generated document: text, mappings, and embedded children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualCode {
    /// Stable id within the tree
    pub id: CodeId,
    /// Language of the generated text
    pub language: Language,
    /// The generated text itself
    pub text: String,
    /// Mapping table relating generated ranges to source ranges
    pub mappings: MappingTable,
    /// Embedded codes, in generation order
    pub embedded: IndexMap<CodeId, VirtualCode>,
}

impl VirtualCode {
    /// Create a leaf virtual code
    pub fn new(
        id: impl Into<CodeId>,
        language: Language,
        text: String,
        mappings: MappingTable,
    ) -> Self {
        VirtualCode {
            id: id.into(),
            language,
            text,
            mappings,
            embedded: IndexMap::new(),
        }
    }

    /// Insert an embedded child, keyed by its own id
    pub fn insert_embedded(&mut self, code: VirtualCode) {
        self.embedded.insert(code.id.clone(), code);
    }
}

/// The immutable result of one generation pass
///
/// Holds the root virtual code and provides id-based lookup over the whole
/// tree. Superseded trees stay fully queryable for as long as a consumer
/// holds them; replacement happens outside, at the snapshot-store boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualCodeTree {
    root: VirtualCode,
}

impl VirtualCodeTree {
    /// Wrap a root virtual code
    pub fn new(root: VirtualCode) -> Self {
        VirtualCodeTree { root }
    }

    /// The root generated document
    pub fn root(&self) -> &VirtualCode {
        &self.root
    }

    /// Look up any virtual code in the tree by id
    pub fn get(&self, id: &str) -> Option<&VirtualCode> {
        self.walk().find(|(code_id, _)| code_id.as_str() == id).map(|(_, code)| code)
    }

    /// Depth-first walk over every virtual code, root first
    ///
    /// The iterator is finite and borrows the tree; call again for a fresh
    /// traversal.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![&self.root],
        }
    }
}

/// Iterator state for [`VirtualCodeTree::walk`]
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a VirtualCode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a CodeId, &'a VirtualCode);

    fn next(&mut self) -> Option<Self::Item> {
        let code = self.stack.pop()?;
        // Reverse so children come off the stack in insertion order
        for child in code.embedded.values().rev() {
            self.stack.push(child);
        }
        Some((&code.id, code))
    }
}
