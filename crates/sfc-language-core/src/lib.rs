//! Virtual-code generation and position translation for SFC documents.
//!
//! A single-file component mixes a script region, an optional alternate
//! script region, a template region, and style regions in one source text.
//! Editor features, however, run against *generated* documents: a script
//! document assembled from the script regions, embedded documents for the
//! template's expressions, and one per style region. This crate produces
//! those generated documents together with mapping tables relating every
//! generated range to the source range it came from, and answers position
//! queries in both directions.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   generate()   ┌──────────────────────────────┐
//! │  SourceDocument  │ ─────────────> │  VirtualCodeTree (immutable) │
//! │ (parsed regions) │                │   root script                │
//! └──────────────────┘                │   ├── template               │
//!                                     │   │   └── event handlers …   │
//!                                     │   └── style_0, style_1 …     │
//!                                     └──────────────────────────────┘
//!                                                   │
//!                                                   ▼
//!                                     ┌──────────────────────────────┐
//!                                     │      PositionTranslator      │
//!                                     │  source <-> generated lookup │
//!                                     └──────────────────────────────┘
//! ```
//!
//! Parsing the source text into regions, type-checking the generated
//! documents, and the editor-feature providers themselves all live
//! elsewhere; this crate is the engine between them.
//!
//! Generation is a pure function of one [`SourceDocument`] snapshot and the
//! supplied [`GenerateOptions`]. The resulting tree is immutable; re-parsing
//! produces a new snapshot and a full regeneration, swapped in atomically
//! through the [`SnapshotStore`]. Queries against a superseded tree remain
//! valid for as long as the caller holds it.

pub mod codegen;
pub mod document;
pub mod options;
pub mod snapshot;
pub mod translate;
pub mod virtual_code;

// Re-export main types and functions for convenience
pub use codegen::generate;
pub use document::{Section, SourceDocument};
pub use options::{GenerateOptions, TargetVersion};
pub use snapshot::SnapshotStore;
pub use translate::{GeneratedLocation, PositionTranslator, SourceLocation};
pub use virtual_code::{CodeId, Language, VirtualCode, VirtualCodeTree};

// Mapping-layer types consumers need alongside the tree
pub use sfc_source_map::{Capability, CodeInformation, FileId, MappingTable, Segment};
