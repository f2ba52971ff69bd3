//! Mapping tables between SFC source text and generated virtual code
//!
//! This crate provides the data model for bidirectional position mapping
//! between an original single-file-component document and the text generated
//! from it. It enables editor features (completion, hover, rename,
//! diagnostics) computed against generated text to be reported back against
//! the original document, and vice versa.
//!
//! # Overview
//!
//! The core types are:
//! - [`CodeInformation`]: Per-range capability descriptor (which editor
//!   features are valid for a mapped range)
//! - [`Segment`]: The atomic mapping unit, relating a generated range to an
//!   optional source range
//! - [`MappingTable`]: An ordered, non-overlapping (in generated
//!   coordinates) list of segments with bidirectional lookup
//! - [`CodeWriter`]: A builder that grows generated text while recording
//!   segments, merging adjacent compatible copies
//!
//! # Example
//!
//! ```rust
//! use sfc_source_map::*;
//!
//! // Copy the identifier at source offsets [10, 13) as a quoted object key.
//! let mut writer = CodeWriter::new();
//! let info = CodeInformation::all();
//! writer.push_string_literal_key("foo", Some(KeyOrigin::root(10, info)));
//! let (text, table) = writer.finish();
//!
//! assert_eq!(text, "'foo'");
//! // The quotes are synthetic; only the inner characters map back.
//! assert_eq!(table.to_source_offset(2), Some((FileId::ROOT, 11)));
//! ```

pub mod code_info;
pub mod error;
pub mod segment;
pub mod table;
pub mod types;
pub mod writer;

// Re-export main types
pub use code_info::{Capability, CodeInformation, DiagnosticsInfo, RenameInfo, RenameTransform};
pub use error::MappingError;
pub use segment::{Segment, SourceSpan};
pub use table::MappingTable;
pub use types::{CodeRange, FileId};
pub use writer::{CodeWriter, KeyOrigin};
