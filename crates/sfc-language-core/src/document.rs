//! Parsed source document model.
//!
//! The external SFC parser turns raw text into named sections, each with
//! its raw text and absolute offset range in the original document. This
//! module only represents that result; it never parses anything itself.

use serde::{Deserialize, Serialize};

/// One named section of the original document
///
/// Offsets are absolute byte offsets in the original text and are used
/// unmodified as the source side of every mapping segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Raw section text, exactly as it appears in the original document
    pub text: String,
    /// Absolute offset of the first byte of `text`
    pub start_offset: usize,
    /// Absolute offset one past the last byte of `text`
    pub end_offset: usize,
}

impl Section {
    /// Create a section at the given absolute start offset
    pub fn new(text: impl Into<String>, start_offset: usize) -> Self {
        let text = text.into();
        let end_offset = start_offset + text.len();
        Section {
            text,
            start_offset,
            end_offset,
        }
    }

    /// Section length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the section is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Immutable parsed view of one original document
///
/// Created once per parse and never mutated; the generator takes a
/// reference. Structurally odd inputs from an upstream parser bug
/// (overlapping sections, out-of-order offsets) are tolerated here and
/// degrade to partial generation downstream rather than being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    uri: String,
    version: Option<i32>,
    script: Option<Section>,
    script_setup: Option<Section>,
    template: Option<Section>,
    styles: Vec<Section>,
}

impl SourceDocument {
    /// Create an empty document with the given URI
    pub fn new(uri: impl Into<String>) -> Self {
        SourceDocument {
            uri: uri.into(),
            version: None,
            script: None,
            script_setup: None,
            template: None,
            styles: Vec::new(),
        }
    }

    /// Set the parse version (used by editors to correlate snapshots)
    pub fn with_version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }

    /// Set the plain script section
    pub fn with_script(mut self, section: Section) -> Self {
        self.script = Some(section);
        self
    }

    /// Set the alternate (setup-style) script section
    pub fn with_script_setup(mut self, section: Section) -> Self {
        self.script_setup = Some(section);
        self
    }

    /// Set the template section
    pub fn with_template(mut self, section: Section) -> Self {
        self.template = Some(section);
        self
    }

    /// Append a style section
    pub fn with_style(mut self, section: Section) -> Self {
        self.styles.push(section);
        self
    }

    /// The document's URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The parse version, if set
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    /// The plain script section, if present
    pub fn script(&self) -> Option<&Section> {
        self.script.as_ref()
    }

    /// The alternate script section, if present
    pub fn script_setup(&self) -> Option<&Section> {
        self.script_setup.as_ref()
    }

    /// The template section, if present
    pub fn template(&self) -> Option<&Section> {
        self.template.as_ref()
    }

    /// The style sections, in document order
    pub fn styles(&self) -> &[Section] {
        &self.styles
    }
}
