//! Capability descriptors for mapped ranges
//!
//! Every mapped range carries a [`CodeInformation`] describing which editor
//! capabilities are valid there. Generated text often duplicates one source
//! token into several places with different roles (a type-check branch, a
//! runtime-registration branch), and the descriptor is what lets each copy
//! participate in exactly the right features.

use serde::{Deserialize, Serialize};

/// An editor capability that can be required when querying mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Completion,
    Hover,
    SemanticTokens,
    Rename,
    Diagnostics,
    Format,
}

/// Diagnostics sub-capabilities for a mapped range
///
/// `report_to_user` distinguishes ranges whose errors should surface in the
/// editor from scaffolding that exists only to narrow types in the generated
/// document. Errors against non-reported ranges are discarded by the
/// diagnostic pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsInfo {
    /// Syntactic (parse-level) diagnostics apply to this range
    pub syntactic: bool,
    /// Semantic (type-level) diagnostics apply to this range
    pub semantic: bool,
    /// Whether diagnostics here should be surfaced to the user
    pub report_to_user: bool,
}

impl DiagnosticsInfo {
    /// Diagnostics of both kinds, surfaced to the user
    pub fn reported() -> Self {
        DiagnosticsInfo {
            syntactic: true,
            semantic: true,
            report_to_user: true,
        }
    }

    /// Semantic diagnostics used only internally for type narrowing
    pub fn internal() -> Self {
        DiagnosticsInfo {
            syntactic: false,
            semantic: true,
            report_to_user: false,
        }
    }
}

/// Text transform applied to a rename replacement string
///
/// Used when generated text differs cosmetically from the source, e.g. an
/// identifier emitted as a quoted object key: the replacement computed
/// against the generated document must be re-quoted (or un-quoted) before
/// it is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenameTransform {
    /// Wrap the replacement in single quotes
    QuoteSingle,
    /// Wrap the replacement in double quotes
    QuoteDouble,
    /// Strip one pair of surrounding quotes, if present
    Unquote,
}

impl RenameTransform {
    /// Apply the transform to a replacement string
    pub fn apply(&self, replacement: &str) -> String {
        match self {
            RenameTransform::QuoteSingle => format!("'{replacement}'"),
            RenameTransform::QuoteDouble => format!("\"{replacement}\""),
            RenameTransform::Unquote => {
                let bytes = replacement.as_bytes();
                if bytes.len() >= 2
                    && (bytes[0] == b'\'' || bytes[0] == b'"')
                    && bytes[bytes.len() - 1] == bytes[0]
                {
                    replacement[1..replacement.len() - 1].to_string()
                } else {
                    replacement.to_string()
                }
            }
        }
    }
}

/// Rename behavior for a mapped range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenameInfo {
    /// Optional transform applied to replacement text
    pub transform: Option<RenameTransform>,
}

/// The capability descriptor attached to every mapped range
///
/// Two descriptors are compatible for segment merging iff they are
/// structurally equal. `rename: None` and `diagnostics: None` disable the
/// respective capability entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeInformation {
    pub completion: bool,
    pub hover: bool,
    pub semantic_tokens: bool,
    pub format: bool,
    pub rename: Option<RenameInfo>,
    pub diagnostics: Option<DiagnosticsInfo>,
}

impl CodeInformation {
    /// Every capability enabled; diagnostics surfaced to the user
    ///
    /// Used for source text copied verbatim into an equivalent position.
    pub fn all() -> Self {
        CodeInformation {
            completion: true,
            hover: true,
            semantic_tokens: true,
            format: true,
            rename: Some(RenameInfo::default()),
            diagnostics: Some(DiagnosticsInfo::reported()),
        }
    }

    /// No capabilities at all
    ///
    /// Generated-only text carries this; nothing round-trips to source.
    pub fn none() -> Self {
        CodeInformation::default()
    }

    /// User-visible diagnostics only
    ///
    /// For copies whose sole purpose is to be type-checked on the user's
    /// behalf (e.g. a prop key in a type-check branch).
    pub fn verification() -> Self {
        CodeInformation {
            diagnostics: Some(DiagnosticsInfo::reported()),
            ..CodeInformation::none()
        }
    }

    /// Internal-only semantic diagnostics, nothing user-facing
    ///
    /// For scaffolding injected purely to narrow types; errors here would
    /// expose generator internals and must never reach the user.
    pub fn narrowing() -> Self {
        CodeInformation {
            diagnostics: Some(DiagnosticsInfo::internal()),
            ..CodeInformation::none()
        }
    }

    /// Hover and rename, no diagnostics
    ///
    /// For copies that exist so navigation features find every occurrence
    /// (e.g. a prop key in a runtime-registration branch).
    pub fn navigation() -> Self {
        CodeInformation {
            hover: true,
            rename: Some(RenameInfo::default()),
            ..CodeInformation::none()
        }
    }

    /// Hover and semantic highlighting only
    pub fn semantic() -> Self {
        CodeInformation {
            hover: true,
            semantic_tokens: true,
            ..CodeInformation::none()
        }
    }

    /// Enable rename with the given replacement transform
    pub fn with_rename_transform(mut self, transform: RenameTransform) -> Self {
        self.rename = Some(RenameInfo {
            transform: Some(transform),
        });
        self
    }

    /// Whether this descriptor enables the given capability
    ///
    /// Diagnostics count as enabled only when they are reported to the
    /// user; internal narrowing ranges answer `false` so that the
    /// diagnostic pipeline discards errors mapped onto them.
    pub fn enables(&self, capability: Capability) -> bool {
        match capability {
            Capability::Completion => self.completion,
            Capability::Hover => self.hover,
            Capability::SemanticTokens => self.semantic_tokens,
            Capability::Format => self.format,
            Capability::Rename => self.rename.is_some(),
            Capability::Diagnostics => self.diagnostics.is_some_and(|d| d.report_to_user),
        }
    }
}
