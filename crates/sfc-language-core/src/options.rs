//! Generation configuration.
//!
//! How to generate is decided elsewhere (hierarchical options resolution is
//! an external collaborator); this module is only the parameter object it
//! hands to the generator. Options are owned by whoever drives generation,
//! never process-global.

use serde::{Deserialize, Serialize};

/// Which component-API vintage the generated scaffolding targets
///
/// The target changes the wrapping strings around the alternate script
/// region, not the mapping semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetVersion {
    /// Options-object component API
    V2,
    /// Setup-function component API
    #[default]
    V3,
}

/// Externally resolved parameters for one generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Target component API vintage
    pub target: TargetVersion,
    /// Macro names whose call registers props (keys get a type-check and a
    /// runtime-registration branch)
    pub props_macros: Vec<String>,
    /// Macro names whose call registers emitted events (runtime branch only)
    pub emits_macros: Vec<String>,
    /// Whether template interpolations are compiled into an embedded code
    pub interpolation_enabled: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            target: TargetVersion::default(),
            props_macros: vec!["defineProps".to_string()],
            emits_macros: vec!["defineEmits".to_string()],
            interpolation_enabled: true,
        }
    }
}

impl GenerateOptions {
    /// Literal text wrapped around the alternate script region
    pub fn setup_wrapper(&self) -> (&'static str, &'static str) {
        match self.target {
            TargetVersion::V2 => ("export default {\nsetup() {\n", "\n},\n};\n"),
            TargetVersion::V3 => ("function __setup() {\n", "\n}\n"),
        }
    }
}
