//! Static model descriptor.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Model served when no other is configured.
pub const DEFAULT_MODEL: &str = "llama3.2:3b-instruct-q4_K_M";
/// Version string reported for every model.
pub const MODEL_VERSION: &str = "v1.0";

/// Illustrative architecture figures; not read from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ModelParameters {
    /// Transformer layer count
    num_layers: u32,
    /// Hidden dimension
    hidden_units: u32,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            num_layers: 32,
            hidden_units: 4096,
        }
    }
}

/// Fixed descriptor of the served model.
///
/// Built once from configuration; answering with it never touches the
/// backend.
///
/// # Examples
///
/// ```
/// use parley_core::ModelInfo;
///
/// let info = ModelInfo::default();
/// assert_eq!(info.model(), "llama3.2:3b-instruct-q4_K_M");
/// assert_eq!(info.version(), "v1.0");
/// assert_eq!(*info.parameters().num_layers(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ModelInfo {
    /// Backend model name
    model: String,
    /// Descriptor version
    version: String,
    /// Architecture figures
    parameters: ModelParameters,
}

impl ModelInfo {
    /// Descriptor for the named model.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            version: MODEL_VERSION.to_string(),
            parameters: ModelParameters::default(),
        }
    }
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self::for_model(DEFAULT_MODEL)
    }
}
