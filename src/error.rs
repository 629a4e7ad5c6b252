use crate::engine::Command;
use thiserror::Error;

/// Errors that can occur while loading a flow definition.
///
/// Any of these means the flow is unavailable: no session is ever built
/// without a successfully loaded definition.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read flow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse flow YAML: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("Flow document is not a mapping (found {found})")]
    NotAMapping { found: &'static str },

    #[error("Flow definition contains no nodes")]
    EmptyFlow,

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Returned by the navigator when a transition is requested while another one
/// has not been committed yet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cannot start {rejected:?} while {pending:?} is still pending")]
pub struct TransitionBusy {
    pub pending: Command,
    pub rejected: Command,
}

/// Errors that can occur when converting a custom user format into a `FlowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
