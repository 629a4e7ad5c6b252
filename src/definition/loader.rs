use super::conversion::IntoFlow;
use super::model::FlowDefinition;
use crate::error::LoadError;
use std::fs;
use std::path::Path;

impl FlowDefinition {
    /// Parses a flow definition from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(LoadError::NotAMapping {
                found: json_kind(&value),
            });
        }
        let flow: FlowDefinition = serde_json::from_value(value)?;
        flow.ensure_nodes()
    }

    /// Parses a flow definition from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LoadError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if !value.is_mapping() {
            return Err(LoadError::NotAMapping {
                found: yaml_kind(&value),
            });
        }
        let flow: FlowDefinition = serde_yaml::from_value(value)?;
        flow.ensure_nodes()
    }

    /// Loads a flow definition from a file. Files ending in `.yaml` or `.yml`
    /// are read as YAML, everything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        tracing::debug!(path = %path.display(), yaml = is_yaml, "Loading flow definition");
        if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Converts a custom source through [`IntoFlow`], with the same checks as
    /// the document loaders.
    pub fn from_source<F: IntoFlow>(source: F) -> Result<Self, LoadError> {
        let flow = source.into_flow()?;
        flow.ensure_nodes()
    }

    fn ensure_nodes(self) -> Result<Self, LoadError> {
        if self.nodes.is_empty() {
            return Err(LoadError::EmptyFlow);
        }
        Ok(self)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "a mapping",
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a list",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
