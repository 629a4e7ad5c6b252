use serde::{Deserialize, Deserializer, Serialize};

/// The complete, canonical definition of a decision flow, as handed over by a loader.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowDefinition {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "startId", alias = "start_id")]
    pub start_id: String,
    pub nodes: Vec<NodeDefinition>,
    #[serde(default)]
    pub tooltips: Option<Vec<TooltipDefinition>>,
}

/// Defines a single question step in the flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Defines one answer of a question. Well-formed data sets exactly one of
/// `next_id` and `result`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub label: String,
    #[serde(default, rename = "nextId", alias = "next_id")]
    pub next_id: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub card: Option<CardDefinition>,
    #[serde(default)]
    pub disabled: bool,
}

/// Supplementary information displayed underneath an option.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardDefinition {
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default, rename = "rdValue", alias = "rd_value")]
    pub rd_value: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pros: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cons: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "biobasedAlternativeIndex", alias = "biobased_alternative_index")]
    pub biobased_alternative_index: Option<usize>,
}

/// A term and the explanation shown when it appears in flow text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TooltipDefinition {
    pub term: String,
    pub explanation: String,
}

/// Reads a list that hand-written documents may leave empty (`pros:` with no items).
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
