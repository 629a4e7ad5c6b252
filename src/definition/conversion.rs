use super::model::FlowDefinition;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a `FlowDefinition`.
///
/// The engine itself never parses anything: loaders deserialize whatever format
/// they like and implement this trait to hand the result over.
///
/// # Example
///
/// ```rust,no_run
/// use beslisboom::prelude::*;
/// use beslisboom::error::ConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyQuestion { key: String, text: String, answers: Vec<(String, String)> }
/// struct MyQuestionnaire { questions: Vec<MyQuestion> }
///
/// // 2. Implement `IntoFlow` for your top-level struct.
/// impl IntoFlow for MyQuestionnaire {
///     fn into_flow(self) -> std::result::Result<FlowDefinition, ConversionError> {
///         let start_id = self
///             .questions
///             .first()
///             .map(|q| q.key.clone())
///             .ok_or_else(|| ConversionError::ValidationError("no questions".to_string()))?;
///
///         let nodes = self
///             .questions
///             .into_iter()
///             .map(|q| NodeDefinition {
///                 id: q.key,
///                 question: q.text,
///                 options: q
///                     .answers
///                     .into_iter()
///                     .map(|(label, next)| OptionDefinition {
///                         label,
///                         next_id: Some(next),
///                         ..Default::default()
///                     })
///                     .collect(),
///                 ..Default::default()
///             })
///             .collect();
///
///         Ok(FlowDefinition { start_id, nodes, ..Default::default() })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a flow definition.
    fn into_flow(self) -> Result<FlowDefinition, ConversionError>;
}

impl IntoFlow for FlowDefinition {
    fn into_flow(self) -> Result<FlowDefinition, ConversionError> {
        Ok(self)
    }
}
