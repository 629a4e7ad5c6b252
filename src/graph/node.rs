use crate::definition::{CardDefinition, NodeDefinition, OptionDefinition};

/// A question step of the flow. Immutable once the graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub title: Option<String>,
    pub question: String,
    pub options: Vec<FlowOption>,
    pub note: Option<String>,
}

impl Node {
    /// Returns the option at `index`, if there is one.
    pub fn option(&self, index: usize) -> Option<&FlowOption> {
        self.options.get(index)
    }
}

/// Where choosing an option leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionTarget {
    /// Continue with the node of this identifier. The identifier is not
    /// guaranteed to resolve.
    Next(String),
    /// Finish the flow with this recommendation text.
    Result(String),
    /// Neither a follow-up node nor a result was defined.
    Dead,
}

/// One selectable answer of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOption {
    pub label: String,
    pub target: OptionTarget,
    pub card: Option<OptionCard>,
    pub disabled: bool,
}

impl FlowOption {
    pub fn next_id(&self) -> Option<&str> {
        match &self.target {
            OptionTarget::Next(id) => Some(id),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&str> {
        match &self.target {
            OptionTarget::Result(text) => Some(text),
            _ => None,
        }
    }

    /// Index of the sibling option declared as the more environmentally
    /// favorable alternative.
    pub fn alternative_index(&self) -> Option<usize> {
        self.card.as_ref()?.biobased_alternative_index
    }
}

/// Supplementary details shown with an option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCard {
    pub price: Option<String>,
    pub rd_value: Option<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub description: Option<String>,
    pub biobased_alternative_index: Option<usize>,
}

impl From<NodeDefinition> for Node {
    fn from(def: NodeDefinition) -> Self {
        Self {
            id: def.id,
            title: def.title,
            question: def.question,
            options: def.options.into_iter().map(FlowOption::from).collect(),
            note: def.note,
        }
    }
}

impl From<OptionDefinition> for FlowOption {
    fn from(def: OptionDefinition) -> Self {
        // A result wins over a follow-up node when both are present. Empty
        // strings count as absent.
        let result = def.result.filter(|text| !text.is_empty());
        let next_id = def.next_id.filter(|id| !id.is_empty());
        let target = match (result, next_id) {
            (Some(result), _) => OptionTarget::Result(result),
            (None, Some(next_id)) => OptionTarget::Next(next_id),
            (None, None) => OptionTarget::Dead,
        };
        Self {
            label: def.label,
            target,
            card: def.card.map(OptionCard::from),
            disabled: def.disabled,
        }
    }
}

impl From<CardDefinition> for OptionCard {
    fn from(def: CardDefinition) -> Self {
        Self {
            price: def.price,
            rd_value: def.rd_value,
            pros: def.pros,
            cons: def.cons,
            description: def.description,
            biobased_alternative_index: def.biobased_alternative_index,
        }
    }
}
