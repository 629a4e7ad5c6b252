use crate::graph::Node;
use itertools::Itertools;

/// A terminal recommendation together with the option that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveResult {
    pub text: String,
    pub origin_id: String,
    pub option_index: usize,
}

impl ActiveResult {
    /// The first line of the recommendation.
    pub fn headline(&self) -> &str {
        self.text.lines().next().unwrap_or_default()
    }

    /// Everything from the third line on. The second line separates the
    /// headline from the body and is dropped.
    pub fn body(&self) -> String {
        self.text.split('\n').skip(2).join("\n")
    }
}

/// Where the session currently is. A result and a current node are mutually
/// exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Node(String),
    Result(ActiveResult),
}

/// The plain data of a session: its position and the visited node identifiers.
///
/// `history` is never empty and always starts with the flow's start identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub position: Position,
    pub history: Vec<String>,
}

impl SessionState {
    pub fn initial(start_id: &str) -> Self {
        Self {
            position: Position::Node(start_id.to_string()),
            history: vec![start_id.to_string()],
        }
    }

    /// The current node identifier, `None` while a result is active.
    pub fn current_node_id(&self) -> Option<&str> {
        match &self.position {
            Position::Node(id) => Some(id),
            Position::Result(_) => None,
        }
    }

    pub fn active_result(&self) -> Option<&ActiveResult> {
        match &self.position {
            Position::Result(result) => Some(result),
            Position::Node(_) => None,
        }
    }
}

/// What the session looks like to a view, resolved against the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState<'a> {
    /// Showing a question.
    Active(&'a Node),
    /// Showing a recommendation.
    Result(&'a ActiveResult),
    /// The current identifier does not resolve. Only going back or restarting
    /// leaves this state.
    Unknown(&'a str),
}
