use super::state::{ActiveResult, FlowState, Position, SessionState};
use super::transition::{Command, DeclineReason, Transition};
use crate::events::{BIOBASED_ALTERNATIVE, FlowEvent, FlowObserver, NoopObserver};
use crate::graph::{FlowGraph, Node, OptionTarget};
use std::fmt;
use std::sync::Arc;

/// Number of steps at which the progress indicator is full.
pub const DEFAULT_PROGRESS_DEPTH: usize = 10;

/// Title used in shared results when the flow has none.
pub const DEFAULT_SHARE_TITLE: &str = "Beslisboom Resultaat";

/// One user's walk through a flow graph.
///
/// Every operation is a synchronous, atomic transition: the new state is
/// computed first and assigned in one step, so a declined request never
/// leaves a partial mutation behind. Callers that animate transitions must
/// not issue a second request before the first one is applied; see
/// [`Navigator`](crate::driver::Navigator).
pub struct Session {
    graph: Arc<FlowGraph>,
    state: SessionState,
    progress_depth: usize,
    observer: Box<dyn FlowObserver>,
}

pub struct SessionBuilder {
    graph: Arc<FlowGraph>,
    progress_depth: usize,
    observer: Box<dyn FlowObserver>,
}

impl SessionBuilder {
    pub fn new(graph: impl Into<Arc<FlowGraph>>) -> Self {
        Self {
            graph: graph.into(),
            progress_depth: DEFAULT_PROGRESS_DEPTH,
            observer: Box::new(NoopObserver),
        }
    }

    /// Sends engine signals to `observer` instead of discarding them.
    pub fn observer(mut self, observer: impl FlowObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Sets the number of steps at which [`Session::progress`] reaches 1.0.
    /// Zero is treated as one.
    pub fn progress_depth(mut self, depth: usize) -> Self {
        self.progress_depth = depth.max(1);
        self
    }

    pub fn build(self) -> Session {
        let state = SessionState::initial(self.graph.start_id());
        let session = Session {
            graph: self.graph,
            state,
            progress_depth: self.progress_depth,
            observer: self.observer,
        };
        session.observer.notify(&FlowEvent::FlowStarted {
            start_id: session.graph.start_id().to_string(),
        });
        session
    }
}

impl Session {
    /// Starts a session with default settings and no observer.
    pub fn new(graph: impl Into<Arc<FlowGraph>>) -> Self {
        SessionBuilder::new(graph).build()
    }

    pub fn builder(graph: impl Into<Arc<FlowGraph>>) -> SessionBuilder {
        SessionBuilder::new(graph)
    }

    /// Selects the option at `option_index` of the current node.
    ///
    /// A `result` option activates that result; a `next_id` option moves to that
    /// identifier and appends it to the history, whether or not it resolves.
    pub fn advance(&mut self, option_index: usize) -> Transition {
        let graph = Arc::clone(&self.graph);

        let current_id = match &self.state.position {
            Position::Node(id) => id.as_str(),
            Position::Result(_) => return self.decline(DeclineReason::ResultActive),
        };
        let Some(node) = graph.node(current_id) else {
            return self.decline(DeclineReason::UnknownNode(current_id.to_string()));
        };
        let Some(option) = node.option(option_index) else {
            return self.decline(DeclineReason::OptionOutOfRange {
                index: option_index,
                len: node.options.len(),
            });
        };

        match &option.target {
            OptionTarget::Result(text) => {
                let result = ActiveResult {
                    text: text.clone(),
                    origin_id: node.id.clone(),
                    option_index,
                };
                self.state.position = Position::Result(result.clone());

                tracing::info!(node_id = %node.id, option_index, "Result reached");
                self.notify_selected(node, &option.label);
                self.observer.notify(&FlowEvent::ResultReached {
                    node_id: node.id.clone(),
                    option_label: option.label.clone(),
                    result_type: result.headline().to_string(),
                });
                Transition::ResultReached(result)
            }
            OptionTarget::Next(next_id) => {
                self.state.history.push(next_id.clone());
                self.state.position = Position::Node(next_id.clone());

                tracing::debug!(from = %node.id, to = %next_id, "Advanced");
                self.notify_selected(node, &option.label);
                Transition::Moved {
                    from: node.id.clone(),
                    to: next_id.clone(),
                }
            }
            OptionTarget::Dead => self.decline(DeclineReason::DeadOption(option_index)),
        }
    }

    /// Steps back to the previous entry of the history, clearing any active result.
    pub fn go_back(&mut self) -> Transition {
        if self.state.history.len() <= 1 {
            return self.decline(DeclineReason::AtStart);
        }

        let mut history = self.state.history.clone();
        let from = history.pop().unwrap_or_default();
        let to = history.last().cloned().unwrap_or_default();
        self.state = SessionState {
            position: Position::Node(to.clone()),
            history,
        };

        tracing::debug!(%from, %to, "Went back");
        self.observer.notify(&FlowEvent::BackNavigation {
            from_node_id: from.clone(),
            to_node_id: to.clone(),
        });
        Transition::WentBack { from, to }
    }

    /// Returns to the initial state: the start node with a one-entry history.
    pub fn restart(&mut self) -> Transition {
        self.state = SessionState::initial(self.graph.start_id());

        tracing::info!(start_id = %self.graph.start_id(), "Restarted");
        self.observer.notify(&FlowEvent::Restarted);
        Transition::Restarted
    }

    /// Leaves the active result and returns to the node it came from, so the
    /// user can pick the alternative declared on the chosen option's card.
    ///
    /// The history is cut after the first occurrence of the origin node, or the
    /// origin is appended if it is not in the history. The returned transition
    /// carries the option index to highlight.
    pub fn jump_to_alternative(&mut self) -> Transition {
        let Position::Result(result) = &self.state.position else {
            return self.decline(DeclineReason::NoActiveResult);
        };
        let Some(highlight) = self
            .graph
            .node(&result.origin_id)
            .and_then(|node| node.option(result.option_index))
            .and_then(|option| option.alternative_index())
        else {
            return self.decline(DeclineReason::NoAlternative);
        };

        let origin = result.origin_id.clone();
        let mut history = self.state.history.clone();
        match history.iter().position(|id| *id == origin) {
            Some(first) => history.truncate(first + 1),
            None => history.push(origin.clone()),
        }
        self.state = SessionState {
            position: Position::Node(origin.clone()),
            history,
        };

        tracing::debug!(%origin, highlight, "Jumped to alternative");
        self.observer.notify(&FlowEvent::AlternativeNavigation {
            from_node_id: origin.clone(),
            to_node_id: origin.clone(),
            alternative_type: BIOBASED_ALTERNATIVE.to_string(),
        });
        Transition::Alternative { origin, highlight }
    }

    /// Runs a navigation request given as data.
    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Advance(index) => self.advance(index),
            Command::Back => self.go_back(),
            Command::Restart => self.restart(),
            Command::JumpToAlternative => self.jump_to_alternative(),
        }
    }

    /// Resolves the current position against the graph.
    pub fn state(&self) -> FlowState<'_> {
        match &self.state.position {
            Position::Result(result) => FlowState::Result(result),
            Position::Node(id) => match self.graph.node(id) {
                Some(node) => FlowState::Active(node),
                None => FlowState::Unknown(id),
            },
        }
    }

    /// The raw session data, for comparisons and snapshots.
    pub fn snapshot(&self) -> &SessionState {
        &self.state
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn current_node_id(&self) -> Option<&str> {
        self.state.current_node_id()
    }

    /// The current node, if the session is at a node that exists.
    pub fn current_node(&self) -> Option<&Node> {
        self.current_node_id().and_then(|id| self.graph.node(id))
    }

    pub fn active_result(&self) -> Option<&ActiveResult> {
        self.state.active_result()
    }

    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    pub fn is_at_start(&self) -> bool {
        self.current_node_id() == Some(self.graph.start_id())
    }

    pub fn can_go_back(&self) -> bool {
        self.state.history.len() > 1
    }

    /// The 1-based step number shown to the user.
    pub fn step(&self) -> usize {
        self.state.history.len()
    }

    /// Fraction of the progress indicator to fill, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        (self.step() as f64 / self.progress_depth as f64).min(1.0)
    }

    /// Whether the active result's option points to an alternative.
    pub fn has_alternative(&self) -> bool {
        self.active_result().is_some_and(|result| {
            self.graph
                .node(&result.origin_id)
                .and_then(|node| node.option(result.option_index))
                .and_then(|option| option.alternative_index())
                .is_some()
        })
    }

    /// Text for sharing the active result, or `None` when no result is shown.
    pub fn share_text(&self, url: &str) -> Option<String> {
        let result = self.active_result()?;
        let title = self.graph.title().unwrap_or(DEFAULT_SHARE_TITLE);
        Some(format!("{}\n\n{}\n\n{}", title, result.text, url))
    }

    /// Like [`share_text`](Self::share_text), and reports the share through
    /// the observer. Nothing is reported when no result is shown.
    pub fn share(&self, url: &str, method: &str) -> Option<String> {
        let text = self.share_text(url)?;
        self.observer.notify(&FlowEvent::Shared {
            method: method.to_string(),
        });
        Some(text)
    }

    fn notify_selected(&self, node: &Node, option_label: &str) {
        self.observer.notify(&FlowEvent::OptionSelected {
            node_id: node.id.clone(),
            node_title: node.title.clone(),
            option_label: option_label.to_string(),
        });
    }

    fn decline(&self, reason: DeclineReason) -> Transition {
        tracing::debug!(%reason, "Transition declined");
        Transition::Declined(reason)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("start_id", &self.graph.start_id())
            .field("state", &self.state)
            .field("progress_depth", &self.progress_depth)
            .finish_non_exhaustive()
    }
}
