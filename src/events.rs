//! Outbound signals emitted by the navigation engine.
//!
//! Observers are fire-and-forget: the engine calls [`FlowObserver::notify`] after a
//! transition has been applied and ignores whatever the observer does with it.

use std::sync::{Arc, Mutex, PoisonError};

/// Category attached to every event, shared with the analytics backend.
pub const EVENT_CATEGORY: &str = "beslisboom";

/// The only kind of alternative a flow can currently point to.
pub const BIOBASED_ALTERNATIVE: &str = "biobased";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    FlowStarted {
        start_id: String,
    },
    OptionSelected {
        node_id: String,
        node_title: Option<String>,
        option_label: String,
    },
    ResultReached {
        node_id: String,
        option_label: String,
        /// Headline of the recommendation.
        result_type: String,
    },
    AlternativeNavigation {
        from_node_id: String,
        to_node_id: String,
        alternative_type: String,
    },
    Restarted,
    BackNavigation {
        from_node_id: String,
        to_node_id: String,
    },
    /// The active result was shared. `method` names the channel, e.g. `"clipboard"`.
    Shared {
        method: String,
    },
}

impl FlowEvent {
    /// The analytics event name.
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::FlowStarted { .. } => "flow_start",
            FlowEvent::OptionSelected { .. } => "option_select",
            FlowEvent::ResultReached { .. } => "result_reached",
            FlowEvent::AlternativeNavigation { .. } => "alternative_navigation",
            FlowEvent::Restarted => "restart",
            FlowEvent::BackNavigation { .. } => "back_navigation",
            FlowEvent::Shared { .. } => "share",
        }
    }

    /// The analytics action label.
    pub fn action(&self) -> &'static str {
        match self {
            FlowEvent::FlowStarted { .. } => "start",
            FlowEvent::OptionSelected { .. } => "select_option",
            FlowEvent::ResultReached { .. } => "result",
            FlowEvent::AlternativeNavigation { .. } => "navigate_alternative",
            FlowEvent::Restarted => "restart",
            FlowEvent::BackNavigation { .. } => "back",
            FlowEvent::Shared { .. } => "share",
        }
    }
}

/// Receives engine signals. Implementations must not panic and should return quickly.
pub trait FlowObserver: Send + Sync {
    fn notify(&self, event: &FlowEvent);
}

impl<F> FlowObserver for F
where
    F: Fn(&FlowEvent) + Send + Sync,
{
    fn notify(&self, event: &FlowEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FlowObserver for NoopObserver {
    fn notify(&self, _event: &FlowEvent) {}
}

/// Emits every event as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FlowObserver for TracingObserver {
    fn notify(&self, event: &FlowEvent) {
        let event_name = event.name();
        let action = event.action();
        match event {
            FlowEvent::FlowStarted { start_id } => {
                tracing::info!(target: "beslisboom::events", category = EVENT_CATEGORY, event = event_name, action, %start_id)
            }
            FlowEvent::OptionSelected {
                node_id,
                node_title,
                option_label,
            } => tracing::info!(
                target: "beslisboom::events",
                category = EVENT_CATEGORY,
                event = event_name,
                action,
                %node_id,
                node_title = node_title.as_deref().unwrap_or_default(),
                %option_label
            ),
            FlowEvent::ResultReached {
                node_id,
                option_label,
                result_type,
            } => tracing::info!(
                target: "beslisboom::events",
                category = EVENT_CATEGORY,
                event = event_name,
                action,
                %node_id,
                %option_label,
                %result_type
            ),
            FlowEvent::AlternativeNavigation {
                from_node_id,
                to_node_id,
                alternative_type,
            } => tracing::info!(
                target: "beslisboom::events",
                category = EVENT_CATEGORY,
                event = event_name,
                action,
                %from_node_id,
                %to_node_id,
                %alternative_type
            ),
            FlowEvent::Restarted => {
                tracing::info!(target: "beslisboom::events", category = EVENT_CATEGORY, event = event_name, action)
            }
            FlowEvent::BackNavigation {
                from_node_id,
                to_node_id,
            } => tracing::info!(
                target: "beslisboom::events",
                category = EVENT_CATEGORY,
                event = event_name,
                action,
                %from_node_id,
                %to_node_id
            ),
            FlowEvent::Shared { method } => {
                tracing::info!(target: "beslisboom::events", category = EVENT_CATEGORY, event = event_name, action, %method)
            }
        }
    }
}

/// Keeps every event in memory. Clones share the same buffer, so a clone can be
/// handed to a session while the original is used to read the events back.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<FlowEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of all events recorded so far.
    pub fn events(&self) -> Vec<FlowEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns all events recorded so far.
    pub fn drain(&self) -> Vec<FlowEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl FlowObserver for RecordingObserver {
    fn notify(&self, event: &FlowEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
