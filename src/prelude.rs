//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the beslisboom crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use beslisboom::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = FlowGraph::new(FlowDefinition::from_file("path/to/flow.json")?);
//! let mut session = Session::new(graph);
//!
//! if let Transition::Declined(reason) = session.advance(3) {
//!     println!("Nothing happened: {}", reason);
//! }
//! # Ok(())
//! # }
//! ```

// Definition and graph
pub use crate::definition::{
    CardDefinition, FlowDefinition, IntoFlow, NodeDefinition, OptionDefinition,
    TooltipDefinition,
};
pub use crate::graph::{FlowGraph, FlowOption, Node, OptionCard, OptionTarget, TooltipIndex};

// Navigation
pub use crate::driver::Navigator;
pub use crate::engine::{
    ActiveResult, Command, DeclineReason, FlowState, Session, SessionBuilder, Transition,
};

// Annotation
pub use crate::annotate::{Segment, Segments, annotate};

// Signals
pub use crate::events::{FlowEvent, FlowObserver, NoopObserver, RecordingObserver, TracingObserver};

// Error types
pub use crate::error::{ConversionError, LoadError, TransitionBusy};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
