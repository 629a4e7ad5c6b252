//! The navigation engine.
//!
//! A [`Session`] walks a [`FlowGraph`](crate::graph::FlowGraph) through four
//! operations: `advance`, `go_back`, `restart` and `jump_to_alternative`. Its
//! displayable state is one of three variants:
//!
//! * [`FlowState::Active`]: a question is shown (initially the start node),
//! * [`FlowState::Result`]: a recommendation is shown,
//! * [`FlowState::Unknown`]: the current identifier does not resolve.

mod session;
mod state;
mod transition;

pub use session::*;
pub use state::*;
pub use transition::*;
