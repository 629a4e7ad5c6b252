//! # Beslisboom - Decision Flow Navigation Engine
//!
//! **Beslisboom** walks users through a branching questionnaire ("decision flow")
//! that is defined entirely in data. Every question is a node with a list of
//! options; an option either leads to another node or ends the flow with a
//! recommendation. Question and result texts can be decorated with tooltips
//! for domain terms.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Deserialize a `FlowDefinition` from JSON or YAML, or implement
//!     `IntoFlow` for your own format.
//! 2.  **Build the Graph**: `FlowGraph::new` turns the definition into an immutable arena of
//!     nodes plus a case-insensitive tooltip index.
//! 3.  **Start a Session**: `Session::builder` creates the mutable navigation state, optionally
//!     with a `FlowObserver` that receives analytics signals.
//! 4.  **Navigate**: Call `advance`, `go_back`, `restart` and `jump_to_alternative`, and render
//!     whatever `Session::state` reports. Text goes through `annotate` to find tooltip terms.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use beslisboom::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let flow = FlowDefinition::from_file("data/flow.yaml")?;
//!     let graph = FlowGraph::new(flow);
//!     let mut session = Session::builder(graph)
//!         .observer(TracingObserver)
//!         .build();
//!
//!     // Answer the first question with its first option.
//!     session.advance(0);
//!
//!     match session.state() {
//!         FlowState::Active(node) => {
//!             let tooltips = session.graph().tooltips();
//!             for segment in annotate(&node.question, tooltips) {
//!                 match segment.explanation() {
//!                     Some(explanation) => print!("[{}: {}]", segment.text(), explanation),
//!                     None => print!("{}", segment.text()),
//!                 }
//!             }
//!             println!();
//!         }
//!         FlowState::Result(result) => println!("Advice: {}", result.headline()),
//!         FlowState::Unknown(id) => println!("Unknown step: {}", id),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod annotate;
pub mod definition;
pub mod driver;
pub mod engine;
pub mod error;
pub mod events;
pub mod graph;
pub mod prelude;

#[cfg(feature = "python-bindings")]
mod python;
