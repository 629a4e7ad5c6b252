use crate::annotate::annotate;
use crate::definition::FlowDefinition;
use crate::engine::{FlowState, Session, Transition};
use crate::events::TracingObserver;
use crate::graph::FlowGraph;
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn load_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// A navigable decision flow.
///
/// The flow definition is parsed once on construction; every navigation
/// method then updates the single session held by the instance. Navigation
/// methods never raise: a request that does not apply simply returns False.
#[pyclass(name = "DecisionFlow")]
struct DecisionFlowPy {
    session: Session,
}

impl DecisionFlowPy {
    fn from_definition(flow: FlowDefinition) -> Self {
        let session = Session::builder(FlowGraph::new(flow))
            .observer(TracingObserver)
            .build();
        Self { session }
    }
}

#[pymethods]
impl DecisionFlowPy {
    /// Parses a JSON flow definition and starts a session at its start node.
    ///
    /// Args:
    ///     flow_json (str): The flow definition, with `startId`, `nodes` and
    ///         optional `tooltips`.
    ///
    /// Raises:
    ///     ValueError: If the document cannot be parsed or contains no nodes.
    #[new]
    fn new(flow_json: &str) -> PyResult<Self> {
        let flow = FlowDefinition::from_json_str(flow_json).map_err(load_error)?;
        Ok(Self::from_definition(flow))
    }

    /// Same as the constructor, for a YAML document.
    #[staticmethod]
    fn from_yaml(flow_yaml: &str) -> PyResult<Self> {
        let flow = FlowDefinition::from_yaml_str(flow_yaml).map_err(load_error)?;
        Ok(Self::from_definition(flow))
    }

    /// Selects an option of the current question. Returns whether anything changed.
    fn advance(&mut self, option_index: usize) -> bool {
        self.session.advance(option_index).is_applied()
    }

    fn back(&mut self) -> bool {
        self.session.go_back().is_applied()
    }

    fn restart(&mut self) {
        self.session.restart();
    }

    /// Returns to the question of the active result and reports the option
    /// index to highlight, or None if the result has no alternative.
    fn jump_to_alternative(&mut self) -> Option<usize> {
        match self.session.jump_to_alternative() {
            Transition::Alternative { highlight, .. } => Some(highlight),
            _ => None,
        }
    }

    /// Text for sharing the active result, or None. Reports the share with
    /// `method` as its channel.
    #[pyo3(signature = (url, method = "clipboard"))]
    fn share(&self, url: &str, method: &str) -> Option<String> {
        self.session.share(url, method)
    }

    #[getter]
    fn current_node_id(&self) -> Option<String> {
        self.session.current_node_id().map(str::to_string)
    }

    #[getter]
    fn history(&self) -> Vec<String> {
        self.session.history().to_vec()
    }

    /// The active result as `(text, origin node id, option index)`, or None.
    #[getter]
    fn result(&self) -> Option<(String, String, usize)> {
        self.session
            .active_result()
            .map(|r| (r.text.clone(), r.origin_id.clone(), r.option_index))
    }

    /// Describes what should be on screen.
    ///
    /// Returns:
    ///     dict: Always has a "kind" key ("active", "result" or "unknown").
    ///         Active states add "node_id", "title", "question", "note" and
    ///         "options" (a list of labels); results add "headline", "body"
    ///         and "has_alternative"; unknown states add "node_id".
    fn state<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        match self.session.state() {
            FlowState::Active(node) => {
                dict.set_item("kind", "active")?;
                dict.set_item("node_id", &node.id)?;
                dict.set_item("title", node.title.as_deref())?;
                dict.set_item("question", &node.question)?;
                dict.set_item("note", node.note.as_deref())?;
                let labels: Vec<&str> = node.options.iter().map(|o| o.label.as_str()).collect();
                dict.set_item("options", labels)?;
            }
            FlowState::Result(result) => {
                dict.set_item("kind", "result")?;
                dict.set_item("headline", result.headline())?;
                dict.set_item("body", result.body())?;
                dict.set_item("has_alternative", self.session.has_alternative())?;
            }
            FlowState::Unknown(id) => {
                dict.set_item("kind", "unknown")?;
                dict.set_item("node_id", id)?;
            }
        }
        dict.set_item("step", self.session.step())?;
        Ok(dict)
    }

    /// Splits text into `(text, explanation or None)` pairs using the flow's tooltips.
    fn annotate(&self, text: &str) -> Vec<(String, Option<String>)> {
        annotate(text, self.session.graph().tooltips())
            .map(|s| (s.text().to_string(), s.explanation().map(str::to_string)))
            .collect()
    }
}

/// Decision-flow navigation engine.
///
/// This module provides Python bindings to the beslisboom Rust library: load a
/// flow definition once, then walk it question by question.
#[pymodule]
fn beslisboom(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<DecisionFlowPy>()?;
    Ok(())
}
