//! Integration tests for Beslisboom
//!
//! End-to-end tests that load real flow documents and walk them.
//!
mod common;
use beslisboom::prelude::*;
use common::*;
use std::fs;
use std::path::PathBuf;

fn bundled_flow_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/flow.yaml")
}

const CAMEL_CASE_JSON: &str = r#"{
    "startId": "A",
    "nodes": [
        { "id": "A", "question": "Question A?", "options": [{ "label": "X", "nextId": "B" }] },
        { "id": "B", "question": "Question B?", "options": [{ "label": "Y", "result": "Done" }] }
    ]
}"#;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_bundled_flow_loads() {
        let flow = FlowDefinition::from_file(bundled_flow_path()).expect("Failed to load flow");
        let graph = FlowGraph::new(flow);

        assert_eq!(graph.start_id(), "start");
        assert_eq!(graph.title(), Some("Verduurzaming VvE"));
        assert!(graph.description().is_some());
        assert_eq!(graph.len(), 5);
        assert_eq!(graph.tooltips().len(), 6);

        let plat_dak = graph.node("plat-dak").unwrap();
        assert_eq!(plat_dak.options[0].alternative_index(), Some(1));
        assert_eq!(
            plat_dak.options[1].card.as_ref().and_then(|c| c.rd_value.as_deref()),
            Some("5,0")
        );
        assert!(plat_dak.options[2].disabled);
        assert_eq!(plat_dak.options[2].target, OptionTarget::Dead);

        println!("Loaded '{}' with {} nodes", graph.start_id(), graph.len());
    }

    #[test]
    fn test_walk_to_result_and_alternative() {
        let flow = FlowDefinition::from_file(bundled_flow_path()).unwrap();
        let (mut session, recorder) = create_recorded_session(flow);

        session.advance(0); // dak
        session.advance(0); // plat-dak
        session.advance(0); // PIR

        let result = session.active_result().expect("PIR should end the flow");
        assert_eq!(result.headline(), "Kies voor PIR-platen op het platte dak");
        assert!(result.body().starts_with("PIR isoleert goed"));
        assert!(session.has_alternative());

        let jump = session.jump_to_alternative();
        assert_eq!(jump.highlight(), Some(1));
        assert_eq!(session.current_node_id(), Some("plat-dak"));
        assert_eq!(session.history(), ["start", "dak", "plat-dak"]);

        session.advance(1);
        let result = session.active_result().unwrap();
        assert_eq!(result.headline(), "Kies voor houtvezelplaten op het platte dak");

        let names: Vec<_> = recorder.events().iter().map(FlowEvent::name).collect();
        assert_eq!(
            names,
            vec![
                "flow_start",
                "option_select",
                "option_select",
                "option_select",
                "result_reached",
                "alternative_navigation",
                "option_select",
                "result_reached",
            ]
        );
    }

    #[test]
    fn test_dangling_reference_in_bundled_flow() {
        let flow = FlowDefinition::from_file(bundled_flow_path()).unwrap();
        let mut session = Session::new(FlowGraph::new(flow));

        session.advance(2); // vloer
        session.advance(1); // Nee
        assert_eq!(
            session.state(),
            FlowState::Unknown("vloer-zonder-kruipruimte")
        );

        session.go_back();
        assert!(matches!(session.state(), FlowState::Active(node) if node.id == "vloer"));
    }

    #[test]
    fn test_annotating_bundled_result() {
        let flow = FlowDefinition::from_file(bundled_flow_path()).unwrap();
        let mut session = Session::new(FlowGraph::new(flow));

        session.advance(1); // gevel
        session.advance(1); // massieve muur
        let body = session.active_result().unwrap().body();
        let terms = annotate(&body, session.graph().tooltips()).terms();

        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].0, "ALV");
    }

    #[test]
    fn test_json_with_camel_case_keys() {
        let flow = FlowDefinition::from_json_str(CAMEL_CASE_JSON).expect("Failed to parse JSON");
        assert_eq!(FlowGraph::new(flow), FlowGraph::new(create_simple_flow()));
    }

    #[test]
    fn test_yaml_and_json_agree() {
        let yaml = "\
startId: A
nodes:
  - id: A
    question: Question A?
    options:
      - label: X
        nextId: B
  - id: B
    question: Question B?
    options:
      - label: Y
        result: Done
";
        let from_yaml = FlowDefinition::from_yaml_str(yaml).expect("Failed to parse YAML");
        let from_json = FlowDefinition::from_json_str(CAMEL_CASE_JSON).unwrap();
        assert_eq!(FlowGraph::new(from_yaml), FlowGraph::new(from_json));
    }

    #[test]
    fn test_serialized_keys_use_document_names() {
        let value = serde_json::to_value(create_insulation_flow()).unwrap();

        assert_eq!(value["startId"], "start");
        assert!(value.get("start_id").is_none());

        let roof_options = &value["nodes"][1]["options"];
        assert_eq!(roof_options[2]["nextId"], "start");
        assert_eq!(roof_options[0]["card"]["rdValue"], "6,0");
        assert_eq!(roof_options[0]["card"]["biobasedAlternativeIndex"], 1);
        assert!(roof_options[0]["card"].get("rd_value").is_none());
    }

    #[test]
    fn test_empty_card_lists_in_yaml() {
        let yaml = "\
startId: A
nodes:
  - id: A
    question: Welk materiaal?
    options:
      - label: Houtvezel
        result: Houtvezel
        card:
          price: onbekend
          pros:
          cons: ~
";
        let flow = FlowDefinition::from_yaml_str(yaml).expect("Failed to parse YAML");
        let card = flow.nodes[0].options[0].card.as_ref().unwrap();

        assert!(card.pros.is_empty());
        assert!(card.cons.is_empty());
        assert_eq!(card.price.as_deref(), Some("onbekend"));
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("beslisboom-{}.json", std::process::id()));
        let json = serde_json::to_string_pretty(&create_insulation_flow()).unwrap();
        fs::write(&path, json).unwrap();

        let loaded = FlowDefinition::from_file(&path);
        fs::remove_file(&path).ok();

        let graph = FlowGraph::new(loaded.expect("Failed to load written flow"));
        assert_eq!(graph, FlowGraph::new(create_insulation_flow()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FlowDefinition::from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { ref path, .. } if path.ends_with("exist.json")));
        assert!(err.to_string().starts_with("Could not read flow file"));
    }

    #[test]
    fn test_malformed_documents() {
        let err = FlowDefinition::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::JsonParseError(_)));

        let err = FlowDefinition::from_json_str(r#"{"startId": "A"}"#).unwrap_err();
        assert!(matches!(err, LoadError::JsonParseError(_)));

        let err = FlowDefinition::from_yaml_str("startId: [unclosed").unwrap_err();
        assert!(matches!(err, LoadError::YamlParseError(_)));

        let err = FlowDefinition::from_yaml_str("startId: A\nnodes: []\n").unwrap_err();
        assert!(matches!(err, LoadError::EmptyFlow));
    }

    #[test]
    fn test_navigator_over_bundled_flow() {
        let flow = FlowDefinition::from_file(bundled_flow_path()).unwrap();
        let mut navigator = Navigator::new(Session::new(FlowGraph::new(flow)));

        navigator.request(Command::Advance(1)).unwrap();
        assert!(navigator.is_busy());
        // The old screen is still shown until the transition commits.
        assert_eq!(navigator.session().current_node_id(), Some("start"));

        let busy = navigator.request(Command::Back).unwrap_err();
        assert_eq!(busy.pending, Command::Advance(1));
        assert_eq!(busy.rejected, Command::Back);

        let committed = navigator.commit().unwrap();
        assert!(committed.is_applied());
        assert!(!navigator.is_busy());
        assert_eq!(navigator.session().current_node_id(), Some("gevel"));

        let outcome = navigator.dispatch(Command::Back).unwrap();
        assert!(matches!(outcome, Transition::WentBack { .. }));
        assert_eq!(navigator.commit(), None);
        assert!(navigator.into_session().is_at_start());
    }
}
