//! Common test utilities for building flow definitions and sessions.
use beslisboom::prelude::*;

#[allow(dead_code)]
pub fn next(label: &str, next_id: &str) -> OptionDefinition {
    OptionDefinition {
        label: label.to_string(),
        next_id: Some(next_id.to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn result(label: &str, text: &str) -> OptionDefinition {
    OptionDefinition {
        label: label.to_string(),
        result: Some(text.to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn node(id: &str, options: Vec<OptionDefinition>) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        question: format!("Question {}?", id),
        options,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn tooltip(term: &str, explanation: &str) -> TooltipDefinition {
    TooltipDefinition {
        term: term.to_string(),
        explanation: explanation.to_string(),
    }
}

/// Creates the two-step flow used by the basic scenarios.
///
/// Logic: `A --X--> B --Y--> "Done"`
#[allow(dead_code)]
pub fn create_simple_flow() -> FlowDefinition {
    FlowDefinition {
        start_id: "A".to_string(),
        nodes: vec![
            node("A", vec![next("X", "B")]),
            node("B", vec![result("Y", "Done")]),
        ],
        ..Default::default()
    }
}

/// Creates a flow exercising results, alternatives, dead options, dangling
/// references and a cycle back to the start.
///
/// * `start`: 0 `Dak` -> `roof`, 1 `Gevel` -> result, 2 `Leeg` (dead), 3 `Kapot` -> `missing`
/// * `roof`: 0 `PIR` -> result (alternative 1), 1 `Houtvezel` -> result, 2 `Opnieuw` -> `start`
#[allow(dead_code)]
pub fn create_insulation_flow() -> FlowDefinition {
    let mut pir = result("PIR", "PIR-platen\n\nGoed isolerend per centimeter.\nLet op de dampremmer.");
    pir.card = Some(CardDefinition {
        price: Some("€ 70 per m²".to_string()),
        rd_value: Some("6,0".to_string()),
        pros: vec!["Dun pakket".to_string()],
        cons: vec!["Fossiel".to_string()],
        biobased_alternative_index: Some(1),
        ..Default::default()
    });

    let mut start = node(
        "start",
        vec![
            next("Dak", "roof"),
            result("Gevel", "Spouw vullen\n\nSnel en goedkoop."),
            OptionDefinition {
                label: "Leeg".to_string(),
                ..Default::default()
            },
            next("Kapot", "missing"),
        ],
    );
    start.title = Some("Begin".to_string());

    FlowDefinition {
        title: Some("Isolatiewijzer".to_string()),
        description: None,
        start_id: "start".to_string(),
        nodes: vec![
            start,
            node(
                "roof",
                vec![
                    pir,
                    result("Houtvezel", "Houtvezel\n\nBiobased."),
                    next("Opnieuw", "start"),
                ],
            ),
        ],
        tooltips: Some(vec![
            tooltip("PIR", "Polyisocyanuraat"),
            tooltip("spouw", "Ruimte tussen twee muren"),
        ]),
    }
}

/// Starts a session on `flow` that records every emitted event.
#[allow(dead_code)]
pub fn create_recorded_session(flow: FlowDefinition) -> (Session, RecordingObserver) {
    let recorder = RecordingObserver::new();
    let session = Session::builder(FlowGraph::new(flow))
        .observer(recorder.clone())
        .build();
    (session, recorder)
}
