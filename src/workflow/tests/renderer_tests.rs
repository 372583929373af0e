//! Tests for the JSON graph renderer.

use crate::workflow::{
    adapters::{JsonGraphRenderer, SequentialIdSource, render_json},
    domain::Endpoint,
    services::WorkflowEditor,
};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

#[rstest]
fn json_uses_node_and_edge_shape() {
    let mut editor = WorkflowEditor::new(Arc::new(SequentialIdSource::new()));
    let status = editor.add_status();
    editor.rename_status(status, "New");
    let transition = editor.add_transition();
    editor.set_transition_endpoint(transition, Endpoint::To, Some(status));

    let value = render_json(&editor.build_graph()).expect("graph encodes");

    assert_eq!(
        value,
        json!({
            "nodes": [
                { "id": status.to_string(), "data": { "label": "New\n" } }
            ],
            "edges": [
                {
                    "id": transition.to_string(),
                    "source": "",
                    "target": status.to_string(),
                    "label": "Direct Move"
                }
            ]
        })
    );
}

#[rstest]
fn json_never_contains_positions() {
    let editor = WorkflowEditor::with_sample_workflow(Arc::new(SequentialIdSource::new()));

    let value = render_json(&editor.build_graph()).expect("graph encodes");

    let nodes = value["nodes"].as_array().expect("nodes array");
    assert_eq!(nodes.len(), 3);
    assert!(nodes.iter().all(|node| node.get("position").is_none()));
}

#[rstest]
#[case(false)]
#[case(true)]
fn renderer_writes_one_document_per_render(#[case] pretty: bool) {
    let editor = WorkflowEditor::with_sample_workflow(Arc::new(SequentialIdSource::new()));
    let compact = JsonGraphRenderer::new(Vec::new());
    let mut renderer = if pretty { compact.pretty() } else { compact };

    editor.render_graph(&mut renderer).expect("render succeeds");

    let output = String::from_utf8(renderer.into_inner()).expect("utf-8 output");
    assert!(output.ends_with('\n'));
    let parsed: Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(parsed["nodes"].as_array().map(Vec::len), Some(3));
    assert_eq!(parsed["edges"].as_array().map(Vec::len), Some(0));
}
