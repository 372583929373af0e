//! JSON graph renderer in the node/edge shape graph UIs consume.
//!
//! Nodes become `{ "id", "data": { "label" } }` and edges become
//! `{ "id", "source", "target", "label" }`. Empty endpoints are written as
//! `""`. No positions are emitted; layout is left to the consumer.

use crate::workflow::{
    domain::{GraphEdge, GraphNode, StatusId, WorkflowGraph},
    ports::{GraphRenderResult, GraphRenderer},
};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonGraph {
    nodes: Vec<JsonNode>,
    edges: Vec<JsonEdge>,
}

#[derive(Serialize)]
struct JsonNode {
    id: String,
    data: JsonNodeData,
}

#[derive(Serialize)]
struct JsonNodeData {
    label: String,
}

#[derive(Serialize)]
struct JsonEdge {
    id: String,
    source: String,
    target: String,
    label: &'static str,
}

impl From<&GraphNode> for JsonNode {
    fn from(node: &GraphNode) -> Self {
        Self {
            id: node.id.to_string(),
            data: JsonNodeData {
                label: node.label.clone(),
            },
        }
    }
}

impl From<&GraphEdge> for JsonEdge {
    fn from(edge: &GraphEdge) -> Self {
        Self {
            id: edge.id.to_string(),
            source: endpoint_string(edge.source),
            target: endpoint_string(edge.target),
            label: edge.label.as_str(),
        }
    }
}

fn endpoint_string(endpoint: Option<StatusId>) -> String {
    endpoint.map(|id| id.to_string()).unwrap_or_default()
}

/// Encodes `graph` as a JSON value.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if encoding fails.
pub fn render_json(graph: &WorkflowGraph) -> Result<serde_json::Value, serde_json::Error> {
    let payload = JsonGraph {
        nodes: graph.nodes().iter().map(JsonNode::from).collect(),
        edges: graph.edges().iter().map(JsonEdge::from).collect(),
    };
    serde_json::to_value(payload)
}

/// Writes graphs as JSON to any writer, one document per render.
#[derive(Debug)]
pub struct JsonGraphRenderer<W> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonGraphRenderer<W> {
    /// Creates a renderer writing compact JSON.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Switches to indented output.
    #[must_use]
    pub const fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GraphRenderer for JsonGraphRenderer<W> {
    fn render(&mut self, graph: &WorkflowGraph) -> GraphRenderResult<()> {
        let value = render_json(graph)?;
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &value)?;
        } else {
            serde_json::to_writer(&mut self.writer, &value)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
