//! Graph data derived from a workflow definition.
//!
//! Nodes and edges carry structure only. Layout (node positions) belongs to
//! whatever draws the graph.

use super::{Status, StatusId, Task, Transition, TransitionId, WorkflowDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeLabel {
    /// At least one task gates the transition.
    #[serde(rename = "Tasks Required")]
    TasksRequired,
    /// Nothing gates the transition.
    #[serde(rename = "Direct Move")]
    DirectMove,
}

impl EdgeLabel {
    /// Picks the label for a transition.
    #[must_use]
    pub fn for_transition(transition: &Transition) -> Self {
        if transition.is_gated() {
            Self::TasksRequired
        } else {
            Self::DirectMove
        }
    }

    /// Returns the display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TasksRequired => "Tasks Required",
            Self::DirectMove => "Direct Move",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node per status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Status the node stands for.
    pub id: StatusId,
    /// Status name, a newline, then the comma-joined task names.
    pub label: String,
}

impl GraphNode {
    /// Builds the node for `status`.
    #[must_use]
    pub fn for_status(status: &Status) -> Self {
        Self {
            id: status.id(),
            label: node_label(status),
        }
    }
}

/// One edge per transition.
///
/// Endpoints are copied as stored, so an edge may reference a status that
/// has no node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Transition the edge stands for.
    pub id: TransitionId,
    /// Source status, if chosen.
    pub source: Option<StatusId>,
    /// Target status, if chosen.
    pub target: Option<StatusId>,
    /// Whether tasks gate the move.
    pub label: EdgeLabel,
}

impl GraphEdge {
    /// Builds the edge for `transition`.
    #[must_use]
    pub fn for_transition(transition: &Transition) -> Self {
        Self {
            id: transition.id(),
            source: transition.from(),
            target: transition.to(),
            label: EdgeLabel::for_transition(transition),
        }
    }
}

/// Nodes and edges of a workflow, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl WorkflowGraph {
    /// Derives the graph of `definition`.
    #[must_use]
    pub fn from_definition(definition: &WorkflowDefinition) -> Self {
        Self {
            nodes: definition
                .statuses()
                .iter()
                .map(GraphNode::for_status)
                .collect(),
            edges: definition
                .transitions()
                .iter()
                .map(GraphEdge::for_transition)
                .collect(),
        }
    }

    /// Returns the nodes.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Returns the edges.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Looks up the node for a status.
    #[must_use]
    pub fn node(&self, id: StatusId) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Looks up the edge for a transition.
    #[must_use]
    pub fn edge(&self, id: TransitionId) -> Option<&GraphEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }
}

/// Formats a node label: `"{name}\n{task, task, ...}"`.
///
/// The newline is present even when the status has no tasks.
#[must_use]
pub fn node_label(status: &Status) -> String {
    let task_names: Vec<&str> = status.tasks().iter().map(Task::name).collect();
    format!("{}\n{}", status.name(), task_names.join(", "))
}
