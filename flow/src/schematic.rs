//! Schematic - Static View of the Question Graph
//!
//! `Schematic` is the node/edge representation of the question graph.
//! It is used for visualization, documentation, and verification
//! (the graph must stay acyclic).

use crate::question::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

pub const START_NODE: &str = "start";
pub const CALCULATE_NODE: &str = "calculate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Schematic {
    pub name: String,
    pub description: Option<String>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Ingress,  // Interview start
    Question, // Yes/no decision
    Egress,   // Ready to calculate
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: Option<String>, // "Yes", "No", or the entry condition
}

impl Schematic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build the schematic of the full question graph.
    pub fn question_graph() -> Self {
        let mut schematic = Schematic::new("Intestacy Questions");
        schematic.description =
            Some("Yes/no questions in order of entitlement under intestacy rules".to_string());

        schematic.nodes.push(Node {
            id: START_NODE.to_string(),
            kind: NodeKind::Ingress,
            label: "Marital status".to_string(),
        });
        for id in QuestionId::ALL {
            schematic.nodes.push(Node {
                id: id.as_str().to_string(),
                kind: NodeKind::Question,
                label: id.text().to_string(),
            });
        }
        schematic.nodes.push(Node {
            id: CALCULATE_NODE.to_string(),
            kind: NodeKind::Egress,
            label: "Calculate distribution".to_string(),
        });

        schematic.link(START_NODE, QuestionId::Married.as_str(), "Status unknown");
        schematic.link(START_NODE, QuestionId::Children.as_str(), "Status known");

        for id in QuestionId::ALL {
            for (answer, label) in [(true, "Yes"), (false, "No")] {
                let to = id.next(answer).map_or(CALCULATE_NODE, |next| next.as_str());
                schematic.link(id.as_str(), to, label);
            }
        }

        schematic
    }

    fn link(&mut self, from: &str, to: &str, label: &str) {
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            label: Some(label.to_string()),
        });
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Node ids in topological order, or `None` if the edges contain a cycle.
    pub fn topological_order(&self) -> Option<Vec<String>> {
        let mut in_degree: BTreeMap<&str, usize> =
            self.nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
        for edge in &self.edges {
            *in_degree.entry(edge.to.as_str()).or_default() += 1;
        }

        let mut ready: VecDeque<&str> = self
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| in_degree.get(id) == Some(&0))
            .collect();
        let mut order = Vec::with_capacity(in_degree.len());

        while let Some(id) = ready.pop_front() {
            order.push(id.to_string());
            for edge in self.edges.iter().filter(|e| e.from == id) {
                if let Some(degree) = in_degree.get_mut(edge.to.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(edge.to.as_str());
                    }
                }
            }
        }

        (order.len() == in_degree.len()).then_some(order)
    }
}
