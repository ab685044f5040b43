/*!
A proof as a graph, written in the Graphviz DOT language.

Nodes are the clauses of the proof, and each resolution adds an edge from each premise to the resolvent.
Edges are labelled with the count of the resolution, from 1, in the order resolutions are made when checking the proof.
*/

use std::collections::HashMap;

use petgraph::{
    dot::Dot,
    graph::{Graph, NodeIndex},
    Direction,
};

use crate::structures::clause::Clause;

/// A proof, as a directed graph from premises to resolvents.
pub struct ProofGraph {
    graph: Graph<String, usize>,
    conclusion: NodeIndex,
}

fn label(clause: &Clause) -> String {
    match clause {
        Clause::Axiom(_) | Clause::Derived(_) if clause.is_empty() => "⊥".to_string(),
        Clause::Axiom(_) | Clause::Derived(_) => clause.as_string(),
        Clause::Assumption(_) => format!("{}?", clause.as_string()),
    }
}

impl ProofGraph {
    /// The graph of the proof of `clause`.
    pub fn from_proof(clause: &Clause) -> Self {
        let mut graph = Graph::<String, usize>::new();
        let mut nodes: HashMap<usize, NodeIndex> = HashMap::default();
        let mut resolution_counter = 0;
        let mut conclusion = None;

        for node in clause.postorder() {
            let index = graph.add_node(label(&node));
            nodes.insert(node.id(), index);
            conclusion = Some(index);

            if let Some((a, b)) = node.premises() {
                resolution_counter += 1;
                for premise in [a, b] {
                    if let Some(premise_index) = nodes.get(&premise.id()) {
                        graph.add_edge(*premise_index, index, resolution_counter);
                    }
                }
            }
        }

        let conclusion = match conclusion {
            Some(index) => index,
            None => graph.add_node(label(clause)),
        };

        ProofGraph { graph, conclusion }
    }

    /// The count of clauses in the proof.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The count of premise to resolvent edges in the proof.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The labels of the clauses with no premises, in order of addition to the graph.
    pub fn leaves(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|index| {
                self.graph
                    .neighbors_directed(*index, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|index| self.graph[index].as_str())
            .collect()
    }

    /// The label of the conclusion of the proof.
    pub fn conclusion(&self) -> &str {
        self.graph[self.conclusion].as_str()
    }

    /// The graph in the DOT language.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::new(&self.graph))
    }
}
