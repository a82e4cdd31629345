use crate::node::Node;
use crate::types::{NodeId, within_range};

/// A directed proximity edge between two nodes of the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

/// A reusable buffer holding the proximity edges of one tick.
///
/// Edges are kept in discovery order; the index of an edge in
/// [`ProximityGraph::edges`] is its per-tick id. The buffer is rebuilt from
/// scratch every tick and only its allocation carries over.
#[derive(Debug, Default)]
pub struct ProximityGraph {
    edges: Vec<Edge>,
}

impl ProximityGraph {
    /// Drops all edges, keeping the allocation.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Recomputes the graph for the current node positions.
    ///
    /// Every ordered pair `(i, j)` with `i != j` and a distance of at most
    /// `radius` becomes an edge. Edges are ordered by source index, then by
    /// target index, so both `(i, j)` and `(j, i)` appear for a close pair.
    pub fn rebuild(&mut self, nodes: &[Node], radius: i64) {
        self.clear();

        for (i, a) in nodes.iter().enumerate() {
            for (j, b) in nodes.iter().enumerate() {
                if i != j && within_range(a.pos, b.pos, radius) {
                    self.edges.push(Edge { from: i, to: j });
                }
            }
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
