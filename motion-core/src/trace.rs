use crate::node::Node;
use crate::proximity::ProximityGraph;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: String,
    pub x: i64,
    pub y: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub id: String,
    pub from: String,
    pub to: String,
}

/// Snapshot of one tick: node positions followed by the proximity edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// 1-based tick number.
    pub n: u32,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Everything a run produces, in the order it is written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub width: i64,
    pub height: i64,
    pub generation_count: u32,
    pub generations: Vec<Generation>,
}

impl Generation {
    pub fn new(n: u32) -> Self {
        Self {
            n,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Records the current node positions and the proximity edges built
    /// from them. Edge ids are `e0`, `e1`, ... in edge order.
    pub fn capture(n: u32, nodes: &[Node], graph: &ProximityGraph) -> Self {
        let nodes_out = nodes
            .iter()
            .map(|node| NodeRecord {
                id: node.id.clone(),
                x: node.pos.x,
                y: node.pos.y,
            })
            .collect();

        let edges_out = graph
            .edges()
            .iter()
            .enumerate()
            .map(|(i, e)| EdgeRecord {
                id: format!("e{i}"),
                from: nodes[e.from].id.clone(),
                to: nodes[e.to].id.clone(),
            })
            .collect();

        Self {
            n,
            nodes: nodes_out,
            edges: edges_out,
        }
    }
}

impl Trace {
    /// Creates a trace with no recorded generations yet.
    ///
    /// `generation_count` is only the announced length; nothing is
    /// allocated for it, since it may come from an untrusted document.
    pub fn new(width: i64, height: i64, generation_count: u32) -> Self {
        Self {
            width,
            height,
            generation_count,
            generations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EDGE_RADIUS;
    use crate::types::Position;

    #[test]
    fn capture_labels_edges_by_tick_order() {
        let nodes = vec![
            Node::free("n1", Position::new(0, 0), Position::ZERO),
            Node::free("n2", Position::new(10, 0), Position::ZERO),
            Node::free("n3", Position::new(900, 0), Position::ZERO),
        ];
        let mut graph = ProximityGraph::default();
        graph.rebuild(&nodes, EDGE_RADIUS);

        let snapshot = Generation::capture(4, &nodes, &graph);

        assert_eq!(snapshot.n, 4);
        assert_eq!(snapshot.nodes.len(), 3);
        assert_eq!(
            snapshot.nodes[2],
            NodeRecord {
                id: "n3".into(),
                x: 900,
                y: 0
            }
        );
        assert_eq!(
            snapshot.edges,
            vec![
                EdgeRecord {
                    id: "e0".into(),
                    from: "n1".into(),
                    to: "n2".into()
                },
                EdgeRecord {
                    id: "e1".into(),
                    from: "n2".into(),
                    to: "n1".into()
                },
            ]
        );
    }
}
