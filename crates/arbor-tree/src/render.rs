//! Graph views handed to the external renderer.
//!
//! The renderer draws labeled nodes and edges; the core only supplies
//! traversal order plus parent/child (and in-order neighbor) relations.
//! Labels come from a caller-supplied closure, so payloads don't need
//! `Display`.

use serde::{Deserialize, Serialize};

use crate::traverse::{breadth_first, in_order};
use crate::types::{get_l, get_r, Node};

/// How an edge should be drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Parent to left child.
    Left,
    /// Parent to right child.
    Right,
    /// In-order neighbor link, drawn invisibly to force a horizontal layout.
    Invisible,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

/// Nodes in traversal order plus the edges connecting them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

/// Top-to-bottom view: nodes in breadth-first order, one labeled edge per
/// child link.
pub(crate) fn layered<N, F>(arena: &[N], root: Option<u32>, label: F) -> GraphView
where
    N: Node,
    F: Fn(&N) -> String,
{
    let mut view = GraphView::default();
    for i in breadth_first(arena, root) {
        view.nodes.push(label(&arena[i as usize]));
        if let Some(l) = get_l(arena, i) {
            view.edges.push(Edge {
                from: label(&arena[i as usize]),
                to: label(&arena[l as usize]),
                kind: EdgeKind::Left,
            });
        }
        if let Some(r) = get_r(arena, i) {
            view.edges.push(Edge {
                from: label(&arena[i as usize]),
                to: label(&arena[r as usize]),
                kind: EdgeKind::Right,
            });
        }
    }
    view
}

/// Left-to-right view: nodes in in-order, an invisible chain between
/// in-order neighbors, then the child edges.
pub(crate) fn lined<N, F>(arena: &[N], root: Option<u32>, label: F) -> GraphView
where
    N: Node,
    F: Fn(&N) -> String,
{
    let order: Vec<u32> = in_order(arena, root).collect();

    let mut view = GraphView::default();
    for &i in &order {
        view.nodes.push(label(&arena[i as usize]));
    }
    for pair in order.windows(2) {
        view.edges.push(Edge {
            from: label(&arena[pair[0] as usize]),
            to: label(&arena[pair[1] as usize]),
            kind: EdgeKind::Invisible,
        });
    }
    for &i in &order {
        if let Some(l) = get_l(arena, i) {
            view.edges.push(Edge {
                from: label(&arena[i as usize]),
                to: label(&arena[l as usize]),
                kind: EdgeKind::Left,
            });
        }
        if let Some(r) = get_r(arena, i) {
            view.edges.push(Edge {
                from: label(&arena[i as usize]),
                to: label(&arena[r as usize]),
                kind: EdgeKind::Right,
            });
        }
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::PlainNode;

    fn label(n: &PlainNode<u32>) -> String {
        n.value.to_string()
    }

    // 1 at the root, 2 on its left, 3 on its right
    fn sample() -> Vec<PlainNode<u32>> {
        let mut arena: Vec<PlainNode<u32>> = (1..=3).map(PlainNode::new).collect();
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena
    }

    #[test]
    fn layered_lists_levels_and_child_edges() {
        let view = layered(&sample(), Some(0), label);
        assert_eq!(view.nodes, vec!["1", "2", "3"]);
        assert_eq!(
            view.edges,
            vec![
                Edge {
                    from: "1".into(),
                    to: "2".into(),
                    kind: EdgeKind::Left
                },
                Edge {
                    from: "1".into(),
                    to: "3".into(),
                    kind: EdgeKind::Right
                },
            ]
        );
    }

    #[test]
    fn lined_chains_in_order_neighbors() {
        let view = lined(&sample(), Some(0), label);
        assert_eq!(view.nodes, vec!["2", "1", "3"]);
        assert_eq!(
            view.edges,
            vec![
                Edge {
                    from: "2".into(),
                    to: "1".into(),
                    kind: EdgeKind::Invisible
                },
                Edge {
                    from: "1".into(),
                    to: "3".into(),
                    kind: EdgeKind::Invisible
                },
                Edge {
                    from: "1".into(),
                    to: "2".into(),
                    kind: EdgeKind::Left
                },
                Edge {
                    from: "1".into(),
                    to: "3".into(),
                    kind: EdgeKind::Right
                },
            ]
        );
    }

    #[test]
    fn empty_root_renders_empty_view() {
        let arena: Vec<PlainNode<u32>> = Vec::new();
        assert_eq!(layered(&arena, None, label), GraphView::default());
        assert_eq!(lined(&arena, None, label), GraphView::default());
    }

    #[test]
    fn view_serializes_for_the_renderer() {
        let view = layered(&sample(), Some(0), label);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": ["1", "2", "3"],
                "edges": [
                    { "from": "1", "to": "2", "kind": "left" },
                    { "from": "1", "to": "3", "kind": "right" },
                ],
            })
        );
    }
}
