//! Radial mind map generation
//!
//! The generator is a pure function from `(summary markdown, topic rows)`
//! to a finished node/edge graph. Headings from the summary form an inner
//! ring around the canvas center, topics form an outer ring, and every node
//! leaves here with its final coordinate. Identical inputs always produce
//! identical output, so a freshly computed graph can be compared against a
//! previously persisted one.
//!
//! # Layout
//!
//! ```text
//!                 [root]
//!            /      |      \
//!      [heading] [heading] [heading]     inner ring, radius 300
//!        /    \      |
//!   [topic] [topic] [topic]              outer ring, radius 500
//! ```
//!
//! Topics attach to headings round-robin by index (`j mod N`), not by any
//! geometric or semantic closeness. With no headings at all, topics hang
//! directly off the root.

use crate::models::{MindMapEdge, MindMapGraph, MindMapNode, Position, Topic};
use crate::utils::extract_headings;
use std::f64::consts::TAU;

/// Label of the root hub node
pub const ROOT_LABEL: &str = "Summary";

/// Fixed anchor for the root node, near the top-center of the canvas
const ROOT_POSITION: Position = Position { x: 400.0, y: 50.0 };

/// Center of both rings
const CENTER: Position = Position { x: 400.0, y: 300.0 };

/// Radius of the heading ring
const HEADING_RADIUS: f64 = 300.0;

/// Radius of the topic ring (strictly outside the heading ring)
const TOPIC_RADIUS: f64 = 500.0;

/// Build the complete mind map graph for a summary
///
/// Runs the heading extractor over `summary_text`, then lays out one root
/// node, one heading node per extracted heading, and one topic node per
/// topic row. Node order is root, headings, topics; edge order mirrors it.
///
/// There are no error conditions: empty text and/or an empty topic list
/// degrade to smaller graphs, down to a root-only graph.
///
/// # Examples
///
/// ```
/// use tubemind_core::layout::generate_mind_map;
/// use tubemind_core::models::Topic;
///
/// let topics = vec![Topic::new("summary-1", "caching")];
/// let graph = generate_mind_map("## Intro\n\nSome text\n", &topics);
///
/// // root + 1 heading + 1 topic
/// assert_eq!(graph.nodes.len(), 3);
/// assert_eq!(graph.edges.len(), 2);
/// ```
pub fn generate_mind_map(summary_text: &str, topics: &[Topic]) -> MindMapGraph {
    let headings = extract_headings(summary_text);

    let mut nodes = Vec::with_capacity(1 + headings.len() + topics.len());
    let mut edges = Vec::with_capacity(headings.len() + topics.len());

    nodes.push(MindMapNode::root(ROOT_LABEL, ROOT_POSITION));

    for (index, heading) in headings.iter().enumerate() {
        let position = ring_position(index, headings.len(), HEADING_RADIUS);
        nodes.push(MindMapNode::heading(
            index,
            heading.text.clone(),
            heading.level,
            position,
        ));
        edges.push(MindMapEdge::plain(
            MindMapNode::ROOT_ID,
            MindMapNode::heading_id(index),
        ));
    }

    for (index, topic) in topics.iter().enumerate() {
        let position = ring_position(index, topics.len(), TOPIC_RADIUS);
        nodes.push(MindMapNode::topic(index, topic.topic.clone(), position));

        // Round-robin across headings; straight to the root when the
        // summary produced none.
        let edge = if headings.is_empty() {
            MindMapEdge::curved(MindMapNode::ROOT_ID, MindMapNode::topic_id(index))
        } else {
            MindMapEdge::curved(
                MindMapNode::heading_id(index % headings.len()),
                MindMapNode::topic_id(index),
            )
        };
        edges.push(edge);
    }

    MindMapGraph { nodes, edges }
}

/// Coordinate of ring slot `index` out of `count`, measured from CENTER
///
/// Slots are spread evenly over the full circle starting at angle 0
/// (due east). Callers never pass `count = 0`.
fn ring_position(index: usize, count: usize, radius: f64) -> Position {
    let angle = index as f64 / count as f64 * TAU;
    Position {
        x: CENTER.x + radius * angle.cos(),
        y: CENTER.y + radius * angle.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EdgeStyle, NodeKind};
    use std::collections::HashSet;

    fn topics(labels: &[&str]) -> Vec<Topic> {
        labels
            .iter()
            .map(|label| Topic::new("summary-1", *label))
            .collect()
    }

    #[test]
    fn test_scenario_two_headings_one_topic() {
        let graph = generate_mind_map(
            "## Intro\n\nSome text\n\n### Details\n",
            &topics(&["caching"]),
        );

        let labels: Vec<(&str, NodeKind)> = graph
            .nodes
            .iter()
            .map(|n| (n.label.as_str(), n.kind))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Summary", NodeKind::Root),
                ("Intro", NodeKind::Heading),
                ("Details", NodeKind::Heading),
                ("caching", NodeKind::Topic),
            ]
        );
        assert_eq!(graph.nodes[1].level, Some(2));
        assert_eq!(graph.nodes[2].level, Some(3));

        let pairs: Vec<(&str, &str)> = graph
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("root", "heading-0"),
                ("root", "heading-1"),
                // topic 0 attaches to heading[0 mod 2]
                ("heading-0", "topic-0"),
            ]
        );
        assert_eq!(graph.edges[0].style, EdgeStyle::Plain);
        assert_eq!(graph.edges[2].style, EdgeStyle::Curved);
    }

    #[test]
    fn test_no_headings_topics_hang_off_root() {
        let graph = generate_mind_map("plain text with no headings", &topics(&["A", "B"]));

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.nodes[0].id, "root");
        assert_eq!(graph.nodes[1].id, "topic-0");
        assert_eq!(graph.nodes[2].id, "topic-1");

        assert_eq!(graph.edges.len(), 2);
        for edge in &graph.edges {
            assert_eq!(edge.source, "root");
            assert_eq!(edge.style, EdgeStyle::Curved);
        }
    }

    #[test]
    fn test_round_robin_topic_assignment() {
        let graph = generate_mind_map(
            "## One\n\n## Two\n",
            &topics(&["t0", "t1", "t2", "t3", "t4"]),
        );

        let sources: Vec<&str> = graph
            .edges
            .iter()
            .filter(|e| e.target.starts_with("topic-"))
            .map(|e| e.source.as_str())
            .collect();
        assert_eq!(
            sources,
            vec!["heading-0", "heading-1", "heading-0", "heading-1", "heading-0"]
        );
    }

    #[test]
    fn test_deterministic_output() {
        let text = "## Intro\n\n### Details\n\n## Wrap-up\n";
        let topic_rows = topics(&["caching", "databases", "search"]);

        let first = generate_mind_map(text, &topic_rows);
        let second = generate_mind_map(text, &topic_rows);

        assert_eq!(first, second);
    }

    #[test]
    fn test_ids_unique() {
        let graph = generate_mind_map(
            "## A\n## B\n## A\n### C\n",
            &topics(&["x", "y", "z", "x", "y"]),
        );

        let node_ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(node_ids.len(), graph.nodes.len());

        let edge_ids: HashSet<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(edge_ids.len(), graph.edges.len());
    }

    #[test]
    fn test_empty_inputs_root_only() {
        let graph = generate_mind_map("", &[]);

        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].id, "root");
        assert_eq!(graph.nodes[0].label, ROOT_LABEL);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_root_anchor_and_first_ring_slot() {
        let graph = generate_mind_map("## Only\n", &topics(&["solo"]));

        // Root sits at the fixed top-center anchor
        assert_eq!(graph.nodes[0].position, Position { x: 400.0, y: 50.0 });

        // First heading sits at angle 0 on the inner ring
        let heading = &graph.nodes[1];
        assert!((heading.position.x - 700.0).abs() < 1e-9);
        assert!((heading.position.y - 300.0).abs() < 1e-9);

        // First topic sits at angle 0 on the outer ring
        let topic = &graph.nodes[2];
        assert!((topic.position.x - 900.0).abs() < 1e-9);
        assert!((topic.position.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_heading_wired_to_root() {
        let graph = generate_mind_map("## A\n### B\n### C\n## D\n", &[]);

        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.edges.len(), 4);
        for (index, edge) in graph.edges.iter().enumerate() {
            assert_eq!(edge.source, "root");
            assert_eq!(edge.target, MindMapNode::heading_id(index));
            assert_eq!(edge.style, EdgeStyle::Plain);
        }
    }

    #[test]
    fn test_duplicate_headings_get_distinct_nodes() {
        let graph = generate_mind_map("## Same\n## Same\n", &[]);

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.nodes[1].label, "Same");
        assert_eq!(graph.nodes[2].label, "Same");
        assert_ne!(graph.nodes[1].id, graph.nodes[2].id);
    }
}
