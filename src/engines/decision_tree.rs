//! Decision tree visualization engine.
//!
//! Builds a bounded binary tree as an arena of nodes with integer child
//! indices, then draws one question box per internal node, connector
//! edges, and class-colored leaf markers. Question text comes from a
//! fixed lookup keyed by level and horizontal position; leaf classes come
//! from the seeded generator keyed by node index, so nothing flickers
//! across re-renders.

use crate::params::TreeParams;
use crate::random::SeededRng;
use crate::scene::{Primitive, Scene, StyleClass, Theme};

/// Rendering depth cap for question levels; deeper trees get a caption
/// noting the unrendered levels.
pub const RENDER_CAP: u32 = 5;

const ROOT_X: f32 = 200.0;
const ROOT_Y: f32 = 20.0;
const ROOT_HALF_WIDTH: f32 = 160.0;
const LEVEL_DY: f32 = 55.0;
const WIDTH_SHRINK: f32 = 2.2;

/// One arena node. Children are arena indices, not owned boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// 1-based level; leaves sit one past the deepest question level
    pub level: u32,
    /// Canvas x
    pub x: f32,
    /// Canvas y
    pub y: f32,
    /// Question text; `None` for leaves
    pub question: Option<&'static str>,
    /// Arena indices of the left and right children
    pub children: [Option<usize>; 2],
    /// Leaf class; `None` for question nodes
    pub outcome: Option<bool>,
}

impl TreeNode {
    /// True for terminal nodes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Arena-allocated tree; index 0 is the root.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeArena {
    /// Nodes in creation (breadth-first) order
    pub nodes: Vec<TreeNode>,
    /// Depth actually rendered: `min(max_depth, RENDER_CAP)`
    pub effective_depth: u32,
}

impl TreeArena {
    /// Number of question (internal) nodes.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_leaf()).count()
    }

    /// Number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
}

/// Fixed clinical question lookup by level and horizontal bucket.
#[must_use]
pub fn question(level: u32, x: f32) -> &'static str {
    match level {
        1 => "EF < 38%?",
        2 if x < ROOT_X => "Age > 70?",
        2 => "Creatinine > 1.2?",
        3 => "BP > 140/90?",
        4 => "Diabetes?",
        _ => "Med. History?",
    }
}

/// Builds the arena for a (pre-clamped) max depth. Question nodes fill
/// levels `1..=effective_depth`; each deepest question node gets two leaf
/// children whose class is drawn from the generator keyed by their arena
/// index.
#[must_use]
pub fn build(params: &TreeParams, seed: u64) -> TreeArena {
    let effective_depth = params.max_depth.min(RENDER_CAP);
    let mut nodes: Vec<TreeNode> = vec![TreeNode {
        level: 1,
        x: ROOT_X,
        y: ROOT_Y,
        question: Some(question(1, ROOT_X)),
        children: [None, None],
        outcome: None,
    }];

    // Breadth-first expansion over arena indices; no recursion.
    let mut cursor = 0;
    let mut half_width = ROOT_HALF_WIDTH;
    let mut level_end = 1;
    while cursor < nodes.len() {
        let (level, x, y) = {
            let n = &nodes[cursor];
            (n.level, n.x, n.y)
        };
        if level > effective_depth {
            cursor += 1;
            continue;
        }

        let child_level = level + 1;
        let child_y = y + LEVEL_DY;
        let offset = half_width / 2.0;
        let is_leaf_level = level == effective_depth;

        for (slot, child_x) in [(0, x - offset), (1, x + offset)] {
            let idx = nodes.len();
            let outcome = if is_leaf_level {
                let mut rng = SeededRng::derive(seed, idx as u64);
                Some(rng.next_bool(0.5))
            } else {
                None
            };
            nodes.push(TreeNode {
                level: child_level,
                x: child_x,
                y: child_y,
                question: if is_leaf_level {
                    None
                } else {
                    Some(question(child_level, child_x))
                },
                children: [None, None],
                outcome,
            });
            nodes[cursor].children[slot] = Some(idx);
        }

        cursor += 1;
        if cursor == level_end {
            // Finished a level: halve the horizontal spread.
            half_width /= WIDTH_SHRINK;
            level_end = nodes.len();
        }
    }

    TreeArena {
        nodes,
        effective_depth,
    }
}

/// Builds the decision tree scene from pre-clamped parameters.
#[must_use]
pub fn scene(params: &TreeParams, seed: u64, theme: Theme) -> Scene {
    let arena = build(params, seed);
    let mut scene = Scene::new(theme);

    // Edges first so boxes draw over them.
    for node in &arena.nodes {
        for child_idx in node.children.into_iter().flatten() {
            let child = &arena.nodes[child_idx];
            scene.push(Primitive::Line {
                x1: node.x,
                y1: node.y + 12.0,
                x2: child.x,
                y2: child.y - 12.0,
                dash: false,
                class: StyleClass::Edge,
            });
        }
    }

    for node in &arena.nodes {
        if let Some(text) = node.question {
            scene.push(Primitive::Polygon {
                points: vec![
                    (node.x - 40.0, node.y - 14.0),
                    (node.x + 40.0, node.y - 14.0),
                    (node.x + 40.0, node.y + 14.0),
                    (node.x - 40.0, node.y + 14.0),
                ],
                class: StyleClass::NodeBox,
            });
            scene.push(Primitive::Label {
                x: node.x,
                y: node.y + 4.0,
                text: text.to_string(),
                class: StyleClass::Annotation,
            });
        } else {
            let class = if node.outcome == Some(true) {
                StyleClass::Positive
            } else {
                StyleClass::Negative
            };
            scene.push(Primitive::Point {
                x: node.x,
                y: node.y,
                r: 5.0,
                class,
            });
        }
    }

    if params.max_depth > RENDER_CAP {
        scene.push(Primitive::Label {
            x: 200.0,
            y: 280.0,
            text: format!("... and {} more levels depth", params.max_depth - RENDER_CAP),
            class: StyleClass::Annotation,
        });
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_counts_depth_three() {
        let arena = build(&TreeParams { max_depth: 3 }, 654);
        assert_eq!(arena.effective_depth, 3);
        assert_eq!(arena.question_count(), 7); // 2^3 - 1
        assert_eq!(arena.leaf_count(), 8); // 2^3
    }

    #[test]
    fn test_node_counts_all_depths() {
        for depth in 1..=10u32 {
            let arena = build(&TreeParams { max_depth: depth }, 654);
            let d = depth.min(RENDER_CAP);
            assert_eq!(arena.question_count(), (1 << d) - 1, "depth {depth}");
            assert_eq!(arena.leaf_count(), 1 << d, "depth {depth}");
        }
    }

    #[test]
    fn test_render_cap_bounds_tree() {
        let shallow = build(&TreeParams { max_depth: 5 }, 654);
        let deep = build(&TreeParams { max_depth: 10 }, 654);
        assert_eq!(shallow.nodes.len(), deep.nodes.len());
    }

    #[test]
    fn test_children_offsets_halve() {
        let arena = build(&TreeParams { max_depth: 3 }, 654);
        let root = &arena.nodes[0];
        let [left, right] = root.children.map(|i| &arena.nodes[i.expect("root children")]);
        assert_eq!(left.x, 200.0 - 80.0);
        assert_eq!(right.x, 200.0 + 80.0);
        assert_eq!(left.y, ROOT_Y + LEVEL_DY);

        // Next level spreads by half_width / 2.2 / 2.
        let [ll, _] = left.children.map(|i| &arena.nodes[i.expect("level-2 children")]);
        let expected_offset = (ROOT_HALF_WIDTH / WIDTH_SHRINK) / 2.0;
        assert!((ll.x - (left.x - expected_offset)).abs() < 1e-4);
    }

    #[test]
    fn test_question_lookup() {
        assert_eq!(question(1, 200.0), "EF < 38%?");
        assert_eq!(question(2, 120.0), "Age > 70?");
        assert_eq!(question(2, 280.0), "Creatinine > 1.2?");
        assert_eq!(question(3, 100.0), "BP > 140/90?");
        assert_eq!(question(4, 100.0), "Diabetes?");
        assert_eq!(question(5, 100.0), "Med. History?");
    }

    #[test]
    fn test_leaf_classes_stable_across_builds() {
        let a = build(&TreeParams { max_depth: 4 }, 654);
        let b = build(&TreeParams { max_depth: 4 }, 654);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overflow_caption_only_past_cap() {
        let capped = scene(&TreeParams { max_depth: 7 }, 654, Theme::Dark);
        let caption = capped.primitives.iter().any(|p| {
            matches!(p, Primitive::Label { text, .. } if text.contains("2 more levels"))
        });
        assert!(caption);

        let within = scene(&TreeParams { max_depth: 4 }, 654, Theme::Dark);
        let stray = within.primitives.iter().any(|p| {
            matches!(p, Primitive::Label { text, .. } if text.contains("more levels"))
        });
        assert!(!stray);
    }

    #[test]
    fn test_scene_leaf_markers_match_leaf_count() {
        let s = scene(&TreeParams { max_depth: 3 }, 654, Theme::Light);
        assert_eq!(s.point_count(), 8);
        // One edge into every non-root node.
        let arena = build(&TreeParams { max_depth: 3 }, 654);
        assert_eq!(s.line_count(), arena.nodes.len() - 1);
    }
}
