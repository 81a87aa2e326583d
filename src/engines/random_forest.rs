//! Random forest visualization engine.
//!
//! Arranges vote dots on an ellipse around a central aggregator, each dot
//! carrying a positively biased vote from the seeded generator, and tallies
//! them into a majority decision. The logical ensemble size can exceed the
//! rendered dot count; the tally always runs over the rendered dots.

use crate::params::ForestParams;
use crate::random::SeededRng;
use crate::scene::{Primitive, Scene, StyleClass, Theme};
use std::f32::consts::TAU;

/// Cap on rendered vote dots.
pub const MAX_DOTS: usize = 60;

/// Vote bias threshold: draws above it are positive (~60%).
const VOTE_BIAS: f64 = 0.4;

/// Aggregator center.
const AGGREGATOR: (f32, f32) = (200.0, 150.0);

/// One rendered ensemble member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoteDot {
    /// Stable index
    pub id: usize,
    /// Canvas x
    pub x: f32,
    /// Canvas y
    pub y: f32,
    /// Vote (true = positive)
    pub vote: bool,
}

/// Aggregated tally over the rendered dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Positive votes
    pub pos: usize,
    /// Negative votes
    pub neg: usize,
}

impl Tally {
    /// Majority decision; positive wins ties.
    #[must_use]
    pub fn decision(&self) -> bool {
        self.pos >= self.neg
    }

    /// Positive share as a rounded percentage.
    #[must_use]
    pub fn pos_percent(&self) -> u32 {
        let total = (self.pos + self.neg).max(1);
        ((self.pos as f64 / total as f64) * 100.0).round() as u32
    }

    /// Negative share as a rounded percentage.
    #[must_use]
    pub fn neg_percent(&self) -> u32 {
        let total = (self.pos + self.neg).max(1);
        ((self.neg as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Builds the rendered dots for a (pre-clamped) ensemble size: exactly
/// `min(trees, 60)`, no padding. Two generator draws per dot (radius,
/// vote), so the layout depends only on `(trees, seed)`.
#[must_use]
pub fn build_dots(params: &ForestParams, seed: u64) -> Vec<VoteDot> {
    let count = (params.trees as usize).min(MAX_DOTS);
    let mut rng = SeededRng::new(seed);
    (0..count)
        .map(|id| {
            let angle = (id as f32 / count as f32) * TAU;
            let radius = 90.0 + rng.next_f32() * 30.0;
            let vote = rng.next_bool(VOTE_BIAS);
            VoteDot {
                id,
                x: AGGREGATOR.0 + angle.cos() * radius,
                // Flattened vertically into an ellipse.
                y: AGGREGATOR.1 + angle.sin() * radius * 0.6,
                vote,
            }
        })
        .collect()
}

/// Tallies votes over the rendered dots.
#[must_use]
pub fn tally(dots: &[VoteDot]) -> Tally {
    let pos = dots.iter().filter(|d| d.vote).count();
    Tally {
        pos,
        neg: dots.len() - pos,
    }
}

/// Builds the random forest scene from pre-clamped parameters.
#[must_use]
pub fn scene(params: &ForestParams, seed: u64, theme: Theme) -> Scene {
    let dots = build_dots(params, seed);
    let result = tally(&dots);
    let decision_class = if result.decision() {
        StyleClass::Positive
    } else {
        StyleClass::Negative
    };

    let mut scene = Scene::new(theme);

    for d in &dots {
        scene.push(Primitive::Line {
            x1: d.x,
            y1: d.y,
            x2: AGGREGATOR.0,
            y2: AGGREGATOR.1,
            dash: true,
            class: if d.vote {
                StyleClass::PositiveMuted
            } else {
                StyleClass::NegativeMuted
            },
        });
    }

    for d in &dots {
        let (core, halo) = if d.vote {
            (StyleClass::Positive, StyleClass::PositiveMuted)
        } else {
            (StyleClass::Negative, StyleClass::NegativeMuted)
        };
        scene.push(Primitive::Disk {
            cx: d.x,
            cy: d.y,
            r: 4.0,
            class: core,
        });
        scene.push(Primitive::Disk {
            cx: d.x,
            cy: d.y,
            r: 8.0,
            class: halo,
        });
    }

    scene.push(Primitive::Polygon {
        points: vec![
            (140.0, 110.0),
            (260.0, 110.0),
            (260.0, 190.0),
            (140.0, 190.0),
        ],
        class: decision_class,
    });
    scene.push(Primitive::Label {
        x: 200.0,
        y: 135.0,
        text: "ENSEMBLE".to_string(),
        class: StyleClass::Annotation,
    });
    scene.push(Primitive::Label {
        x: 200.0,
        y: 155.0,
        text: format!("Yes: {}%", result.pos_percent()),
        class: StyleClass::Positive,
    });
    scene.push(Primitive::Label {
        x: 200.0,
        y: 170.0,
        text: format!("No: {}%", result.neg_percent()),
        class: StyleClass::Negative,
    });
    scene.push(Primitive::Label {
        x: 200.0,
        y: 30.0,
        text: format!("{} TREES VOTING", params.trees),
        class: StyleClass::Annotation,
    });

    scene
}
