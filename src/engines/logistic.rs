//! Logistic regression visualization engine.
//!
//! Draws a sigmoid curve whose steepness grows with `c`, always passing
//! through the fixed decision-threshold point at probability 0.5, plus a
//! strip of synthetic cases spread along the x axis. Each case's label is
//! drawn by comparing a seeded value against its sigmoid probability, so
//! the strip is stable across re-renders.

use crate::params::LogisticParams;
use crate::random::SeededRng;
use crate::scene::{Curve, PathSeg, Primitive, Scene, StyleClass, Theme};

/// The fixed threshold point: x of the decision midpoint, y of p = 0.5.
pub const MIDPOINT: (f32, f32) = (200.0, 150.0);

/// Slope floor; `c -> 0` still yields a visible S-shape.
const MIN_SLOPE: f32 = 10.0;

/// Sigmoid steepness constant used for per-point probabilities.
const LOGIT_K: f32 = 0.05;

/// Number of cases on the x strip.
const STRIP_COUNT: usize = 40;

/// A synthetic case on the x strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripPoint {
    /// Stable index
    pub id: usize,
    /// Canvas x (jittered)
    pub x: f32,
    /// Sigmoid probability at `x`
    pub probability: f32,
    /// Label drawn against the probability
    pub label: bool,
}

/// Visual slope for a (pre-clamped) strictness: `max(10, c * 60)`.
#[must_use]
pub fn slope(c: f32) -> f32 {
    (c * 60.0).max(MIN_SLOPE)
}

/// Probability of the positive class at canvas position `x`.
#[must_use]
pub fn probability_at(x: f32) -> f32 {
    1.0 / (1.0 + (-LOGIT_K * (x - MIDPOINT.0)).exp())
}

/// The sigmoid path for a slope value. Both cubic halves meet at
/// [`MIDPOINT`], so the curve passes through the threshold exactly.
#[must_use]
pub fn sigmoid_path(slope: f32) -> Vec<PathSeg> {
    vec![
        PathSeg::MoveTo(20.0, 280.0),
        PathSeg::CubicTo(180.0, 280.0, MIDPOINT.0 - slope, 280.0, MIDPOINT.0, MIDPOINT.1),
        PathSeg::CubicTo(MIDPOINT.0 + slope, 20.0, 220.0, 20.0, 380.0, 20.0),
    ]
}

/// Builds the x strip: jittered positions and seeded labels. Two draws
/// per case (jitter, label), so the strip depends only on the seed.
#[must_use]
pub fn build_strip(seed: u64) -> Vec<StripPoint> {
    let mut rng = SeededRng::new(seed);
    (0..STRIP_COUNT)
        .map(|id| {
            let jitter = rng.next_f32() * 10.0 - 5.0;
            let x = 30.0 + (id as f32) * 340.0 / (STRIP_COUNT as f32) + jitter;
            let probability = probability_at(x);
            let label = rng.next_f64() < f64::from(probability);
            StripPoint {
                id,
                x,
                probability,
                label,
            }
        })
        .collect()
}

/// Marker y position: positives stack near the top edge, negatives near
/// the bottom, laddered by id so markers never overlap.
fn marker_y(p: &StripPoint) -> f32 {
    if p.label {
        20.0 + ((p.id % 10) as f32) * 2.0
    } else {
        270.0 - ((p.id % 10) as f32) * 2.0
    }
}

/// Builds the logistic regression scene from pre-clamped parameters.
#[must_use]
pub fn scene(params: &LogisticParams, seed: u64, theme: Theme) -> Scene {
    let strip = build_strip(seed);
    let k = slope(params.c);

    let mut scene = Scene::new(theme);

    scene.push(Primitive::Label {
        x: 375.0,
        y: 30.0,
        text: "P(y=1|x) = 1 / (1 + e^-z)".to_string(),
        class: StyleClass::Annotation,
    });

    // Axes: bottom (p = 0), top (p = 1), left.
    scene.push(Primitive::Line {
        x1: 20.0,
        y1: 280.0,
        x2: 380.0,
        y2: 280.0,
        dash: false,
        class: StyleClass::NegativeMuted,
    });
    scene.push(Primitive::Line {
        x1: 20.0,
        y1: 20.0,
        x2: 380.0,
        y2: 20.0,
        dash: false,
        class: StyleClass::PositiveMuted,
    });
    scene.push(Primitive::Line {
        x1: 20.0,
        y1: 20.0,
        x2: 20.0,
        y2: 280.0,
        dash: false,
        class: StyleClass::Axis,
    });
    scene.push(Primitive::Label {
        x: 25.0,
        y: 30.0,
        text: "1.0 Risk".to_string(),
        class: StyleClass::Positive,
    });
    scene.push(Primitive::Label {
        x: 25.0,
        y: 275.0,
        text: "0.0 Safe".to_string(),
        class: StyleClass::Negative,
    });

    // Probability gradient band over the whole plot area.
    scene.push(Primitive::Polygon {
        points: vec![(20.0, 280.0), (380.0, 280.0), (380.0, 20.0), (20.0, 20.0)],
        class: StyleClass::Surface,
    });

    // Decision threshold at p = 0.5.
    scene.push(Primitive::Line {
        x1: 20.0,
        y1: MIDPOINT.1,
        x2: 380.0,
        y2: MIDPOINT.1,
        dash: true,
        class: StyleClass::Emphasis,
    });
    scene.push(Primitive::Label {
        x: 375.0,
        y: 145.0,
        text: "DECISION THRESHOLD = 0.5".to_string(),
        class: StyleClass::Emphasis,
    });

    scene.push(Primitive::Curve(Curve {
        path: sigmoid_path(k),
        dash: false,
        class: StyleClass::Boundary,
    }));

    for p in &strip {
        let y = marker_y(p);
        let curve_y = 280.0 - p.probability * 260.0;
        let (full, muted) = if p.label {
            (StyleClass::Positive, StyleClass::PositiveMuted)
        } else {
            (StyleClass::Negative, StyleClass::NegativeMuted)
        };
        scene.push(Primitive::Line {
            x1: p.x,
            y1: y,
            x2: p.x,
            y2: curve_y,
            dash: true,
            class: muted,
        });
        scene.push(Primitive::Point {
            x: p.x,
            y,
            r: 4.5,
            class: full,
        });
    }

    scene.push(Primitive::Disk {
        cx: MIDPOINT.0,
        cy: MIDPOINT.1,
        r: 6.0,
        class: StyleClass::Emphasis,
    });

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_floor_and_growth() {
        assert_eq!(slope(0.01), 10.0);
        assert_eq!(slope(1.0), 60.0);
        assert_eq!(slope(5.0), 300.0);
        assert!(slope(5.0) >= slope(0.01));
    }

    #[test]
    fn test_sigmoid_passes_through_midpoint() {
        for c in [0.01_f32, 0.5, 1.0, 2.5, 5.0] {
            let path = sigmoid_path(slope(c));
            match path[1] {
                PathSeg::CubicTo(_, _, _, _, x, y) => {
                    assert_eq!((x, y), MIDPOINT);
                }
                ref seg => panic!("expected cubic to the midpoint, got {seg:?}"),
            }
        }
    }

    #[test]
    fn test_probability_at_midpoint_is_half() {
        assert!((probability_at(200.0) - 0.5).abs() < 1e-6);
        assert!(probability_at(380.0) > 0.99);
        assert!(probability_at(20.0) < 0.01);
    }

    #[test]
    fn test_strip_is_deterministic() {
        assert_eq!(build_strip(789), build_strip(789));
        assert_eq!(build_strip(789).len(), 40);
    }

    #[test]
    fn test_labels_follow_probability_tendency() {
        let strip = build_strip(789);
        // The sigmoid is steep over the strip, so positives concentrate on
        // the right half.
        let left_pos = strip.iter().filter(|p| p.x < 200.0 && p.label).count();
        let right_pos = strip.iter().filter(|p| p.x >= 200.0 && p.label).count();
        assert!(
            right_pos > left_pos,
            "expected positives on the right: left={left_pos} right={right_pos}"
        );
    }

    #[test]
    fn test_scene_counts() {
        let s = scene(&LogisticParams::default(), 789, Theme::Dark);
        assert_eq!(s.point_count(), 40);
        // 3 axes + 1 threshold + 40 connectors.
        assert_eq!(s.line_count(), 44);
    }

    #[test]
    fn test_scene_deterministic_across_calls() {
        let a = scene(&LogisticParams { c: 2.0 }, 789, Theme::Light);
        let b = scene(&LogisticParams { c: 2.0 }, 789, Theme::Light);
        assert_eq!(a, b);
    }
}
