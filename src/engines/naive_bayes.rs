//! Naive Bayes visualization engine.
//!
//! Two fixed-center Gaussian-like bells whose width follows the smoothing
//! parameter on a log scale: less smoothing draws tighter distributions.
//! The overlap anchor between the bells marks the prior-probability
//! ambiguity region. No randomness is involved; the scene is a pure
//! function of the smoothing value.

use crate::params::BayesParams;
use crate::scene::{Curve, PathSeg, Primitive, Scene, StyleClass, Theme};

/// Spread bounds in canvas units.
const SPREAD_MIN: f64 = 20.0;
const SPREAD_MAX: f64 = 100.0;

/// Baseline y of both bells and of the axis.
const BASELINE_Y: f32 = 250.0;

/// Visual spread width for a (pre-clamped) smoothing value:
/// `clamp(50 + (log10(s) + 9) * 15, 20, 100)`. Monotone non-decreasing in
/// `s`, so tighter smoothing means tighter bells.
#[must_use]
pub fn spread(smoothing: f64) -> f32 {
    (50.0 + (smoothing.log10() + 9.0) * 15.0).clamp(SPREAD_MIN, SPREAD_MAX) as f32
}

/// Bell path centered at `(cx, cy)` with half-width `w`, feet on the
/// baseline at `cx - 2w` and `cx + 2w`.
#[must_use]
pub fn bell_path(cx: f32, cy: f32, w: f32) -> Vec<PathSeg> {
    vec![
        PathSeg::MoveTo(cx - w * 2.0, BASELINE_Y),
        PathSeg::CubicTo(cx - w, BASELINE_Y, cx - w * 0.5, cy, cx, cy),
        PathSeg::CubicTo(cx + w * 0.5, cy, cx + w, BASELINE_Y, cx + w * 2.0, BASELINE_Y),
    ]
}

/// Builds the Naive Bayes scene from pre-clamped parameters.
#[must_use]
pub fn scene(params: &BayesParams, theme: Theme) -> Scene {
    let w = spread(params.smoothing);
    let anchor_y = BASELINE_Y - w;

    let mut scene = Scene::new(theme);

    scene.push(Primitive::Line {
        x1: 20.0,
        y1: BASELINE_Y,
        x2: 380.0,
        y2: BASELINE_Y,
        dash: false,
        class: StyleClass::Axis,
    });

    scene.push(Primitive::Curve(Curve {
        path: bell_path(150.0, 80.0, w),
        dash: false,
        class: StyleClass::Negative,
    }));
    // Second class drawn slightly wider and lower-peaked.
    scene.push(Primitive::Curve(Curve {
        path: bell_path(250.0, 100.0, w * 1.2),
        dash: false,
        class: StyleClass::Positive,
    }));

    scene.push(Primitive::Line {
        x1: 200.0,
        y1: BASELINE_Y,
        x2: 200.0,
        y2: anchor_y,
        dash: true,
        class: StyleClass::Emphasis,
    });
    scene.push(Primitive::Disk {
        cx: 200.0,
        cy: anchor_y,
        r: 5.0,
        class: StyleClass::Emphasis,
    });
    scene.push(Primitive::Label {
        x: 210.0,
        y: anchor_y - 10.0,
        text: "Overlap Area (Prior Prob.)".to_string(),
        class: StyleClass::Emphasis,
    });

    scene.push(Primitive::Label {
        x: 150.0,
        y: 60.0,
        text: "Condition A".to_string(),
        class: StyleClass::Negative,
    });
    scene.push(Primitive::Label {
        x: 250.0,
        y: 80.0,
        text: "Condition B".to_string(),
        class: StyleClass::Positive,
    });

    scene
}
