//! Support Vector Machine visualization engine.
//!
//! Draws a kernel-shaped decision boundary with a margin band whose width
//! varies inversely with the strictness `c`, classifies each cloud point
//! to a side of the boundary, and emphasizes the points falling inside
//! the band as support vectors.
//!
//! The side/support formulas are tuned for visual effect, not a real SVM
//! decision function; what holds is the qualitative behavior: support
//! vectors sit near the boundary and the margin shrinks as `c` grows.

use crate::cloud::SyntheticPoint;
use crate::params::{Kernel, SvmParams};
use crate::scene::{Curve, PathSeg, Primitive, Scene, StyleClass, Theme};
use std::f32::consts::PI;

/// Margin floor: even maximal strictness never collapses the band.
const MIN_MARGIN: f32 = 10.0;

/// Numerator of the inverse strictness-to-margin mapping.
const MARGIN_BASELINE: f32 = 80.0;

/// At most this many support-vector connector lines are drawn.
const MAX_SUPPORT_CONNECTORS: usize = 5;

/// Which side of the boundary a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Side with positive scalar value
    Above,
    /// Side with non-positive scalar value
    Below,
}

/// A cloud point enriched with its boundary-side classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidedPoint {
    /// The underlying cloud point
    pub point: SyntheticPoint,
    /// Side of the boundary
    pub side: Side,
    /// Falls within the margin band
    pub is_support: bool,
}

/// Margin width for a (pre-clamped) strictness value: `max(10, 80 / c)`.
#[must_use]
pub fn margin_width(c: f32) -> f32 {
    (MARGIN_BASELINE / c).max(MIN_MARGIN)
}

/// Boundary path shifted by `dy` (0 gives the boundary itself, ∓margin
/// the two band edges). Control points are fixed per kernel.
#[must_use]
pub fn boundary_path(kernel: Kernel, dy: f32) -> Vec<PathSeg> {
    match kernel {
        Kernel::Linear => vec![
            PathSeg::MoveTo(40.0, 260.0 + dy),
            PathSeg::LineTo(360.0, 40.0 + dy),
        ],
        Kernel::Poly => vec![
            PathSeg::MoveTo(40.0, 180.0 + dy),
            PathSeg::QuadTo(200.0, 280.0 + dy, 360.0, 40.0 + dy),
        ],
        Kernel::Rbf => vec![
            PathSeg::MoveTo(40.0, 200.0 + dy),
            PathSeg::CubicTo(150.0, 50.0 + dy, 250.0, 50.0 + dy, 360.0, 200.0 + dy),
        ],
    }
}

/// Kernel-specific scalar of a position relative to the boundary. Sign
/// gives the side; magnitude (scaled per kernel) gives band membership.
#[must_use]
pub fn side_value(kernel: Kernel, x: f32, y: f32) -> f32 {
    match kernel {
        Kernel::Linear => (x - 40.0) * (40.0 - 260.0) - (y - 260.0) * (360.0 - 40.0),
        Kernel::Poly => y - (180.0 + (x - 40.0) * (100.0 / 320.0)),
        Kernel::Rbf => y - (200.0 - 150.0 * (x * PI / 400.0).sin()),
    }
}

/// Band comparison scale: the linear scalar is a cross product in much
/// larger units than the path-offset scalars of the curved kernels.
fn band_scale(kernel: Kernel) -> f32 {
    match kernel {
        Kernel::Linear => 100.0,
        Kernel::Poly | Kernel::Rbf => 1.0,
    }
}

/// Classifies every cloud point against the boundary for this kernel and
/// margin. Recomputed per render; the cache stays untouched.
#[must_use]
pub fn classify(cloud: &[SyntheticPoint], kernel: Kernel, margin: f32) -> Vec<SidedPoint> {
    cloud
        .iter()
        .map(|p| {
            let val = side_value(kernel, p.x, p.y);
            SidedPoint {
                point: *p,
                side: if val > 0.0 { Side::Above } else { Side::Below },
                is_support: val.abs() < margin * band_scale(kernel),
            }
        })
        .collect()
}

/// Builds the SVM scene from pre-clamped parameters.
#[must_use]
pub fn scene(params: &SvmParams, cloud: &[SyntheticPoint], theme: Theme) -> Scene {
    let margin = margin_width(params.c);
    let sided = classify(cloud, params.kernel, margin);

    let mut scene = Scene::new(theme);

    scene.push(Primitive::Label {
        x: 20.0,
        y: 30.0,
        text: "f(x) = sign( Σ α_i y_i K(x_i, x) + b )".to_string(),
        class: StyleClass::Annotation,
    });

    scene.push(Primitive::Curve(Curve {
        path: boundary_path(params.kernel, 0.0),
        dash: false,
        class: StyleClass::Boundary,
    }));
    scene.push(Primitive::Curve(Curve {
        path: boundary_path(params.kernel, -margin),
        dash: true,
        class: StyleClass::Margin,
    }));
    scene.push(Primitive::Curve(Curve {
        path: boundary_path(params.kernel, margin),
        dash: true,
        class: StyleClass::Margin,
    }));

    // Short connectors from the first few support vectors toward the band.
    for sp in sided
        .iter()
        .filter(|sp| sp.is_support)
        .take(MAX_SUPPORT_CONNECTORS)
    {
        let toward = match sp.side {
            Side::Above => sp.point.y + margin / 2.0,
            Side::Below => sp.point.y - margin / 2.0,
        };
        scene.push(Primitive::Line {
            x1: sp.point.x,
            y1: sp.point.y,
            x2: sp.point.x,
            y2: toward,
            dash: true,
            class: StyleClass::Emphasis,
        });
    }

    for sp in &sided {
        if sp.is_support {
            scene.push(Primitive::Disk {
                cx: sp.point.x,
                cy: sp.point.y,
                r: 10.0,
                class: StyleClass::Emphasis,
            });
        }
        let class = match (sp.side, sp.is_support) {
            (Side::Above, true) => StyleClass::Negative,
            (Side::Below, true) => StyleClass::Positive,
            (Side::Above, false) => StyleClass::NegativeMuted,
            (Side::Below, false) => StyleClass::PositiveMuted,
        };
        scene.push(Primitive::Point {
            x: sp.point.x,
            y: sp.point.y,
            r: if sp.is_support { 5.0 } else { 3.5 },
            class,
        });
    }

    scene
}
