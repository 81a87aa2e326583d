//! Scene primitives: the renderer-agnostic output of every engine.
//!
//! A [`Scene`] is an ordered list of drawable primitives (points, disks,
//! lines, curves, polygons, labels). Scenes are value objects: rebuilt in
//! full on every recomputation, never mutated in place, and safe to hand
//! to any external rendering surface. The surface maps primitives to
//! vector graphics and resolves [`StyleClass`] to concrete colors via
//! [`palette::color`].
//!
//! Geometry never depends on [`Theme`]; the theme flag travels on the
//! scene purely so renderers can pick the matching palette.
//!
//! # Examples
//!
//! ```
//! use mostrar::scene::{Curve, PathSeg, Primitive, Scene, StyleClass, Theme};
//!
//! let mut scene = Scene::new(Theme::Dark);
//! scene.push(Primitive::Curve(Curve {
//!     path: vec![PathSeg::MoveTo(40.0, 260.0), PathSeg::LineTo(360.0, 40.0)],
//!     dash: false,
//!     class: StyleClass::Boundary,
//! }));
//! assert_eq!(scene.primitives.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Style-only theme flag. Affects color resolution, never geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Light chrome
    Light,
    /// Dark chrome
    Dark,
}

/// Semantic style class attached to each primitive.
///
/// Classes name roles, not colors; [`palette::color`] maps a class and a
/// theme to a concrete color for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleClass {
    /// Positive-class marker (condition present), full strength
    Positive,
    /// Negative-class marker, full strength
    Negative,
    /// Positive-class marker, dimmed
    PositiveMuted,
    /// Negative-class marker, dimmed
    NegativeMuted,
    /// The query/target marker (KNN center rings)
    Target,
    /// KNN neighborhood search disk
    SearchDisk,
    /// Decision boundary or fitted curve
    Boundary,
    /// Margin band around a boundary
    Margin,
    /// Tree/aggregator node box
    NodeBox,
    /// Structural connector (tree edges)
    Edge,
    /// Background shading (probability gradient band)
    Surface,
    /// Axis line
    Axis,
    /// Highlight: thresholds, support-vector rings, overlap markers
    Emphasis,
    /// Caption text
    Annotation,
}

/// One segment of a curve path. Typed form of an SVG path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSeg {
    /// Move pen to (x, y)
    MoveTo(f32, f32),
    /// Straight segment to (x, y)
    LineTo(f32, f32),
    /// Quadratic segment via one control point
    QuadTo(f32, f32, f32, f32),
    /// Cubic segment via two control points
    CubicTo(f32, f32, f32, f32, f32, f32),
}

/// A multi-segment curve (boundary, margin, sigmoid, bell).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Path segments in draw order
    pub path: Vec<PathSeg>,
    /// Dashed stroke
    pub dash: bool,
    /// Style class
    pub class: StyleClass,
}

impl Curve {
    /// Renders the path as an SVG `d` attribute string, which is what the
    /// external surface ultimately draws.
    ///
    /// # Examples
    ///
    /// ```
    /// use mostrar::scene::{Curve, PathSeg, StyleClass};
    ///
    /// let curve = Curve {
    ///     path: vec![PathSeg::MoveTo(40.0, 180.0), PathSeg::QuadTo(200.0, 280.0, 360.0, 40.0)],
    ///     dash: false,
    ///     class: StyleClass::Boundary,
    /// };
    /// assert_eq!(curve.to_path_data(), "M 40 180 Q 200 280 360 40");
    /// ```
    #[must_use]
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        for seg in &self.path {
            if !out.is_empty() {
                out.push(' ');
            }
            match *seg {
                PathSeg::MoveTo(x, y) => {
                    out.push_str(&format!("M {x} {y}"));
                }
                PathSeg::LineTo(x, y) => {
                    out.push_str(&format!("L {x} {y}"));
                }
                PathSeg::QuadTo(cx, cy, x, y) => {
                    out.push_str(&format!("Q {cx} {cy} {x} {y}"));
                }
                PathSeg::CubicTo(c1x, c1y, c2x, c2y, x, y) => {
                    out.push_str(&format!("C {c1x} {c1y}, {c2x} {c2y}, {x} {y}"));
                }
            }
        }
        out
    }
}

/// A drawable primitive. Scenes are ordered sequences of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Data-point marker
    Point {
        /// Center x
        x: f32,
        /// Center y
        y: f32,
        /// Marker radius
        r: f32,
        /// Style class
        class: StyleClass,
    },
    /// Filled/outlined circle that is not a data point (search disk,
    /// target rings, vote halos, overlap markers)
    Disk {
        /// Center x
        cx: f32,
        /// Center y
        cy: f32,
        /// Radius
        r: f32,
        /// Style class
        class: StyleClass,
    },
    /// Straight line segment
    Line {
        /// Start x
        x1: f32,
        /// Start y
        y1: f32,
        /// End x
        x2: f32,
        /// End y
        y2: f32,
        /// Dashed stroke
        dash: bool,
        /// Style class
        class: StyleClass,
    },
    /// Multi-segment curve
    Curve(Curve),
    /// Closed polygon
    Polygon {
        /// Vertices in draw order
        points: Vec<(f32, f32)>,
        /// Style class
        class: StyleClass,
    },
    /// Text caption
    Label {
        /// Anchor x
        x: f32,
        /// Anchor y
        y: f32,
        /// Caption text
        text: String,
        /// Style class
        class: StyleClass,
    },
}

/// Ordered list of primitives plus the style-only theme flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Theme forwarded from the caller; style-only
    pub theme: Theme,
    /// Primitives in draw order
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Creates an empty scene for a theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            primitives: Vec::new(),
        }
    }

    /// The placeholder returned for an unknown model identifier.
    #[must_use]
    pub fn empty(theme: Theme) -> Self {
        Self::new(theme)
    }

    /// Appends a primitive.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Number of `Point` primitives (data markers).
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Point { .. }))
            .count()
    }

    /// Number of `Line` primitives.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count()
    }

    /// Disks with the given style class.
    #[must_use]
    pub fn disks_with_class(&self, class: StyleClass) -> Vec<(f32, f32, f32)> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Disk { cx, cy, r, class: c } if *c == class => Some((*cx, *cy, *r)),
                _ => None,
            })
            .collect()
    }

    /// True when the scene holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

pub mod palette {
    //! Color resolution for the rendering surface.
    //!
    //! The one place the theme flag matters. Colors follow the original
    //! chrome: rose for positive/risk, emerald for negative/safe, indigo
    //! for boundaries and the query target, amber for emphasis.

    use super::{StyleClass, Theme};

    /// Resolves a style class under a theme to a hex color.
    #[must_use]
    pub fn color(class: StyleClass, theme: Theme) -> &'static str {
        match (class, theme) {
            (StyleClass::Positive, _) => "#f43f5e",
            (StyleClass::Negative, _) => "#34d399",
            (StyleClass::PositiveMuted, Theme::Light) => "#fda4af",
            (StyleClass::PositiveMuted, Theme::Dark) => "#9f1239",
            (StyleClass::NegativeMuted, Theme::Light) => "#6ee7b7",
            (StyleClass::NegativeMuted, Theme::Dark) => "#065f46",
            (StyleClass::Target, Theme::Light) => "#4f46e5",
            (StyleClass::Target, Theme::Dark) => "#818cf8",
            (StyleClass::SearchDisk, Theme::Light) => "#6366f1",
            (StyleClass::SearchDisk, Theme::Dark) => "#818cf8",
            (StyleClass::Boundary, Theme::Light) => "#4f46e5",
            (StyleClass::Boundary, Theme::Dark) => "#818cf8",
            (StyleClass::Margin, Theme::Light) => "#818cf8",
            (StyleClass::Margin, Theme::Dark) => "#a5b4fc",
            (StyleClass::NodeBox, Theme::Light) => "#ffffff",
            (StyleClass::NodeBox, Theme::Dark) => "#1e293b",
            (StyleClass::Edge, Theme::Light) => "#cbd5e1",
            (StyleClass::Edge, Theme::Dark) => "#475569",
            (StyleClass::Surface, Theme::Light) => "#e2e8f0",
            (StyleClass::Surface, Theme::Dark) => "#334155",
            (StyleClass::Axis, Theme::Light) => "#cbd5e1",
            (StyleClass::Axis, Theme::Dark) => "#475569",
            (StyleClass::Emphasis, _) => "#fbbf24",
            (StyleClass::Annotation, Theme::Light) => "#64748b",
            (StyleClass::Annotation, Theme::Dark) => "#94a3b8",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_starts_empty() {
        let scene = Scene::new(Theme::Light);
        assert!(scene.is_empty());
        assert_eq!(scene.point_count(), 0);
        assert_eq!(scene.line_count(), 0);
    }

    #[test]
    fn test_path_data_cubic() {
        let curve = Curve {
            path: vec![
                PathSeg::MoveTo(40.0, 200.0),
                PathSeg::CubicTo(150.0, 50.0, 250.0, 50.0, 360.0, 200.0),
            ],
            dash: false,
            class: StyleClass::Boundary,
        };
        assert_eq!(curve.to_path_data(), "M 40 200 C 150 50, 250 50, 360 200");
    }

    #[test]
    fn test_counting_helpers() {
        let mut scene = Scene::new(Theme::Dark);
        scene.push(Primitive::Point {
            x: 1.0,
            y: 2.0,
            r: 3.0,
            class: StyleClass::Positive,
        });
        scene.push(Primitive::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
            dash: true,
            class: StyleClass::Edge,
        });
        scene.push(Primitive::Disk {
            cx: 200.0,
            cy: 150.0,
            r: 20.0,
            class: StyleClass::SearchDisk,
        });
        assert_eq!(scene.point_count(), 1);
        assert_eq!(scene.line_count(), 1);
        assert_eq!(
            scene.disks_with_class(StyleClass::SearchDisk),
            vec![(200.0, 150.0, 20.0)]
        );
    }

    #[test]
    fn test_scene_serde_round_trip() {
        let mut scene = Scene::new(Theme::Dark);
        scene.push(Primitive::Label {
            x: 200.0,
            y: 30.0,
            text: "100 TREES VOTING".to_string(),
            class: StyleClass::Annotation,
        });
        let json = serde_json::to_string(&scene).expect("serialize");
        let back: Scene = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(scene, back);
    }

    #[test]
    fn test_palette_distinguishes_themes() {
        assert_ne!(
            palette::color(StyleClass::Boundary, Theme::Light),
            palette::color(StyleClass::Boundary, Theme::Dark)
        );
        // Class colors stay put across themes where the original did.
        assert_eq!(
            palette::color(StyleClass::Positive, Theme::Light),
            palette::color(StyleClass::Positive, Theme::Dark)
        );
    }
}
