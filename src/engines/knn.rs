//! K-Nearest Neighbors visualization engine.
//!
//! Ranks the cached cloud by distance to a fixed query point, takes the
//! first `k` as neighbors, and draws the search disk, the connector lines,
//! and the full cloud with non-neighbors dimmed. Changing the metric
//! re-sorts the same cached points; the cloud is never regenerated.

use crate::cloud::SyntheticPoint;
use crate::params::{KnnParams, Metric};
use crate::scene::{Primitive, Scene, StyleClass, Theme};

/// Fixed query point ("target patient").
pub const CENTER: (f32, f32) = (200.0, 150.0);

/// Margin added to the k-th neighbor distance for the search disk.
const DISK_MARGIN: f32 = 5.0;

/// Disk radius when no neighbor is selected.
const EMPTY_DISK_RADIUS: f32 = 20.0;

/// A cloud point enriched with its distance to the query point.
/// Recomputed on every render; never written back to the cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPoint {
    /// The underlying cloud point
    pub point: SyntheticPoint,
    /// Distance to [`CENTER`] under the active metric
    pub distance: f32,
}

/// Distance from a point to the query point under the given metric.
#[must_use]
pub fn distance_to_center(point: &SyntheticPoint, metric: Metric) -> f32 {
    let dx = point.x - CENTER.0;
    let dy = point.y - CENTER.1;
    match metric {
        Metric::Euclidean => (dx * dx + dy * dy).sqrt(),
        Metric::Manhattan => dx.abs() + dy.abs(),
    }
}

/// Ranks the cloud by ascending distance, ties broken by point id.
/// The sort is total and stable, so the ordering is reproducible.
#[must_use]
pub fn rank(cloud: &[SyntheticPoint], metric: Metric) -> Vec<RankedPoint> {
    let mut ranked: Vec<RankedPoint> = cloud
        .iter()
        .map(|p| RankedPoint {
            point: *p,
            distance: distance_to_center(p, metric),
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.point.id.cmp(&b.point.id))
    });
    ranked
}

/// Search disk radius: k-th neighbor distance plus a fixed margin, or a
/// fixed fallback when `k` selects nothing.
#[must_use]
pub fn disk_radius(neighbors: &[RankedPoint]) -> f32 {
    neighbors
        .last()
        .map_or(EMPTY_DISK_RADIUS, |n| n.distance + DISK_MARGIN)
}

/// Builds the KNN scene. `params` is expected pre-clamped to the declared
/// range; `k` is additionally capped at the cloud size here.
#[must_use]
pub fn scene(params: &KnnParams, cloud: &[SyntheticPoint], theme: Theme) -> Scene {
    let ranked = rank(cloud, params.metric);
    let k = (params.k as usize).min(ranked.len());
    let neighbors = &ranked[..k];
    let radius = disk_radius(neighbors);
    let dashed = params.metric == Metric::Manhattan;

    let mut scene = Scene::new(theme);

    scene.push(Primitive::Disk {
        cx: CENTER.0,
        cy: CENTER.1,
        r: radius,
        class: StyleClass::SearchDisk,
    });

    for n in neighbors {
        let class = if n.point.label {
            StyleClass::PositiveMuted
        } else {
            StyleClass::NegativeMuted
        };
        scene.push(Primitive::Line {
            x1: CENTER.0,
            y1: CENTER.1,
            x2: n.point.x,
            y2: n.point.y,
            dash: dashed,
            class,
        });
    }

    for (rank_idx, r) in ranked.iter().enumerate() {
        let selected = rank_idx < k;
        let class = match (r.point.label, selected) {
            (true, true) => StyleClass::Positive,
            (false, true) => StyleClass::Negative,
            (true, false) => StyleClass::PositiveMuted,
            (false, false) => StyleClass::NegativeMuted,
        };
        scene.push(Primitive::Point {
            x: r.point.x,
            y: r.point.y,
            r: if selected { 5.0 } else { 3.0 },
            class,
        });
    }

    // Target patient: outer ring and inner dot.
    scene.push(Primitive::Disk {
        cx: CENTER.0,
        cy: CENTER.1,
        r: 8.0,
        class: StyleClass::Target,
    });
    scene.push(Primitive::Disk {
        cx: CENTER.0,
        cy: CENTER.1,
        r: 4.0,
        class: StyleClass::Target,
    });
    scene.push(Primitive::Label {
        x: CENTER.0 + 15.0,
        y: CENTER.1 - 15.0,
        text: "TARGET MATCHING...".to_string(),
        class: StyleClass::Annotation,
    });

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud;

    fn test_cloud() -> Vec<SyntheticPoint> {
        cloud::build(123, 40, 0.5)
    }

    #[test]
    fn test_euclidean_rank_matches_brute_force() {
        let pts = test_cloud();
        let ranked = rank(&pts, Metric::Euclidean);

        let mut expected: Vec<(f32, usize)> = pts
            .iter()
            .map(|p| {
                let dx = p.x - 200.0;
                let dy = p.y - 150.0;
                ((dx * dx + dy * dy).sqrt(), p.id)
            })
            .collect();
        expected.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let top5: Vec<usize> = ranked.iter().take(5).map(|r| r.point.id).collect();
        let expected5: Vec<usize> = expected.iter().take(5).map(|e| e.1).collect();
        assert_eq!(top5, expected5);

        for w in ranked.windows(2) {
            assert!(w[0].distance <= w[1].distance);
        }
    }

    #[test]
    fn test_metric_change_keeps_cloud_intact() {
        let pts = test_cloud();
        let euclid = rank(&pts, Metric::Euclidean);
        let manhattan = rank(&pts, Metric::Manhattan);

        // Same 40 points either way, only the ordering may differ.
        let mut ids_a: Vec<usize> = euclid.iter().map(|r| r.point.id).collect();
        let mut ids_b: Vec<usize> = manhattan.iter().map(|r| r.point.id).collect();
        ids_a.sort_unstable();
        ids_b.sort_unstable();
        assert_eq!(ids_a, ids_b);

        for r in &manhattan {
            let original = pts[r.point.id];
            assert_eq!(r.point.x, original.x);
            assert_eq!(r.point.y, original.y);
            assert_eq!(r.point.label, original.label);
        }
    }

    #[test]
    fn test_disk_radius_is_kth_distance_plus_margin() {
        let pts = test_cloud();
        let ranked = rank(&pts, Metric::Euclidean);
        let neighbors = &ranked[..3];
        assert_eq!(disk_radius(neighbors), neighbors[2].distance + 5.0);
        assert_eq!(disk_radius(&[]), 20.0);
    }

    #[test]
    fn test_scene_counts() {
        let pts = test_cloud();
        let params = KnnParams {
            k: 3,
            metric: Metric::Euclidean,
        };
        let s = scene(&params, &pts, Theme::Dark);
        assert_eq!(s.point_count(), 40);
        assert_eq!(s.line_count(), 3);
        assert_eq!(s.disks_with_class(StyleClass::SearchDisk).len(), 1);
    }

    #[test]
    fn test_k_capped_at_cloud_size() {
        let pts = cloud::build(123, 2, 0.5);
        let params = KnnParams {
            k: 25,
            metric: Metric::Euclidean,
        };
        let s = scene(&params, &pts, Theme::Light);
        assert_eq!(s.line_count(), 2);
    }

    #[test]
    fn test_manhattan_connectors_are_dashed() {
        let pts = test_cloud();
        let params = KnnParams {
            k: 4,
            metric: Metric::Manhattan,
        };
        let s = scene(&params, &pts, Theme::Dark);
        for p in &s.primitives {
            if let Primitive::Line { dash, .. } = p {
                assert!(*dash);
            }
        }
    }
}
