//! Synthetic point cloud builder and its per-family cache.
//!
//! "Synthetic patients": fixed-size sets of labeled 2D points scattered
//! over the canvas, drawn entirely from the [`SeededRng`] stream so the
//! same `(seed, count, bias)` always yields element-wise identical output.
//! Clouds are built lazily, cached by `(family, seed)`, and never
//! invalidated by hyperparameter changes within a family — changing `k`
//! or the distance metric re-reads the same points.
//!
//! # Examples
//!
//! ```
//! use mostrar::cloud::build;
//!
//! let a = build(123, 40, 0.5);
//! let b = build(123, 40, 0.5);
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 40);
//! ```

use crate::params::ModelFamily;
use crate::random::SeededRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canvas width the scenes are laid out on.
pub const CANVAS_W: f32 = 400.0;
/// Canvas height the scenes are laid out on.
pub const CANVAS_H: f32 = 300.0;

// Spawn region: x in [40, 360), y in [40, 260).
const X_MIN: f32 = 40.0;
const X_SPAN: f32 = 320.0;
const Y_MIN: f32 = 40.0;
const Y_SPAN: f32 = 220.0;

/// A labeled synthetic 2D point.
///
/// Family-specific derived values (distance, boundary side, probability)
/// are computed per recomputation by the engines and never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticPoint {
    /// Stable index within the cloud; tie-breaker for ordering
    pub id: usize,
    /// Canvas x
    pub x: f32,
    /// Canvas y
    pub y: f32,
    /// Class label (true = positive / condition present)
    pub label: bool,
}

/// Builds `count` points from `seed`. Per point the draw order is
/// x, y, label; `label = draw > bias`, so bias 0.5 gives an even split
/// and bias 0.4 leans positive.
#[must_use]
pub fn build(seed: u64, count: usize, bias: f64) -> Vec<SyntheticPoint> {
    let mut rng = SeededRng::new(seed);
    (0..count)
        .map(|id| {
            let x = X_MIN + rng.next_f32() * X_SPAN;
            let y = Y_MIN + rng.next_f32() * Y_SPAN;
            let label = rng.next_bool(bias);
            SyntheticPoint { id, x, y, label }
        })
        .collect()
}

/// Cloud size for families that scatter a shared cloud. Logistic
/// regression builds its own axis strip; decision tree and random forest
/// draw no cloud at all.
#[must_use]
pub fn cloud_size(family: ModelFamily) -> Option<usize> {
    match family {
        ModelFamily::Knn => Some(40),
        ModelFamily::Svm => Some(35),
        ModelFamily::Logistic
        | ModelFamily::DecisionTree
        | ModelFamily::RandomForest
        | ModelFamily::NaiveBayes => None,
    }
}

/// Lazily built, never-invalidated cloud store keyed by `(family, seed)`.
///
/// Read-only once built: engines receive a shared slice and enrich copies
/// with their derived fields.
#[derive(Debug, Default)]
pub struct CloudCache {
    clouds: HashMap<(ModelFamily, u64), Vec<SyntheticPoint>>,
}

impl CloudCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cloud for `(family, seed)`, building it on first use.
    /// The label bias is even (0.5) for all shared clouds.
    pub fn get_or_build(&mut self, family: ModelFamily, seed: u64) -> &[SyntheticPoint] {
        let count = cloud_size(family).unwrap_or(0);
        self.clouds
            .entry((family, seed))
            .or_insert_with(|| build(seed, count, 0.5))
    }

    /// Number of clouds built so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    /// True when no cloud has been built yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        for seed in [1u64, 123, 456, u64::MAX] {
            for count in [0usize, 1, 35, 40] {
                assert_eq!(build(seed, count, 0.5), build(seed, count, 0.5));
            }
        }
    }

    #[test]
    fn test_points_inside_spawn_region() {
        for p in build(123, 40, 0.5) {
            assert!(p.x >= 40.0 && p.x < 360.0, "x out of region: {}", p.x);
            assert!(p.y >= 40.0 && p.y < 260.0, "y out of region: {}", p.y);
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let cloud = build(456, 35, 0.5);
        for (i, p) in cloud.iter().enumerate() {
            assert_eq!(p.id, i);
        }
    }

    #[test]
    fn test_even_bias_splits_labels() {
        let cloud = build(789, 1000, 0.5);
        let positives = cloud.iter().filter(|p| p.label).count();
        assert!(positives > 400 && positives < 600);
    }

    #[test]
    fn test_cache_builds_once_per_key() {
        let mut cache = CloudCache::new();
        assert!(cache.is_empty());

        let first = cache.get_or_build(ModelFamily::Knn, 123).to_vec();
        let again = cache.get_or_build(ModelFamily::Knn, 123).to_vec();
        assert_eq!(first, again);
        assert_eq!(cache.len(), 1);

        cache.get_or_build(ModelFamily::Svm, 456);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_family_sizes() {
        assert_eq!(cloud_size(ModelFamily::Knn), Some(40));
        assert_eq!(cloud_size(ModelFamily::Svm), Some(35));
        assert_eq!(cloud_size(ModelFamily::RandomForest), None);
    }
}
