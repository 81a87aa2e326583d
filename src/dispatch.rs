//! Dispatcher: model selection to scene.
//!
//! [`Visualizer`] owns the cloud cache and the per-family seeds, parses
//! the UI-facing model identifier, clamps the relevant parameter variant,
//! and hands off to the matching engine via an exhaustive `match`. An
//! unknown identifier yields an empty placeholder scene, never an error.
//!
//! # Examples
//!
//! ```
//! use mostrar::dispatch::Visualizer;
//! use mostrar::params::ParamsByModel;
//! use mostrar::scene::Theme;
//!
//! let mut viz = Visualizer::new();
//! let params = ParamsByModel::default();
//!
//! let scene = viz.render("knn", &params, Theme::Dark);
//! assert_eq!(scene.point_count(), 40);
//!
//! let placeholder = viz.render("gradient-boosting", &params, Theme::Dark);
//! assert!(placeholder.is_empty());
//! ```

use crate::cloud::CloudCache;
use crate::engines::{decision_tree, knn, logistic, naive_bayes, random_forest, svm};
use crate::params::{ModelFamily, ModelParams, ParamsByModel};
use crate::scene::{Scene, Theme};
use std::collections::HashMap;

/// Fixed default seed per family. Not user-configurable in the walkthrough;
/// [`Visualizer::with_seed`] exists for hosts that embed several instances.
#[must_use]
pub fn default_seed(family: ModelFamily) -> u64 {
    match family {
        ModelFamily::Knn => 123,
        ModelFamily::Svm => 456,
        ModelFamily::Logistic => 789,
        ModelFamily::DecisionTree => 654,
        ModelFamily::RandomForest => 321,
        ModelFamily::NaiveBayes => 987,
    }
}

/// Stateful entry point: cloud cache plus seed overrides.
///
/// Rendering is idempotent: for a fixed `(family, seed, params)` tuple the
/// output scene is identical regardless of call order or count.
#[derive(Debug, Default)]
pub struct Visualizer {
    cache: CloudCache,
    seed_overrides: HashMap<ModelFamily, u64>,
}

impl Visualizer {
    /// Creates a visualizer with the default per-family seeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the seed for one family.
    #[must_use]
    pub fn with_seed(mut self, family: ModelFamily, seed: u64) -> Self {
        self.seed_overrides.insert(family, seed);
        self
    }

    fn seed(&self, family: ModelFamily) -> u64 {
        self.seed_overrides
            .get(&family)
            .copied()
            .unwrap_or_else(|| default_seed(family))
    }

    /// Renders the scene for a UI model identifier. Unknown identifiers
    /// produce an empty placeholder scene (non-fatal).
    pub fn render(&mut self, model_id: &str, params: &ParamsByModel, theme: Theme) -> Scene {
        match ModelFamily::parse(model_id) {
            Some(family) => self.render_params(&params.select(family), theme),
            None => Scene::empty(theme),
        }
    }

    /// Renders the scene for a typed parameter variant. Out-of-range
    /// values are clamped, never rejected.
    pub fn render_params(&mut self, params: &ModelParams, theme: Theme) -> Scene {
        match params {
            ModelParams::Knn(p) => {
                let seed = self.seed(ModelFamily::Knn);
                let cloud = self.cache.get_or_build(ModelFamily::Knn, seed);
                knn::scene(&p.clamped(), cloud, theme)
            }
            ModelParams::Svm(p) => {
                let seed = self.seed(ModelFamily::Svm);
                let cloud = self.cache.get_or_build(ModelFamily::Svm, seed);
                svm::scene(&p.clamped(), cloud, theme)
            }
            ModelParams::Logistic(p) => {
                logistic::scene(&p.clamped(), self.seed(ModelFamily::Logistic), theme)
            }
            ModelParams::DecisionTree(p) => {
                decision_tree::scene(&p.clamped(), self.seed(ModelFamily::DecisionTree), theme)
            }
            ModelParams::RandomForest(p) => {
                random_forest::scene(&p.clamped(), self.seed(ModelFamily::RandomForest), theme)
            }
            ModelParams::NaiveBayes(p) => naive_bayes::scene(&p.clamped(), theme),
        }
    }
}
