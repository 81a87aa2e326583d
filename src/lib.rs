//! Mostrar: deterministic scene engine for classical ML model visualizations.
//!
//! For each of six model families (KNN, SVM, Logistic Regression, Decision
//! Tree, Random Forest, Naive Bayes), Mostrar turns a hyperparameter set
//! into a declarative geometric scene — points, curves, trees, boundaries —
//! that visually explains how that family behaves. Nothing is trained:
//! scenes are reproducible illustrations, not fitted models.
//!
//! Every source of randomness is a seeded generator keyed by fixed
//! per-family seeds, so a scene rebuilt for the same inputs is identical
//! across calls, processes, and re-renders; sliders can drive recomputation
//! on every tick without visual jitter.
//!
//! # Quick Start
//!
//! ```
//! use mostrar::prelude::*;
//!
//! let mut viz = Visualizer::new();
//! let mut params = ParamsByModel::default();
//! params.knn.k = 3;
//!
//! let scene = viz.render("knn", &params, Theme::Dark);
//! assert_eq!(scene.point_count(), 40); // the synthetic cloud
//! assert_eq!(scene.line_count(), 3);   // one connector per neighbor
//! ```
//!
//! # Modules
//!
//! - [`random`]: Seeded generator, the single entropy source
//! - [`cloud`]: Synthetic point clouds and their per-family cache
//! - [`params`]: Hyperparameter types, clamping, the family union
//! - [`scene`]: Scene primitives and style/theme resolution
//! - [`engines`]: The six per-family geometry engines
//! - [`dispatch`]: Model-identifier dispatch and the public entry point
//! - [`error`]: Error type for strict parameter construction

pub mod cloud;
pub mod dispatch;
pub mod engines;
pub mod error;
pub mod params;
pub mod prelude;
pub mod random;
pub mod scene;

pub use dispatch::Visualizer;
pub use error::{MostrarError, Result};
pub use scene::{Primitive, Scene, Theme};
