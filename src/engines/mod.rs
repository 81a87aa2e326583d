//! Per-family geometry engines.
//!
//! Six mutually independent engines with the same contract: consume the
//! (optional) cached point cloud, the clamped hyperparameters for their
//! family, and a seed, and produce a declarative [`Scene`](crate::scene::Scene).
//! Every engine is a pure synchronous computation; identical inputs yield
//! identical scenes no matter how often or in what order they run.

pub mod decision_tree;
pub mod knn;
pub mod logistic;
pub mod naive_bayes;
pub mod random_forest;
pub mod svm;
