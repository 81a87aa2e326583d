//! Hyperparameter types for the six model families.
//!
//! Each family has a small parameter struct with a declared numeric range.
//! Two construction paths exist, mirroring the two callers:
//!
//! - the render path clamps silently via [`clamped`](KnnParams::clamped) —
//!   out-of-range slider input is corrected, never rejected;
//! - `try_new` validates strictly and returns
//!   [`InvalidHyperparameter`](crate::error::MostrarError::InvalidHyperparameter)
//!   for programmatic callers that want the error.
//!
//! [`ModelParams`] is the tagged union over all families; [`ParamsByModel`]
//! is the UI-shaped record holding one parameter set per family.

use crate::error::{MostrarError, Result};
use serde::{Deserialize, Serialize};

/// Model family identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFamily {
    /// K-Nearest Neighbors
    Knn,
    /// Support Vector Machine
    Svm,
    /// Logistic Regression
    Logistic,
    /// Decision Tree
    DecisionTree,
    /// Random Forest
    RandomForest,
    /// Gaussian Naive Bayes
    NaiveBayes,
}

impl ModelFamily {
    /// Parses the UI-facing identifier. Unknown identifiers return `None`;
    /// the dispatcher turns that into a placeholder scene rather than an
    /// error.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "knn" => Some(Self::Knn),
            "svm" => Some(Self::Svm),
            "lr" => Some(Self::Logistic),
            "dt" => Some(Self::DecisionTree),
            "rf" => Some(Self::RandomForest),
            "nb" => Some(Self::NaiveBayes),
            _ => None,
        }
    }

    /// Strict counterpart of [`parse`](Self::parse) for programmatic
    /// callers that want the error.
    pub fn from_id(id: &str) -> Result<Self> {
        Self::parse(id).ok_or_else(|| MostrarError::UnknownModel { id: id.to_string() })
    }

    /// The UI-facing identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Knn => "knn",
            Self::Svm => "svm",
            Self::Logistic => "lr",
            Self::DecisionTree => "dt",
            Self::RandomForest => "rf",
            Self::NaiveBayes => "nb",
        }
    }
}

/// Distance metric for KNN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// sqrt(dx^2 + dy^2)
    Euclidean,
    /// |dx| + |dy|
    Manhattan,
}

/// Kernel shape for SVM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kernel {
    /// Straight boundary
    Linear,
    /// Quadratic boundary
    Poly,
    /// Cubic (radial-looking) boundary
    Rbf,
}

/// KNN hyperparameters: neighbor count and distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnnParams {
    /// Neighbor count, 1..=25
    pub k: u32,
    /// Distance metric
    pub metric: Metric,
}

impl KnnParams {
    /// Valid range for `k`.
    pub const K_RANGE: (u32, u32) = (1, 25);

    /// Strict constructor: errors on out-of-range `k`.
    pub fn try_new(k: u32, metric: Metric) -> Result<Self> {
        if k < Self::K_RANGE.0 || k > Self::K_RANGE.1 {
            return Err(MostrarError::InvalidHyperparameter {
                param: "k".to_string(),
                value: k.to_string(),
                constraint: "1 <= k <= 25".to_string(),
            });
        }
        Ok(Self { k, metric })
    }

    /// Returns a copy with `k` clamped into range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            k: self.k.clamp(Self::K_RANGE.0, Self::K_RANGE.1),
            metric: self.metric,
        }
    }
}

impl Default for KnnParams {
    fn default() -> Self {
        Self {
            k: 5,
            metric: Metric::Euclidean,
        }
    }
}

/// SVM hyperparameters: strictness `c` and kernel shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvmParams {
    /// Strictness, 0.1..=10.0; margin width varies inversely
    pub c: f32,
    /// Kernel shape
    pub kernel: Kernel,
}

impl SvmParams {
    /// Valid range for `c`.
    pub const C_RANGE: (f32, f32) = (0.1, 10.0);

    /// Strict constructor: errors on out-of-range or non-finite `c`.
    pub fn try_new(c: f32, kernel: Kernel) -> Result<Self> {
        if !c.is_finite() || !(Self::C_RANGE.0..=Self::C_RANGE.1).contains(&c) {
            return Err(MostrarError::InvalidHyperparameter {
                param: "c".to_string(),
                value: c.to_string(),
                constraint: "0.1 <= c <= 10.0".to_string(),
            });
        }
        Ok(Self { c, kernel })
    }

    /// Returns a copy with `c` clamped into range. Non-finite values land
    /// on the lower bound.
    #[must_use]
    pub fn clamped(self) -> Self {
        let c = if self.c.is_finite() {
            self.c.clamp(Self::C_RANGE.0, Self::C_RANGE.1)
        } else {
            Self::C_RANGE.0
        };
        Self {
            c,
            kernel: self.kernel,
        }
    }
}

impl Default for SvmParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            kernel: Kernel::Rbf,
        }
    }
}

/// Logistic regression hyperparameter: regularization-like strictness `c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    /// Strictness, 0.01..=5.0; sigmoid slope grows with it
    pub c: f32,
}

impl LogisticParams {
    /// Valid range for `c`.
    pub const C_RANGE: (f32, f32) = (0.01, 5.0);

    /// Strict constructor: errors on out-of-range or non-finite `c`.
    pub fn try_new(c: f32) -> Result<Self> {
        if !c.is_finite() || !(Self::C_RANGE.0..=Self::C_RANGE.1).contains(&c) {
            return Err(MostrarError::InvalidHyperparameter {
                param: "c".to_string(),
                value: c.to_string(),
                constraint: "0.01 <= c <= 5.0".to_string(),
            });
        }
        Ok(Self { c })
    }

    /// Returns a copy with `c` clamped into range.
    #[must_use]
    pub fn clamped(self) -> Self {
        let c = if self.c.is_finite() {
            self.c.clamp(Self::C_RANGE.0, Self::C_RANGE.1)
        } else {
            Self::C_RANGE.0
        };
        Self { c }
    }
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self { c: 1.0 }
    }
}

/// Decision tree hyperparameter: maximum depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Maximum depth, 1..=10; rendering caps at 5 levels
    pub max_depth: u32,
}

impl TreeParams {
    /// Valid range for `max_depth`.
    pub const DEPTH_RANGE: (u32, u32) = (1, 10);

    /// Strict constructor: errors on out-of-range depth.
    pub fn try_new(max_depth: u32) -> Result<Self> {
        if max_depth < Self::DEPTH_RANGE.0 || max_depth > Self::DEPTH_RANGE.1 {
            return Err(MostrarError::InvalidHyperparameter {
                param: "max_depth".to_string(),
                value: max_depth.to_string(),
                constraint: "1 <= max_depth <= 10".to_string(),
            });
        }
        Ok(Self { max_depth })
    }

    /// Returns a copy with depth clamped into range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            max_depth: self.max_depth.clamp(Self::DEPTH_RANGE.0, Self::DEPTH_RANGE.1),
        }
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

/// Random forest hyperparameter: logical ensemble size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestParams {
    /// Ensemble size, 10..=200; at most 60 vote dots are rendered
    pub trees: u32,
}

impl ForestParams {
    /// Valid range for `trees`.
    pub const TREES_RANGE: (u32, u32) = (10, 200);

    /// Strict constructor: errors on out-of-range size.
    pub fn try_new(trees: u32) -> Result<Self> {
        if trees < Self::TREES_RANGE.0 || trees > Self::TREES_RANGE.1 {
            return Err(MostrarError::InvalidHyperparameter {
                param: "trees".to_string(),
                value: trees.to_string(),
                constraint: "10 <= trees <= 200".to_string(),
            });
        }
        Ok(Self { trees })
    }

    /// Returns a copy with size clamped into range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            trees: self.trees.clamp(Self::TREES_RANGE.0, Self::TREES_RANGE.1),
        }
    }
}

impl Default for ForestParams {
    fn default() -> Self {
        Self { trees: 100 }
    }
}

/// Naive Bayes hyperparameter: distribution smoothing, log-scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BayesParams {
    /// Smoothing, 1e-12..=1e-5
    pub smoothing: f64,
}

impl BayesParams {
    /// Valid range for `smoothing`.
    pub const SMOOTHING_RANGE: (f64, f64) = (1e-12, 1e-5);

    /// Strict constructor: errors on out-of-range or non-finite smoothing.
    pub fn try_new(smoothing: f64) -> Result<Self> {
        if !smoothing.is_finite()
            || !(Self::SMOOTHING_RANGE.0..=Self::SMOOTHING_RANGE.1).contains(&smoothing)
        {
            return Err(MostrarError::InvalidHyperparameter {
                param: "smoothing".to_string(),
                value: smoothing.to_string(),
                constraint: "1e-12 <= smoothing <= 1e-5".to_string(),
            });
        }
        Ok(Self { smoothing })
    }

    /// Returns a copy with smoothing clamped into range.
    #[must_use]
    pub fn clamped(self) -> Self {
        let smoothing = if self.smoothing.is_finite() {
            self.smoothing
                .clamp(Self::SMOOTHING_RANGE.0, Self::SMOOTHING_RANGE.1)
        } else {
            Self::SMOOTHING_RANGE.0
        };
        Self { smoothing }
    }
}

impl Default for BayesParams {
    fn default() -> Self {
        Self { smoothing: 1e-9 }
    }
}

/// Tagged union over all family parameter sets. Dispatch is an exhaustive
/// `match`, so adding a family is a compile-time-checked extension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ModelParams {
    /// KNN variant
    Knn(KnnParams),
    /// SVM variant
    Svm(SvmParams),
    /// Logistic regression variant
    Logistic(LogisticParams),
    /// Decision tree variant
    DecisionTree(TreeParams),
    /// Random forest variant
    RandomForest(ForestParams),
    /// Naive Bayes variant
    NaiveBayes(BayesParams),
}

impl ModelParams {
    /// The family this variant belongs to.
    #[must_use]
    pub fn family(&self) -> ModelFamily {
        match self {
            Self::Knn(_) => ModelFamily::Knn,
            Self::Svm(_) => ModelFamily::Svm,
            Self::Logistic(_) => ModelFamily::Logistic,
            Self::DecisionTree(_) => ModelFamily::DecisionTree,
            Self::RandomForest(_) => ModelFamily::RandomForest,
            Self::NaiveBayes(_) => ModelFamily::NaiveBayes,
        }
    }
}

/// One parameter set per family, as held by the UI layer. The dispatcher
/// forwards only the variant matching the selected family.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamsByModel {
    /// KNN parameters
    pub knn: KnnParams,
    /// SVM parameters
    pub svm: SvmParams,
    /// Logistic regression parameters
    pub lr: LogisticParams,
    /// Decision tree parameters
    pub dt: TreeParams,
    /// Random forest parameters
    pub rf: ForestParams,
    /// Naive Bayes parameters
    pub nb: BayesParams,
}

impl ParamsByModel {
    /// Selects the variant for a family.
    #[must_use]
    pub fn select(&self, family: ModelFamily) -> ModelParams {
        match family {
            ModelFamily::Knn => ModelParams::Knn(self.knn),
            ModelFamily::Svm => ModelParams::Svm(self.svm),
            ModelFamily::Logistic => ModelParams::Logistic(self.lr),
            ModelFamily::DecisionTree => ModelParams::DecisionTree(self.dt),
            ModelFamily::RandomForest => ModelParams::RandomForest(self.rf),
            ModelFamily::NaiveBayes => ModelParams::NaiveBayes(self.nb),
        }
    }
}
