//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use mostrar::prelude::*;
//! ```

pub use crate::dispatch::Visualizer;
pub use crate::error::{MostrarError, Result};
pub use crate::params::{
    BayesParams, ForestParams, Kernel, KnnParams, LogisticParams, Metric, ModelFamily,
    ModelParams, ParamsByModel, SvmParams, TreeParams,
};
pub use crate::scene::{Curve, PathSeg, Primitive, Scene, StyleClass, Theme};
