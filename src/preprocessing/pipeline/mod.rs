//! Pipeline for chaining multiple transformers.
//!
//! # Example
//! ```ignore
//! use titanic_features::preprocessing::{
//!     CategoricalEncoder, CategoricalImputer, Pipeline, Transformer,
//! };
//!
//! let mut pipeline = Pipeline::new()
//!     .add(CategoricalImputer::new(["sex"]))
//!     .add(CategoricalEncoder::new(["sex"]));
//!
//! let train_out = pipeline.fit_transform(&train)?;
//! let test_out = pipeline.transform(&test)?;
//! ```

#[allow(clippy::module_inception)]
pub mod pipeline;

pub use pipeline::{Pipeline, PipelineStep};
