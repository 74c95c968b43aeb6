//! # titanic-features
//!
//! Feature engineering for the Titanic passenger table: missing-value
//! handling, cabin deck extraction, rare-label grouping and one-hot encoding,
//! chained into a fit-once, transform-many pipeline.
//!
//! ## Core Design Principles
//!
//! - **Typed columns**: a [`Dataset`] is a set of named numeric or categorical
//!   columns with explicit missing cells (`Option`), never sentinel values.
//! - **Training/Inference Separation**: `fit` learns medians, frequent labels
//!   and the one-hot schema from training data; `transform` only applies them.
//! - **Stable output schema**: a fitted pipeline produces the same columns for
//!   any batch, whatever categories the batch happens to contain.
//!
//! ## Quick Start
//!
//! ```rust
//! use titanic_features::config::PipelineConfig;
//! use titanic_features::dataset::{Column, Dataset};
//! use titanic_features::preprocessing::Transformer;
//!
//! let config = PipelineConfig {
//!     features: vec!["age".into(), "sex".into()],
//!     numerical_vars: vec!["age".into()],
//!     categorical_vars: vec!["sex".into()],
//!     cabin: None,
//!     ..PipelineConfig::default()
//! };
//!
//! let train = Dataset::new(vec![
//!     Column::numeric("age", vec![Some(22.0), None, Some(38.0)]),
//!     Column::from_strs("sex", &[Some("male"), Some("female"), Some("male")]),
//! ])?;
//!
//! let mut pipeline = config.build_pipeline()?;
//! pipeline.fit(&train)?;
//!
//! let features = pipeline.transform(&train)?;
//! assert_eq!(features.column_names(), vec!["age", "age_na", "sex_male"]);
//! assert_eq!(features.to_array2()?.dim(), (3, 3));
//! # Ok::<(), titanic_features::preprocessing::PreprocessingError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: Typed columnar table (`Column`, `Dataset`)
//! - `preprocessing`: Transformers and the `Pipeline` that chains them
//! - `config`: Feature groups and the canonical passenger pipeline
//! - `serialization`: Byte representation of fitted pipelines

pub mod config;
pub mod dataset;
pub mod preprocessing;
pub mod serialization;

pub use config::PipelineConfig;
pub use dataset::{Column, ColumnData, ColumnKind, Dataset, Value};
pub use preprocessing::{Pipeline, PreprocessingError, Transformer};
pub use serialization::SerializableParams;
