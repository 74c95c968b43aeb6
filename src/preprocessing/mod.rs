//! Data preprocessing transformers for the passenger feature pipeline.
//!
//! # Design Philosophy
//!
//! - **Fit once, transform many**: stateful transformers learn their
//!   parameters in `fit` and keep them in an explicit `Option<…State>`;
//!   `transform` before `fit` is a [`PreprocessingError::NotFitted`] error.
//! - **Copy on transform**: `transform` takes `&self` and returns a new
//!   [`Dataset`](crate::dataset::Dataset), so a fitted pipeline can be shared
//!   between threads.
//! - **Serializable**: transformers and pipelines derive serde traits and can
//!   be turned into bytes with [`SerializableParams`](crate::serialization::SerializableParams).
//!
//! # Core Trait
//!
//! - [`Transformer`]: `fit` / `transform` / `fit_transform`
//!
//! # Available Transformers
//!
//! ## Imputation
//! - [`MissingIndicator`]: `<field>_na` 0/1 columns
//! - [`NumericalImputer`]: fill with the training median
//! - [`CategoricalImputer`]: fill with `"Missing"`
//!
//! ## Feature engineering
//! - [`FirstLetterExtractor`]: keep the first character of a label
//!
//! ## Encoding
//! - [`RareLabelEncoder`]: collapse infrequent labels into `"Rare"`
//! - [`CategoricalEncoder`]: one-hot encoding with a fixed schema
//!
//! ## Pipeline
//! - [`Pipeline`]: chain the transformers above
//!
//! # Example
//!
//! ```rust
//! use titanic_features::dataset::{Column, Dataset};
//! use titanic_features::preprocessing::{
//!     CategoricalImputer, FirstLetterExtractor, MissingIndicator, Pipeline, Transformer,
//! };
//!
//! let train = Dataset::new(vec![Column::from_strs(
//!     "cabin",
//!     &[Some("C85"), None, Some("E46")],
//! )])?;
//!
//! let mut pipeline = Pipeline::new()
//!     .add(MissingIndicator::new(["cabin"]))
//!     .add(CategoricalImputer::new(["cabin"]))
//!     .add(FirstLetterExtractor::new(["cabin"]));
//!
//! let out = pipeline.fit_transform(&train)?;
//! assert_eq!(out.numeric("cabin_na")?, &[Some(0.0), Some(1.0), Some(0.0)]);
//! assert_eq!(out.categorical("cabin")?[1].as_deref(), Some("M"));
//! # Ok::<(), titanic_features::preprocessing::PreprocessingError>(())
//! ```

pub mod encoding;
pub mod error;
pub mod feature_engineering;
pub mod imputation;
pub mod pipeline;
pub mod traits;

// Re-export main types
pub use encoding::{
    CategoricalEncoder, CategoricalEncoderState, RareLabelEncoder, RareLabelEncoderState,
    DEFAULT_TOLERANCE, RARE_LABEL,
};
pub use error::PreprocessingError;
pub use feature_engineering::FirstLetterExtractor;
pub use imputation::{
    CategoricalImputer, MissingIndicator, NumericalImputer, NumericalImputerState,
    INDICATOR_SUFFIX, MISSING_LABEL,
};
pub use pipeline::{Pipeline, PipelineStep};
pub use traits::Transformer;
