//! Transformers for handling missing values.
//!
//! # Available Transformers
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`MissingIndicator`] | Adds a `<field>_na` 0/1 column per field |
//! | [`NumericalImputer`] | Fills numeric fields with the training median |
//! | [`CategoricalImputer`] | Fills categorical fields with `"Missing"` |
//!
//! Indicators must run before the imputers in a pipeline, otherwise the
//! missingness they record has already been filled in.

pub mod categorical;
pub mod indicator;
pub mod numerical;

pub use categorical::{CategoricalImputer, MISSING_LABEL};
pub use indicator::{MissingIndicator, INDICATOR_SUFFIX};
pub use numerical::{NumericalImputer, NumericalImputerState};
