//! Core trait for preprocessing transformers.
//!
//! Every transformer is constructed with the fields it operates on, learns its
//! parameters once in [`Transformer::fit`], and then applies them any number of
//! times in [`Transformer::transform`]. Learned state lives in an `Option`
//! inside the transformer, so calling `transform` before `fit` on a stateful
//! transformer is reported as [`PreprocessingError::NotFitted`].

use crate::dataset::Dataset;
use crate::preprocessing::error::PreprocessingError;

/// Shared fit/transform capability of all preprocessing steps.
///
/// # Example
/// ```rust
/// use titanic_features::dataset::{Column, Dataset};
/// use titanic_features::preprocessing::{NumericalImputer, Transformer};
///
/// let train = Dataset::new(vec![Column::numeric("age", vec![Some(20.0), None, Some(40.0)])])?;
///
/// let mut imputer = NumericalImputer::new(["age"]);
/// imputer.fit(&train)?;
/// let imputed = imputer.transform(&train)?;
/// assert_eq!(imputed.numeric("age")?[1], Some(30.0));
/// # Ok::<(), titanic_features::preprocessing::PreprocessingError>(())
/// ```
pub trait Transformer {
    /// Learn parameters from the training data.
    ///
    /// Stateless transformers accept any dataset and do nothing.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if:
    /// - A configured field is absent or has the wrong type
    /// - A required statistic cannot be computed
    fn fit(&mut self, data: &Dataset) -> Result<(), PreprocessingError>;

    /// Return a transformed copy of `data` using the learned parameters.
    ///
    /// The input is never modified and learned state is never updated.
    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError>;

    /// Fit on `data`, then transform it.
    fn fit_transform(&mut self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        self.fit(data)?;
        self.transform(data)
    }

    /// Whether `transform` can run. Stateless transformers are always fitted.
    fn is_fitted(&self) -> bool {
        true
    }

    /// Short name used in logs and `NotFitted` errors.
    fn step_name(&self) -> &'static str;
}
