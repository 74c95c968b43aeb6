//! Pipeline for chaining transformers.
//!
//! A Pipeline chains transformers so that the output of one becomes the input
//! of the next. Fitting is sequential: each step is fitted on the output of
//! the previous step's transform, never on the raw input.
//!
//! # Example
//! ```ignore
//! use titanic_features::preprocessing::{
//!     CategoricalImputer, MissingIndicator, NumericalImputer, Pipeline, Transformer,
//! };
//!
//! let mut pipeline = Pipeline::new()
//!     .add(CategoricalImputer::new(["cabin"]))
//!     .add(MissingIndicator::new(["age"]))
//!     .add(NumericalImputer::new(["age"]));
//!
//! let train_out = pipeline.fit_transform(&train)?;
//! let test_out = pipeline.transform(&test)?;
//! ```

use crate::dataset::Dataset;
use crate::preprocessing::encoding::{CategoricalEncoder, RareLabelEncoder};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::feature_engineering::FirstLetterExtractor;
use crate::preprocessing::imputation::{CategoricalImputer, MissingIndicator, NumericalImputer};
use crate::preprocessing::traits::Transformer;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A step in the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PipelineStep {
    /// MissingIndicator step.
    MissingIndicator(MissingIndicator),
    /// NumericalImputer step.
    NumericalImputer(NumericalImputer),
    /// CategoricalImputer step.
    CategoricalImputer(CategoricalImputer),
    /// FirstLetterExtractor step.
    FirstLetterExtractor(FirstLetterExtractor),
    /// RareLabelEncoder step.
    RareLabelEncoder(RareLabelEncoder),
    /// CategoricalEncoder step.
    CategoricalEncoder(CategoricalEncoder),
}

impl Transformer for PipelineStep {
    fn fit(&mut self, data: &Dataset) -> Result<(), PreprocessingError> {
        match self {
            PipelineStep::MissingIndicator(t) => t.fit(data),
            PipelineStep::NumericalImputer(t) => t.fit(data),
            PipelineStep::CategoricalImputer(t) => t.fit(data),
            PipelineStep::FirstLetterExtractor(t) => t.fit(data),
            PipelineStep::RareLabelEncoder(t) => t.fit(data),
            PipelineStep::CategoricalEncoder(t) => t.fit(data),
        }
    }

    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        match self {
            PipelineStep::MissingIndicator(t) => t.transform(data),
            PipelineStep::NumericalImputer(t) => t.transform(data),
            PipelineStep::CategoricalImputer(t) => t.transform(data),
            PipelineStep::FirstLetterExtractor(t) => t.transform(data),
            PipelineStep::RareLabelEncoder(t) => t.transform(data),
            PipelineStep::CategoricalEncoder(t) => t.transform(data),
        }
    }

    fn is_fitted(&self) -> bool {
        match self {
            PipelineStep::MissingIndicator(t) => t.is_fitted(),
            PipelineStep::NumericalImputer(t) => t.is_fitted(),
            PipelineStep::CategoricalImputer(t) => t.is_fitted(),
            PipelineStep::FirstLetterExtractor(t) => t.is_fitted(),
            PipelineStep::RareLabelEncoder(t) => t.is_fitted(),
            PipelineStep::CategoricalEncoder(t) => t.is_fitted(),
        }
    }

    fn step_name(&self) -> &'static str {
        match self {
            PipelineStep::MissingIndicator(t) => t.step_name(),
            PipelineStep::NumericalImputer(t) => t.step_name(),
            PipelineStep::CategoricalImputer(t) => t.step_name(),
            PipelineStep::FirstLetterExtractor(t) => t.step_name(),
            PipelineStep::RareLabelEncoder(t) => t.step_name(),
            PipelineStep::CategoricalEncoder(t) => t.step_name(),
        }
    }
}

macro_rules! impl_from_transformer {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for PipelineStep {
                fn from(t: $variant) -> Self {
                    PipelineStep::$variant(t)
                }
            }
        )*
    };
}

impl_from_transformer!(
    MissingIndicator,
    NumericalImputer,
    CategoricalImputer,
    FirstLetterExtractor,
    RareLabelEncoder,
    CategoricalEncoder,
);

/// Ordered chain of preprocessing steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn add(mut self, step: impl Into<PipelineStep>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Get the number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Get step names for debugging.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(Transformer::step_name).collect()
    }
}

fn log_fit(step: &PipelineStep, input: &Dataset) {
    debug!(
        step = step.step_name(),
        rows = input.n_rows(),
        columns = input.n_columns(),
        "fitting pipeline step"
    );
}

impl Transformer for Pipeline {
    /// Fit each step on the previous step's output. The last step is only fitted.
    fn fit(&mut self, data: &Dataset) -> Result<(), PreprocessingError> {
        let Some((last, init)) = self.steps.split_last_mut() else {
            return Ok(());
        };
        let mut current = data.clone();
        for step in init {
            log_fit(step, &current);
            current = step.fit_transform(&current)?;
        }
        log_fit(last, &current);
        last.fit(&current)
    }

    /// Apply every step's transform in order. No step is re-fitted.
    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        let mut current = data.clone();
        for step in &self.steps {
            current = step.transform(&current)?;
            trace!(
                step = step.step_name(),
                columns = current.n_columns(),
                "transformed"
            );
        }
        Ok(current)
    }

    /// Fit each step on the previous step's output and return the final output.
    fn fit_transform(&mut self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        let mut current = data.clone();
        for step in &mut self.steps {
            log_fit(step, &current);
            current = step.fit_transform(&current)?;
        }
        Ok(current)
    }

    fn is_fitted(&self) -> bool {
        self.steps.iter().all(Transformer::is_fitted)
    }

    fn step_name(&self) -> &'static str {
        "Pipeline"
    }
}
