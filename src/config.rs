//! Feature groups and pipeline configuration.
//!
//! [`PipelineConfig::default`] describes the Titanic passenger table. A
//! different table can be configured from JSON:
//!
//! ```rust
//! use titanic_features::config::PipelineConfig;
//!
//! let config = PipelineConfig::from_json_str(r#"{
//!     "target": "survived",
//!     "features": ["age", "sex"],
//!     "numerical_vars": ["age"],
//!     "categorical_vars": ["sex"]
//! }"#)?;
//! assert_eq!(config.cabin, None);
//! let pipeline = config.build_pipeline()?;
//! assert_eq!(pipeline.len(), 5);
//! # Ok::<(), titanic_features::preprocessing::PreprocessingError>(())
//! ```

use crate::preprocessing::{
    CategoricalEncoder, CategoricalImputer, FirstLetterExtractor, MissingIndicator,
    NumericalImputer, Pipeline, PreprocessingError, RareLabelEncoder, DEFAULT_TOLERANCE,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_training_data_file() -> String {
    "titanic.csv".to_string()
}

fn default_pipeline_name() -> String {
    "logistic_regression.pkl".to_string()
}

fn default_rare_label_tol() -> f64 {
    DEFAULT_TOLERANCE
}

/// Names of the fields the pipeline reads, and the artifact identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Training data file, resolved by the data-loading collaborator.
    #[serde(default = "default_training_data_file")]
    pub training_data_file: String,
    /// Name under which the fitted pipeline is persisted.
    #[serde(default = "default_pipeline_name")]
    pub pipeline_name: String,
    /// Target column, excluded from the features.
    pub target: String,
    /// Feature columns passed to the pipeline.
    pub features: Vec<String>,
    pub numerical_vars: Vec<String>,
    pub categorical_vars: Vec<String>,
    /// Field reduced to its first letter (cabin code → deck).
    #[serde(default)]
    pub cabin: Option<String>,
    #[serde(default = "default_rare_label_tol")]
    pub rare_label_tol: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let strings = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            training_data_file: default_training_data_file(),
            pipeline_name: default_pipeline_name(),
            target: "survived".to_string(),
            features: strings(&[
                "pclass", "age", "sibsp", "parch", "fare", "sex", "cabin", "embarked", "title",
            ]),
            numerical_vars: strings(&["pclass", "age", "sibsp", "parch", "fare"]),
            categorical_vars: strings(&["sex", "cabin", "embarked", "title"]),
            cabin: Some("cabin".to_string()),
            rare_label_tol: DEFAULT_TOLERANCE,
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, PreprocessingError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that the feature groups are consistent.
    pub fn validate(&self) -> Result<(), PreprocessingError> {
        if self.features.iter().any(|f| *f == self.target) {
            return Err(PreprocessingError::Config(format!(
                "target '{}' is listed as a feature",
                self.target
            )));
        }

        let grouped = self
            .numerical_vars
            .iter()
            .chain(&self.categorical_vars)
            .chain(&self.cabin);
        for field in grouped {
            if !self.features.contains(field) {
                return Err(PreprocessingError::Config(format!(
                    "'{}' is not listed in features",
                    field
                )));
            }
        }

        if let Some(dup) = self
            .numerical_vars
            .iter()
            .find(|f| self.categorical_vars.contains(f))
        {
            return Err(PreprocessingError::Config(format!(
                "'{}' is both numerical and categorical",
                dup
            )));
        }

        Ok(())
    }

    /// Build the unfitted passenger pipeline:
    ///
    /// 1. impute categorical fields with `"Missing"`
    /// 2. add `_na` indicators for numerical fields
    /// 3. impute numerical fields with the median
    /// 4. reduce the cabin field to its first letter (if configured)
    /// 5. collapse rare categorical labels
    /// 6. one-hot encode categorical fields
    pub fn build_pipeline(&self) -> Result<Pipeline, PreprocessingError> {
        let mut pipeline = Pipeline::new()
            .add(CategoricalImputer::new(self.categorical_vars.iter().cloned()))
            .add(MissingIndicator::new(self.numerical_vars.iter().cloned()))
            .add(NumericalImputer::new(self.numerical_vars.iter().cloned()));

        if let Some(cabin) = &self.cabin {
            pipeline = pipeline.add(FirstLetterExtractor::new([cabin.clone()]));
        }

        Ok(pipeline
            .add(
                RareLabelEncoder::new(self.categorical_vars.iter().cloned())
                    .with_tol(self.rare_label_tol)?,
            )
            .add(CategoricalEncoder::new(self.categorical_vars.iter().cloned())))
    }
}
