//! Numerical imputer.
//!
//! Fills missing numeric cells with the per-field median learned at fit time.
//! The median is computed over observed (non-missing) values only.
//!
//! # Example
//! ```ignore
//! let mut imputer = NumericalImputer::new(["age", "fare"]);
//! imputer.fit(&train)?;
//! let imputed_test = imputer.transform(&test)?; // uses the training medians
//! ```

use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Parameters learned by [`NumericalImputer::fit`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericalImputerState {
    /// Median of each configured field.
    pub medians: BTreeMap<String, f64>,
}

/// Median imputer for numeric fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericalImputer {
    fields: Vec<String>,
    state: Option<NumericalImputerState>,
}

impl NumericalImputer {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            state: None,
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Learned medians, or `None` before fit.
    pub fn state(&self) -> Option<&NumericalImputerState> {
        self.state.as_ref()
    }

    /// Learned median of one field.
    pub fn median(&self, field: &str) -> Option<f64> {
        self.state.as_ref()?.medians.get(field).copied()
    }
}

/// Median of the observed values, `None` if nothing was observed.
fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().flatten().copied().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

impl Transformer for NumericalImputer {
    fn fit(&mut self, data: &Dataset) -> Result<(), PreprocessingError> {
        let mut medians = BTreeMap::new();

        for field in &self.fields {
            let value =
                median(data.numeric(field)?).ok_or_else(|| PreprocessingError::EmptyStatistic {
                    field: field.clone(),
                    statistic: "median",
                })?;
            debug!(field = field.as_str(), median = value, "learned median");
            medians.insert(field.clone(), value);
        }

        self.state = Some(NumericalImputerState { medians });
        Ok(())
    }

    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        let state = self.state.as_ref().ok_or(PreprocessingError::NotFitted {
            transformer: self.step_name(),
        })?;
        let mut out = data.clone();

        for field in &self.fields {
            let fill = state
                .medians
                .get(field)
                .copied()
                .ok_or(PreprocessingError::NotFitted {
                    transformer: self.step_name(),
                })?;
            let filled = data
                .numeric(field)?
                .iter()
                .map(|cell| Some(cell.unwrap_or(fill)))
                .collect();
            out.set_column(Column::numeric(field.as_str(), filled))?;
        }

        Ok(out)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn step_name(&self) -> &'static str {
        "NumericalImputer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_test_data_with_missing() -> Dataset {
        Dataset::new(vec![
            Column::numeric("age", vec![Some(22.0), None, Some(38.0), Some(26.0)]),
            Column::numeric("fare", vec![Some(7.25), Some(71.28), None, Some(8.05)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_numerical_imputer_median() {
        let data = create_test_data_with_missing();
        let mut imputer = NumericalImputer::new(["age", "fare"]);
        imputer.fit(&data).unwrap();

        // age: median of [22, 26, 38] = 26
        // fare: median of [7.25, 8.05, 71.28] = 8.05
        assert_relative_eq!(imputer.median("age").unwrap(), 26.0);
        assert_relative_eq!(imputer.median("fare").unwrap(), 8.05);

        let imputed = imputer.transform(&data).unwrap();
        assert_eq!(imputed.numeric("age").unwrap()[1], Some(26.0));
        assert_eq!(imputed.numeric("fare").unwrap()[2], Some(8.05));
        assert_eq!(imputed.numeric("age").unwrap()[0], Some(22.0));
    }

    #[test]
    fn test_numerical_imputer_even_count_median() {
        let data = Dataset::new(vec![Column::numeric(
            "age",
            vec![Some(4.0), Some(1.0), None, Some(3.0), Some(2.0)],
        )])
        .unwrap();
        let mut imputer = NumericalImputer::new(["age"]);
        imputer.fit(&data).unwrap();
        assert_relative_eq!(imputer.median("age").unwrap(), 2.5);
    }

    #[test]
    fn test_numerical_imputer_uses_training_median() {
        let train = create_test_data_with_missing();
        let test = Dataset::new(vec![
            Column::numeric("age", vec![Some(80.0), Some(90.0), None]),
            Column::numeric("fare", vec![None, Some(500.0), Some(600.0)]),
        ])
        .unwrap();

        let mut imputer = NumericalImputer::new(["age", "fare"]);
        imputer.fit(&train).unwrap();
        let out = imputer.transform(&test).unwrap();

        assert_eq!(out.numeric("age").unwrap()[2], Some(26.0));
        assert_eq!(out.numeric("fare").unwrap()[0], Some(8.05));
    }

    #[test]
    fn test_numerical_imputer_not_fitted() {
        let imputer = NumericalImputer::new(["age"]);
        assert!(!imputer.is_fitted());
        let result = imputer.transform(&create_test_data_with_missing());
        assert!(matches!(
            result,
            Err(PreprocessingError::NotFitted {
                transformer: "NumericalImputer"
            })
        ));
    }

    #[test]
    fn test_numerical_imputer_all_missing() {
        let data = Dataset::new(vec![Column::numeric("age", vec![None, None])]).unwrap();
        let mut imputer = NumericalImputer::new(["age"]);
        let result = imputer.fit(&data);

        assert!(matches!(
            result,
            Err(PreprocessingError::EmptyStatistic { statistic: "median", .. })
        ));
        assert!(!imputer.is_fitted());
    }

    #[test]
    fn test_numerical_imputer_missing_field() {
        let mut imputer = NumericalImputer::new(["pclass"]);
        let result = imputer.fit(&create_test_data_with_missing());
        assert!(matches!(
            result,
            Err(PreprocessingError::MissingField { .. })
        ));
    }

    #[test]
    fn test_numerical_imputer_rejects_categorical() {
        let data = Dataset::new(vec![Column::from_strs("sex", &[Some("male")])]).unwrap();
        let mut imputer = NumericalImputer::new(["sex"]);
        assert!(matches!(
            imputer.fit(&data),
            Err(PreprocessingError::ColumnTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_numerical_imputer_leaves_input_untouched() {
        let data = create_test_data_with_missing();
        let mut imputer = NumericalImputer::new(["age"]);
        let _ = imputer.fit_transform(&data).unwrap();
        assert_eq!(data.numeric("age").unwrap()[1], None);
    }

    #[test]
    fn test_numerical_imputer_serialization() {
        let data = create_test_data_with_missing();
        let mut imputer = NumericalImputer::new(["age", "fare"]);
        imputer.fit(&data).unwrap();

        let bytes = bincode::serialize(&imputer).unwrap();
        let restored: NumericalImputer = bincode::deserialize(&bytes).unwrap();

        assert_eq!(restored, imputer);
        assert_eq!(
            restored.transform(&data).unwrap(),
            imputer.transform(&data).unwrap()
        );
    }
}
