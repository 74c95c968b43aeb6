//! Rare label collapsing.
//!
//! Learns, per field, the labels whose relative frequency in the training data
//! reaches a tolerance, and maps every other label to `"Rare"`.

use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Label substituted for infrequent categories.
pub const RARE_LABEL: &str = "Rare";

/// Default minimum relative frequency for a label to be kept.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Parameters learned by [`RareLabelEncoder::fit`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RareLabelEncoderState {
    /// Frequent labels of each configured field.
    pub frequent_labels: BTreeMap<String, BTreeSet<String>>,
}

/// Collapses infrequent labels into [`RARE_LABEL`].
///
/// A label is frequent when `count / n_rows >= tol`. The row count includes
/// rows where the field is missing, and missing cells are themselves mapped to
/// [`RARE_LABEL`] on transform since they are never part of the frequent set.
///
/// # Example
/// ```ignore
/// let mut encoder = RareLabelEncoder::new(["title"]).with_tol(0.5)?;
/// encoder.fit(&train)?;            // train title = ["Mr", "Mr", "Dr"]
/// let out = encoder.transform(&test)?; // ["Mr", "Dr", "Rev"] -> ["Mr", "Rare", "Rare"]
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RareLabelEncoder {
    tol: f64,
    fields: Vec<String>,
    state: Option<RareLabelEncoderState>,
}

fn check_tol(tol: f64) -> Result<(), PreprocessingError> {
    if !(0.0..=1.0).contains(&tol) {
        return Err(PreprocessingError::InvalidParameter(format!(
            "tol must be in [0, 1], got {}",
            tol
        )));
    }
    Ok(())
}

impl RareLabelEncoder {
    /// Create an encoder with the default tolerance of 0.05.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tol: DEFAULT_TOLERANCE,
            fields: fields.into_iter().map(Into::into).collect(),
            state: None,
        }
    }

    /// Set the minimum relative frequency, which must lie in `[0, 1]`.
    pub fn with_tol(mut self, tol: f64) -> Result<Self, PreprocessingError> {
        check_tol(tol)?;
        self.tol = tol;
        Ok(self)
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Learned frequent labels, or `None` before fit.
    pub fn state(&self) -> Option<&RareLabelEncoderState> {
        self.state.as_ref()
    }

    /// Learned frequent labels of one field.
    pub fn frequent_labels(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.state.as_ref()?.frequent_labels.get(field)
    }
}

impl Transformer for RareLabelEncoder {
    fn fit(&mut self, data: &Dataset) -> Result<(), PreprocessingError> {
        // Deserialized encoders bypass `with_tol`.
        check_tol(self.tol)?;
        let n_rows = data.n_rows() as f64;
        let mut frequent_labels = BTreeMap::new();

        for field in &self.fields {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for label in data.categorical(field)?.iter().flatten() {
                *counts.entry(label.as_str()).or_insert(0) += 1;
            }

            let frequent: BTreeSet<String> = counts
                .into_iter()
                .filter(|&(_, count)| count as f64 / n_rows >= self.tol)
                .map(|(label, _)| label.to_string())
                .collect();
            debug!(
                field = field.as_str(),
                kept = frequent.len(),
                tol = self.tol,
                "learned frequent labels"
            );
            frequent_labels.insert(field.clone(), frequent);
        }

        self.state = Some(RareLabelEncoderState { frequent_labels });
        Ok(())
    }

    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        let not_fitted = || PreprocessingError::NotFitted {
            transformer: self.step_name(),
        };
        let state = self.state.as_ref().ok_or_else(not_fitted)?;
        let mut out = data.clone();

        for field in &self.fields {
            let frequent = state.frequent_labels.get(field).ok_or_else(not_fitted)?;
            let collapsed = data
                .categorical(field)?
                .iter()
                .map(|cell| match cell {
                    Some(label) if frequent.contains(label) => Some(label.clone()),
                    _ => Some(RARE_LABEL.to_string()),
                })
                .collect();
            out.set_column(Column::categorical(field.as_str(), collapsed))?;
        }

        Ok(out)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn step_name(&self) -> &'static str {
        "RareLabelEncoder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Dataset {
        let cells: Vec<Option<&str>> = values.iter().map(|v| Some(*v)).collect();
        Dataset::new(vec![Column::from_strs("title", &cells)]).unwrap()
    }

    fn strings(data: &Dataset) -> Vec<String> {
        data.categorical("title")
            .unwrap()
            .iter()
            .map(|c| c.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_rare_label_scenario() {
        let mut encoder = RareLabelEncoder::new(["title"]).with_tol(0.5).unwrap();
        encoder.fit(&labels(&["A", "A", "B"])).unwrap();

        let expected: BTreeSet<String> = ["A".to_string()].into_iter().collect();
        assert_eq!(encoder.frequent_labels("title"), Some(&expected));

        let out = encoder.transform(&labels(&["A", "B", "C"])).unwrap();
        assert_eq!(strings(&out), vec!["A", "Rare", "Rare"]);
    }

    #[test]
    fn test_rare_label_threshold_inclusive() {
        // B has frequency exactly 0.25
        let mut encoder = RareLabelEncoder::new(["title"]).with_tol(0.25).unwrap();
        encoder.fit(&labels(&["A", "A", "A", "B"])).unwrap();

        let out = encoder.transform(&labels(&["B", "A"])).unwrap();
        assert_eq!(strings(&out), vec!["B", "A"]);
    }

    #[test]
    fn test_rare_label_default_tolerance() {
        let mut encoder = RareLabelEncoder::new(["title"]);
        assert_eq!(encoder.tol(), DEFAULT_TOLERANCE);

        // 1 in 25 rows = 0.04 < 0.05
        let mut values = vec!["Mr"; 24];
        values.push("Col");
        encoder.fit(&labels(&values)).unwrap();
        let out = encoder.transform(&labels(&["Col", "Mr"])).unwrap();
        assert_eq!(strings(&out), vec!["Rare", "Mr"]);
    }

    #[test]
    fn test_rare_label_missing_counts_in_total() {
        // A appears once in 3 rows (one missing): 1/3 < 0.4
        let data = Dataset::new(vec![Column::from_strs(
            "title",
            &[Some("A"), Some("B"), None],
        )])
        .unwrap();
        let mut encoder = RareLabelEncoder::new(["title"]).with_tol(0.4).unwrap();
        encoder.fit(&data).unwrap();

        assert!(encoder.frequent_labels("title").unwrap().is_empty());
        let out = encoder.transform(&data).unwrap();
        assert_eq!(strings(&out), vec!["Rare", "Rare", "Rare"]);
    }

    #[test]
    fn test_rare_label_not_fitted() {
        let encoder = RareLabelEncoder::new(["title"]);
        assert!(matches!(
            encoder.transform(&labels(&["A"])),
            Err(PreprocessingError::NotFitted { .. })
        ));
    }

    #[test]
    fn test_rare_label_invalid_tol() {
        assert!(RareLabelEncoder::new(["title"]).with_tol(1.5).is_err());
        assert!(RareLabelEncoder::new(["title"]).with_tol(-0.1).is_err());
        assert!(RareLabelEncoder::new(["title"]).with_tol(f64::NAN).is_err());
    }

    #[test]
    fn test_rare_label_fit_rechecks_deserialized_tol() {
        let mut encoder: RareLabelEncoder =
            serde_json::from_str(r#"{"tol": 5.0, "fields": ["title"], "state": null}"#).unwrap();
        assert!(matches!(
            encoder.fit(&labels(&["A", "B"])),
            Err(PreprocessingError::InvalidParameter(_))
        ));
        assert!(!encoder.is_fitted());
    }

    #[test]
    fn test_rare_label_state_not_changed_by_transform() {
        let mut encoder = RareLabelEncoder::new(["title"]).with_tol(0.5).unwrap();
        encoder.fit(&labels(&["A", "A", "B"])).unwrap();
        let before = encoder.clone();
        encoder.transform(&labels(&["B", "B", "B"])).unwrap();
        assert_eq!(encoder, before);
    }
}
