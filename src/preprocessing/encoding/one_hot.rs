//! One-hot encoding for categorical fields.
//!
//! Expands each configured field into `"<field>_<label>"` indicator columns.
//! The first label of each field in sorted order is the reference level and
//! gets no column, so `k` labels produce `k - 1` columns.
//!
//! The column list is learned once at fit time and every transform reproduces
//! it exactly: learned columns missing from a batch are filled with zeros,
//! columns for labels never seen in training are discarded.
//!
//! Generated names must be unique: a name produced twice (field `a` with label
//! `b_c` and field `a_b` with label `c`), a name equal to a configured field,
//! or a name already taken by another column of the input is a
//! [`PreprocessingError::DuplicateField`] error.

use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

/// Parameters learned by [`CategoricalEncoder::fit`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoricalEncoderState {
    /// Indicator column names in output order.
    pub columns: Vec<String>,
}

/// One-hot encoder with drop-first reference levels and a fixed output schema.
///
/// # Example
/// ```ignore
/// // train: sex = ["female", "male"], embarked = ["C", "Q", "S"]
/// let mut encoder = CategoricalEncoder::new(["sex", "embarked"]);
/// encoder.fit(&train)?;
/// assert_eq!(
///     encoder.feature_names().unwrap(),
///     ["sex_male", "embarked_Q", "embarked_S"]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoricalEncoder {
    fields: Vec<String>,
    state: Option<CategoricalEncoderState>,
}

fn indicator_name(field: &str, label: &str) -> String {
    format!("{field}_{label}")
}

impl CategoricalEncoder {
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

    /// Learned indicator column names, or `None` before fit.
    pub fn feature_names(&self) -> Option<&[String]> {
        self.state.as_ref().map(|s| s.columns.as_slice())
    }

    /// Full indicator expansion of `data`, one column per observed label.
    fn expand(
        &self,
        data: &Dataset,
    ) -> Result<HashMap<String, Vec<Option<f64>>>, PreprocessingError> {
        let n_rows = data.n_rows();
        let mut expansion: HashMap<String, Vec<Option<f64>>> = HashMap::new();

        for field in &self.fields {
            for (row, cell) in data.categorical(field)?.iter().enumerate() {
                if let Some(label) = cell {
                    expansion
                        .entry(indicator_name(field, label))
                        .or_insert_with(|| vec![Some(0.0); n_rows])[row] = Some(1.0);
                }
            }
        }

        Ok(expansion)
    }
}

impl Transformer for CategoricalEncoder {
    fn fit(&mut self, data: &Dataset) -> Result<(), PreprocessingError> {
        let mut columns = Vec::new();
        let mut seen: HashSet<String> = self.fields.iter().cloned().collect();

        for field in &self.fields {
            let labels: BTreeSet<&str> = data
                .categorical(field)?
                .iter()
                .flatten()
                .map(String::as_str)
                .collect();
            for label in labels.into_iter().skip(1) {
                let name = indicator_name(field, label);
                if !seen.insert(name.clone()) {
                    return Err(PreprocessingError::DuplicateField { field: name });
                }
                columns.push(name);
            }
        }

        self.state = Some(CategoricalEncoderState { columns });
        Ok(())
    }

    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        let state = self.state.as_ref().ok_or(PreprocessingError::NotFitted {
            transformer: self.step_name(),
        })?;

        let mut expansion = self.expand(data)?;
        let mut out = data.clone();

        for name in &state.columns {
            if data.contains(name) {
                return Err(PreprocessingError::DuplicateField {
                    field: name.clone(),
                });
            }
            let values = expansion
                .remove(name)
                .unwrap_or_else(|| vec![Some(0.0); data.n_rows()]);
            out.set_column(Column::numeric(name.as_str(), values))?;
        }

        // Whatever is left are reference levels or labels unseen at fit time.
        if !expansion.is_empty() {
            debug!(
                discarded = expansion.len(),
                "indicator columns outside the learned schema dropped"
            );
        }

        out.drop_columns(&self.fields)?;
        Ok(out)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn step_name(&self) -> &'static str {
        "CategoricalEncoder"
    }
}
