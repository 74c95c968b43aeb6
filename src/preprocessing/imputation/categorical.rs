//! Categorical imputer.
//!
//! Fills missing categorical cells with the constant label `"Missing"`.

use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Label substituted for missing categorical cells.
pub const MISSING_LABEL: &str = "Missing";

/// Replaces missing categorical cells with [`MISSING_LABEL`]. Stateless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoricalImputer {
    fields: Vec<String>,
}

impl CategoricalImputer {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Transformer for CategoricalImputer {
    fn fit(&mut self, _data: &Dataset) -> Result<(), PreprocessingError> {
        Ok(())
    }

    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        let mut out = data.clone();

        for field in &self.fields {
            let filled = data
                .categorical(field)?
                .iter()
                .map(|cell| Some(cell.clone().unwrap_or_else(|| MISSING_LABEL.to_string())))
                .collect();
            out.set_column(Column::categorical(field.as_str(), filled))?;
        }

        Ok(out)
    }

    fn step_name(&self) -> &'static str {
        "CategoricalImputer"
    }
}
