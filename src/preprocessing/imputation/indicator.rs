//! Missing-value indicator.
//!
//! Adds a binary `<field>_na` column for each configured field, recording
//! which cells were missing before any imputation step fills them.

use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Suffix appended to a field name to form its indicator column.
pub const INDICATOR_SUFFIX: &str = "_na";

/// Flags missing cells in the configured fields. Stateless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissingIndicator {
    fields: Vec<String>,
}

impl MissingIndicator {
    /// Create an indicator for the given fields.
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

    /// Names of the columns `transform` adds, in order.
    pub fn indicator_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| format!("{f}{INDICATOR_SUFFIX}"))
            .collect()
    }
}

impl Transformer for MissingIndicator {
    fn fit(&mut self, _data: &Dataset) -> Result<(), PreprocessingError> {
        Ok(())
    }

    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        let mut out = data.clone();

        for (field, name) in self.fields.iter().zip(self.indicator_names()) {
            let source = data.column(field)?.data();
            let flags = (0..data.n_rows())
                .map(|row| Some(if source.is_missing(row) { 1.0 } else { 0.0 }))
                .collect();
            out.set_column(Column::numeric(name, flags))?;
        }

        Ok(out)
    }

    fn step_name(&self) -> &'static str {
        "MissingIndicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabins() -> Dataset {
        Dataset::new(vec![Column::from_strs(
            "cabin",
            &[Some("C85"), None, Some("E46")],
        )])
        .unwrap()
    }

    #[test]
    fn test_missing_indicator_flags_missing_cells() {
        let data = cabins();
        let indicator = MissingIndicator::new(["cabin"]);
        let out = indicator.transform(&data).unwrap();

        assert_eq!(out.column_names(), vec!["cabin", "cabin_na"]);
        assert_eq!(
            out.numeric("cabin_na").unwrap(),
            &[Some(0.0), Some(1.0), Some(0.0)]
        );
        // input untouched
        assert_eq!(data.n_columns(), 1);
    }

    #[test]
    fn test_missing_indicator_appends_in_configured_order() {
        let data = Dataset::new(vec![
            Column::numeric("age", vec![None, Some(3.0)]),
            Column::numeric("fare", vec![Some(1.0), None]),
        ])
        .unwrap();

        let indicator = MissingIndicator::new(["fare", "age"]);
        let out = indicator.transform(&data).unwrap();

        assert_eq!(out.column_names(), vec!["age", "fare", "fare_na", "age_na"]);
        assert_eq!(out.numeric("age_na").unwrap(), &[Some(1.0), Some(0.0)]);
        assert_eq!(indicator.indicator_names(), vec!["fare_na", "age_na"]);
    }

    #[test]
    fn test_missing_indicator_missing_field() {
        let indicator = MissingIndicator::new(["age"]);
        let result = indicator.transform(&cabins());
        assert!(matches!(
            result,
            Err(PreprocessingError::MissingField { field }) if field == "age"
        ));
    }

    #[test]
    fn test_missing_indicator_fit_is_noop() {
        let mut indicator = MissingIndicator::new(["cabin"]);
        let before = indicator.clone();
        indicator.fit(&cabins()).unwrap();
        assert_eq!(indicator, before);
        assert!(indicator.is_fitted());
    }

    #[test]
    fn test_missing_indicator_reapply_replaces_in_place() {
        let indicator = MissingIndicator::new(["cabin"]);
        let once = indicator.transform(&cabins()).unwrap();
        let twice = indicator.transform(&once).unwrap();
        assert_eq!(once, twice);
    }
}
