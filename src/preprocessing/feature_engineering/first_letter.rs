//! First-letter extraction.
//!
//! Reduces string labels to their leading character, e.g. cabin codes
//! `"C85"` → `"C"` so the deck letter becomes the category.

use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Replaces each label with its first character. Stateless.
///
/// Missing cells stay missing; an empty string has no first character and
/// becomes missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FirstLetterExtractor {
    fields: Vec<String>,
}

impl FirstLetterExtractor {
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

impl Transformer for FirstLetterExtractor {
    fn fit(&mut self, _data: &Dataset) -> Result<(), PreprocessingError> {
        Ok(())
    }

    fn transform(&self, data: &Dataset) -> Result<Dataset, PreprocessingError> {
        let mut out = data.clone();

        for field in &self.fields {
            let letters = data
                .categorical(field)?
                .iter()
                .map(|cell| cell.as_deref()?.chars().next().map(String::from))
                .collect();
            out.set_column(Column::categorical(field.as_str(), letters))?;
        }

        Ok(out)
    }

    fn step_name(&self) -> &'static str {
        "FirstLetterExtractor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(data: &Dataset, field: &str) -> Vec<Option<String>> {
        data.categorical(field).unwrap().to_vec()
    }

    #[test]
    fn test_first_letter_extraction() {
        let data = Dataset::new(vec![Column::from_strs(
            "cabin",
            &[Some("C85"), Some("Missing"), Some("E46")],
        )])
        .unwrap();

        let out = FirstLetterExtractor::new(["cabin"]).transform(&data).unwrap();
        assert_eq!(
            strings(&out, "cabin"),
            vec![
                Some("C".to_string()),
                Some("M".to_string()),
                Some("E".to_string())
            ]
        );
    }

    #[test]
    fn test_first_letter_missing_and_empty() {
        let data = Dataset::new(vec![Column::from_strs("cabin", &[None, Some(""), Some("B")])])
            .unwrap();

        let out = FirstLetterExtractor::new(["cabin"]).transform(&data).unwrap();
        assert_eq!(strings(&out, "cabin"), vec![None, None, Some("B".to_string())]);
    }

    #[test]
    fn test_first_letter_multibyte() {
        let data = Dataset::new(vec![Column::from_strs("cabin", &[Some("Äx")])]).unwrap();
        let out = FirstLetterExtractor::new(["cabin"]).transform(&data).unwrap();
        assert_eq!(strings(&out, "cabin"), vec![Some("Ä".to_string())]);
    }

    #[test]
    fn test_first_letter_idempotent() {
        let data = Dataset::new(vec![Column::from_strs("cabin", &[Some("C85"), Some("D")])])
            .unwrap();
        let extractor = FirstLetterExtractor::new(["cabin"]);
        let once = extractor.transform(&data).unwrap();
        let twice = extractor.transform(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_letter_missing_field() {
        let data = Dataset::new(vec![Column::from_strs("cabin", &[Some("C85")])]).unwrap();
        let result = FirstLetterExtractor::new(["deck"]).transform(&data);
        assert!(matches!(
            result,
            Err(PreprocessingError::MissingField { .. })
        ));
    }
}
