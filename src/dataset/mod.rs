//! In-memory tabular datasets.
//!
//! A [`Dataset`] is an ordered list of named, typed columns of equal length.
//! Every cell may be missing (`None`). Loading data from files is left to the
//! caller; this module only provides the table structure the preprocessing
//! transformers operate on, plus the conversion to a dense numeric matrix
//! handed to a model.
//!
//! # Example
//!
//! ```rust
//! use titanic_features::dataset::{Column, Dataset};
//!
//! let data = Dataset::new(vec![
//!     Column::numeric("age", vec![Some(22.0), None]),
//!     Column::from_strs("sex", &[Some("male"), Some("female")]),
//! ])
//! .unwrap();
//!
//! assert_eq!(data.n_rows(), 2);
//! assert_eq!(data.column_names(), vec!["age", "sex"]);
//! ```

use crate::preprocessing::error::PreprocessingError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

mod column;

pub use self::column::{Column, ColumnData, ColumnKind, Value};

/// An ordered collection of equally long, named columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset, checking that column lengths agree and names are unique.
    pub fn new(columns: Vec<Column>) -> Result<Self, PreprocessingError> {
        let n_rows = columns.first().map_or(0, Column::len);
        let mut seen = HashSet::with_capacity(columns.len());

        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(PreprocessingError::DuplicateField {
                    field: column.name().to_string(),
                });
            }
            if column.len() != n_rows {
                return Err(PreprocessingError::LengthMismatch {
                    field: column.name().to_string(),
                    expected: n_rows,
                    got: column.len(),
                });
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Whether a column with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, PreprocessingError> {
        self.position(name)
            .map(|idx| &self.columns[idx])
            .ok_or_else(|| PreprocessingError::MissingField {
                field: name.to_string(),
            })
    }

    /// Numeric cells of a column.
    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>], PreprocessingError> {
        match self.column(name)?.data() {
            ColumnData::Numeric(values) => Ok(values),
            ColumnData::Categorical(_) => Err(PreprocessingError::ColumnTypeMismatch {
                field: name.to_string(),
                expected: ColumnKind::Numeric,
                found: ColumnKind::Categorical,
            }),
        }
    }

    /// Categorical cells of a column.
    pub fn categorical(&self, name: &str) -> Result<&[Option<String>], PreprocessingError> {
        match self.column(name)?.data() {
            ColumnData::Categorical(values) => Ok(values),
            ColumnData::Numeric(_) => Err(PreprocessingError::ColumnTypeMismatch {
                field: name.to_string(),
                expected: ColumnKind::Categorical,
                found: ColumnKind::Numeric,
            }),
        }
    }

    /// Read one cell.
    pub fn value(&self, row: usize, name: &str) -> Result<Value<'_>, PreprocessingError> {
        if row >= self.n_rows {
            return Err(PreprocessingError::RowOutOfRange {
                row,
                n_rows: self.n_rows,
            });
        }
        Ok(self.column(name)?.data().value(row))
    }

    /// Insert a column, replacing a same-named column in place or appending it.
    ///
    /// The first column added to a dataset without columns fixes the row count.
    pub fn set_column(&mut self, column: Column) -> Result<(), PreprocessingError> {
        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(PreprocessingError::LengthMismatch {
                field: column.name().to_string(),
                expected: self.n_rows,
                got: column.len(),
            });
        }

        match self.position(column.name()) {
            Some(idx) => self.columns[idx] = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    /// Remove the named columns. Fails without modifying anything if one is absent.
    pub fn drop_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), PreprocessingError> {
        for name in names {
            self.column(name.as_ref())?;
        }
        let names: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
        self.columns.retain(|c| !names.contains(c.name()));
        Ok(())
    }

    /// New dataset holding the named columns in the requested order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Dataset, PreprocessingError> {
        let columns = names
            .iter()
            .map(|name| self.column(name.as_ref()).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Dataset::new(columns)
    }

    /// Dense row-major matrix of a fully numeric dataset.
    ///
    /// # Errors
    /// - [`PreprocessingError::ColumnTypeMismatch`] if a categorical column remains
    /// - [`PreprocessingError::UnexpectedMissing`] if any cell is missing
    pub fn to_array2(&self) -> Result<Array2<f64>, PreprocessingError> {
        let mut out = Array2::<f64>::zeros((self.n_rows, self.columns.len()));

        for (j, column) in self.columns.iter().enumerate() {
            let values = self.numeric(column.name())?;
            for (i, cell) in values.iter().enumerate() {
                out[[i, j]] = cell.ok_or_else(|| PreprocessingError::UnexpectedMissing {
                    field: column.name().to_string(),
                    row: i,
                })?;
            }
        }

        Ok(out)
    }
}
