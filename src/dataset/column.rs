//! Typed columns and single-cell values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Floating-point values.
    Numeric,
    /// String labels.
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// Column storage. `None` marks a missing cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    /// Numeric cells.
    Numeric(Vec<Option<f64>>),
    /// Categorical cells.
    Categorical(Vec<Option<String>>),
}

impl ColumnData {
    /// Number of cells.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    /// Whether the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The declared type of this storage.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Whether the cell at `row` is missing. Out-of-range rows count as missing.
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            ColumnData::Numeric(v) => v.get(row).is_none_or(Option::is_none),
            ColumnData::Categorical(v) => v.get(row).is_none_or(Option::is_none),
        }
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Categorical(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Read one cell.
    pub fn value(&self, row: usize) -> Value<'_> {
        match self {
            ColumnData::Numeric(v) => match v.get(row).copied().flatten() {
                Some(x) => Value::Number(x),
                None => Value::Missing,
            },
            ColumnData::Categorical(v) => match v.get(row).and_then(Option::as_deref) {
                Some(s) => Value::Text(s),
                None => Value::Missing,
            },
        }
    }
}

/// A named column of a [`Dataset`](super::Dataset).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create a column from its name and storage.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Create a numeric column.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, ColumnData::Numeric(values))
    }

    /// Create a categorical column.
    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self::new(name, ColumnData::Categorical(values))
    }

    /// Convenience constructor for categorical columns from string slices.
    pub fn from_strs(name: impl Into<String>, values: &[Option<&str>]) -> Self {
        Self::categorical(
            name,
            values.iter().map(|v| v.map(str::to_string)).collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn into_data(self) -> ColumnData {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }
}

/// A borrowed view of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

impl Value<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}
