// ============================================================
// Layer 3 — Dataset Domain Type
// ============================================================
// Represents one tabular dataset held in memory:
//   - a header row with the column names
//   - a list of rows, each row one cell per column
//
// Cells are kept as the exact text read from the source file.
// Nothing is reformatted on the way in, so writing a Dataset
// back out reproduces the original values and column order.
//
// Column types are not declared anywhere. When a later stage
// needs them (e.g. preprocessing), they are inferred from the
// cell text with `column_kind()`.
//
// Example:
//   gender,lunch,math_score
//   female,standard,72
//   male,free/reduced,47
//
//   headers = ["gender", "lunch", "math_score"]
//   rows    = [["female", "standard", "72"],
//              ["male", "free/reduced", "47"]]
//
// Missing values:
//   A cell counts as missing when it is empty or one of the
//   usual "no value" markers (NA, NaN, null, N/A, ...).
//   Missing cells never decide a column's kind; later stages
//   impute them.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)

use serde::{Deserialize, Serialize};

/// Cell texts read as "no value", after trimming
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

/// True when `cell` holds no value
pub fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim())
}

/// The inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Every non-missing cell parses as a number
    Numeric,

    /// At least one non-missing cell is free text
    Categorical,
}

/// A header row plus the data rows below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names in file order
    pub headers: Vec<String>,

    /// Data rows, each with exactly `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate over the cells of one column
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Infer whether a column holds numbers or categories.
    ///
    /// Missing cells (see `is_missing`) are ignored.
    /// A column with no values at all counts as Numeric.
    pub fn column_kind(&self, index: usize) -> ColumnKind {
        let all_numeric = self
            .column(index)
            .filter(|cell| !is_missing(cell))
            .all(|cell| cell.trim().parse::<f64>().is_ok());

        if all_numeric {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        }
    }

    /// Build a new Dataset from the same headers and a subset of rows
    pub fn with_rows(&self, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: self.headers.clone(),
            rows,
        }
    }
}
