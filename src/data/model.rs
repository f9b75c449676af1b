use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the dtypes a spreadsheet yields.
/// `Eq` + `Hash` so whole tables can be compared and hashed.
#[derive(Debug, Clone)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Date / time kept as text.
    Date(String),
    Null,
}

// -- Manual Eq/Hash: floats compare by bit pattern so NaN == NaN --

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        use CellValue::*;
        match (self, other) {
            (String(a), String(b)) | (Date(a), Date(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Bool(a), Bool(b)) => a == b,
            (Null, Null) => true,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) | CellValue::Date(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

/// Display form used by the table widget.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` for numeric comparisons.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether the cell carries no value (`Null` or a NaN float).
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Text written to a CSV field on export.
    pub fn to_csv_field(&self) -> String {
        match self {
            CellValue::String(s) | CellValue::Date(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(v) if v.is_nan() => String::new(),
            // Debug keeps the trailing ".0" on integral floats.
            CellValue::Float(v) => format!("{v:?}"),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::Null => String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single row. `values[i]` belongs to `Dataset::columns[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub values: Vec<CellValue>,
}

impl Record {
    pub fn new(values: Vec<CellValue>) -> Self {
        Record { values }
    }

    pub fn get(&self, column: usize) -> &CellValue {
        static NULL: CellValue = CellValue::Null;
        self.values.get(column).unwrap_or(&NULL)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// Ordered columns plus ordered rows. No identity beyond row position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dataset {
    /// Column names in source order.
    pub columns: Vec<String>,
    /// All records (rows).
    pub records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, padding short rows with `Null` so every record has
    /// one value per column.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        let width = columns.len();
        let records = records
            .into_iter()
            .map(|mut r| {
                r.values.resize(width, CellValue::Null);
                r
            })
            .collect();
        Dataset { columns, records }
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Overwrite a column in place, or append it when absent.
    /// `values` must hold one entry per record.
    pub fn set_column(&mut self, name: &str, values: Vec<CellValue>) {
        debug_assert_eq!(values.len(), self.records.len());
        match self.column_index(name) {
            Some(idx) => {
                for (record, value) in self.records.iter_mut().zip(values) {
                    record.values[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (record, value) in self.records.iter_mut().zip(values) {
                    record.values.push(value);
                }
            }
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DescriptorColumns – positions of the two required numeric columns
// ---------------------------------------------------------------------------

/// Hydrogen-bond donor count column.
pub const DONORS_COLUMN: &str = "Donantes_H";
/// Hydrogen-bond acceptor count column.
pub const ACCEPTORS_COLUMN: &str = "Aceptores_H";
/// Derived compliance flag column.
pub const RULE_COLUMN: &str = "Cumple_Regla";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorColumns {
    pub donors: usize,
    pub acceptors: usize,
}

impl DescriptorColumns {
    /// Locate both required columns, or return the names that are missing.
    pub fn locate(dataset: &Dataset) -> Result<Self, Vec<String>> {
        match (
            dataset.column_index(DONORS_COLUMN),
            dataset.column_index(ACCEPTORS_COLUMN),
        ) {
            (Some(donors), Some(acceptors)) => Ok(DescriptorColumns { donors, acceptors }),
            (donors, acceptors) => {
                let mut missing = Vec::new();
                if donors.is_none() {
                    missing.push(DONORS_COLUMN.to_string());
                }
                if acceptors.is_none() {
                    missing.push(ACCEPTORS_COLUMN.to_string());
                }
                Err(missing)
            }
        }
    }

    /// Read `(donors, acceptors)` from a record.
    ///
    /// `Ok(None)` when either cell is empty; an error when a cell holds a
    /// non-numeric value.
    pub fn read(&self, record: &Record, row: usize) -> anyhow::Result<Option<(f64, f64)>> {
        let donors = numeric_cell(record.get(self.donors), DONORS_COLUMN, row)?;
        let acceptors = numeric_cell(record.get(self.acceptors), ACCEPTORS_COLUMN, row)?;
        Ok(donors.zip(acceptors))
    }
}

fn numeric_cell(value: &CellValue, column: &str, row: usize) -> anyhow::Result<Option<f64>> {
    if value.is_missing() {
        return Ok(None);
    }
    match value.as_f64() {
        Some(v) => Ok(Some(v)),
        None => anyhow::bail!("Row {row}: '{value}' in column '{column}' is not numeric"),
    }
}
