//! Core data model types.
//!
//! Loading produces a schema-less [`RecordTable`]: every row is a [`Record`] mapping field names
//! to dynamically typed [`Value`]s, exactly as they appeared in the JSON line. When a caller
//! wants typed columns it projects the table through a [`Schema`] into a [`DataSet`]; the schema
//! is only checked at that point.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DataError, DataResult};

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name. Dots address nested objects (e.g. `attributes.WiFi`).
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A list of fields describing the typed view a caller wants over a [`RecordTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// One row of a [`RecordTable`]: field name to value.
pub type Record = BTreeMap<String, Value>;

/// A single dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON `null`, or a missing cell in a typed projection.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer that fits in an `i64`.
    Int64(i64),
    /// Any other JSON number.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// JSON array.
    List(Vec<Value>),
    /// Nested JSON object.
    Object(Record),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string payload, if this is a [`Value::Utf8`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements, if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the nested record, if this is a [`Value::Object`].
    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int64(i),
                None => Value::Float64(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Utf8(s),
            serde_json::Value::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(record_from_json(map)),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int64(i) => serde_json::Value::from(*i),
            Value::Float64(f) => serde_json::Value::from(*f),
            Value::Utf8(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}

/// Convert a parsed JSON object into a [`Record`].
pub fn record_from_json(map: serde_json::Map<String, serde_json::Value>) -> Record {
    map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
}

/// In-memory table of schema-less rows, in input order.
///
/// `columns` is the union of every row's field names, in the order they were first seen.
/// Rows are not required to share a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl RecordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, preserving their order.
    pub fn from_rows(rows: Vec<Record>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.push(row);
        }
        table
    }

    /// Append a row, extending the column list with any unseen field names.
    pub fn push(&mut self, row: Record) {
        for key in row.keys() {
            if !self.columns.iter().any(|c| c == key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(row);
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns `true` if at least one row carries `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Cell at (`row`, `column`), if the row exists and carries that field.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row)?.get(column)
    }

    /// Iterate one column top to bottom; rows without the field yield `None`.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.rows.iter().map(move |r| r.get(name))
    }

    /// Create a new table containing only rows that match `predicate`.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        Self::from_rows(self.rows.iter().filter(|row| predicate(row)).cloned().collect())
    }

    /// Project the table through `schema` into a typed [`DataSet`].
    ///
    /// Field names may be dot paths into nested objects. A field that no row carries is a
    /// [`DataError::SchemaMismatch`]; a cell that is absent or `null` becomes [`Value::Null`];
    /// a cell of the wrong type is a [`DataError::ParseError`] (rows are 1-based).
    pub fn project(&self, schema: &Schema) -> DataResult<DataSet> {
        for field in &schema.fields {
            let root = field.name.split('.').next().unwrap_or(&field.name);
            if !self.has_column(root) {
                return Err(DataError::SchemaMismatch {
                    message: format!("missing required field '{}'", field.name),
                });
            }
        }

        let mut rows: Vec<Vec<Value>> = Vec::with_capacity(self.rows.len());
        for (idx0, record) in self.rows.iter().enumerate() {
            let row_num = idx0 + 1;
            let mut row = Vec::with_capacity(schema.fields.len());
            for field in &schema.fields {
                let cell = match get_by_dot_path(record, &field.name) {
                    Some(v) => convert_value(row_num, &field.name, &field.data_type, v)?,
                    None => Value::Null,
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(DataSet::new(schema.clone(), rows))
    }
}

fn get_by_dot_path<'a>(root: &'a Record, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn convert_value(row: usize, column: &str, data_type: &DataType, v: &Value) -> DataResult<Value> {
    let mismatch = |message: &str| DataError::ParseError {
        row,
        column: column.to_string(),
        raw: v.to_string(),
        message: message.to_string(),
    };

    match (data_type, v) {
        (_, Value::Null) => Ok(Value::Null),
        (DataType::Utf8, Value::Utf8(s)) => Ok(Value::Utf8(s.clone())),
        (DataType::Utf8, _) => Err(mismatch("expected string")),
        (DataType::Bool, Value::Bool(b)) => Ok(Value::Bool(*b)),
        (DataType::Bool, _) => Err(mismatch("expected bool")),
        (DataType::Int64, Value::Int64(i)) => Ok(Value::Int64(*i)),
        (DataType::Int64, _) => Err(mismatch("expected integer number")),
        (DataType::Float64, Value::Float64(f)) => Ok(Value::Float64(*f)),
        (DataType::Float64, Value::Int64(i)) => Ok(Value::Float64(*i as f64)),
        (DataType::Float64, _) => Err(mismatch("expected number")),
    }
}

/// In-memory typed tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
