use crate::error::{DbError, Result};
use crate::types::datatype::{parse_datatype, DataType};
use crate::types::record::ID_COLUMN;
use crate::types::value::{parse_value, Value};

/// Represents a single column in a table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub dtype: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: DataType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }

    /// Parses a `name:type` spec such as `age:int`.
    pub fn parse_spec(spec: &str) -> Result<Self> {
        let bad = || {
            DbError::InvalidFormat(format!(
                "Bad column definition '{spec}'. Use name:type where type is int|str|bool"
            ))
        };
        let (name, dtype) = spec.split_once(':').ok_or_else(bad)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(bad());
        }
        let dtype = parse_datatype(dtype.trim()).map_err(|_| bad())?;
        Ok(Self::new(name, dtype))
    }

    /// The `name:type` spelling written to the catalog file.
    pub fn spec(&self) -> String {
        format!("{}:{}", self.name, self.dtype)
    }

    /// Coerces a raw literal against this column's declared type.
    pub fn coerce(&self, raw: &str) -> Result<Value> {
        parse_value(&self.dtype, raw).map_err(|reason| DbError::Type {
            column: self.name.clone(),
            value: raw.trim().to_string(),
            reason,
        })
    }
}

/// Represents the schema of a table. The first column is always `ID:int`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    /// Builds a schema from user columns, prepending the implicit identifier.
    pub fn new(user_columns: Vec<Column>) -> Result<Self> {
        let mut columns = Vec::with_capacity(user_columns.len() + 1);
        columns.push(Column::new(ID_COLUMN, DataType::Int));
        for col in user_columns {
            if columns.iter().any(|c| c.name == col.name) {
                return Err(DbError::InvalidFormat(format!(
                    "Duplicate column name '{}'",
                    col.name
                )));
            }
            columns.push(col);
        }
        Ok(Self { columns })
    }

    /// Rebuilds a schema from its persisted specs, which already include `ID`.
    pub fn from_specs(specs: &[String]) -> Result<Self> {
        let mut columns = specs
            .iter()
            .map(|s| Column::parse_spec(s))
            .collect::<Result<Vec<_>>>()?;
        if columns.first().map(|c| c.name.as_str()) == Some(ID_COLUMN) {
            columns.remove(0);
        }
        Self::new(columns)
    }

    pub fn specs(&self) -> Vec<String> {
        self.columns.iter().map(Column::spec).collect()
    }

    /// Returns the number of columns in this schema, `ID` included
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns the caller supplies on insert, i.e. everything but `ID`.
    pub fn user_columns(&self) -> &[Column] {
        &self.columns[1..]
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}
