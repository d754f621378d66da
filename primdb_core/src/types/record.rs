use serde_json::{Map, Value as JsonValue};

use crate::types::value::{value_to_string, Value};

pub const ID_COLUMN: &str = "ID";

/// One row: column name to value, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    /// Replaces the value of `column`, or appends it when absent.
    pub fn set(&mut self, column: &str, value: Value) {
        match self.fields.iter_mut().find(|(name, _)| name == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column.to_string(), value)),
        }
    }

    /// The record identifier; `None` when the key is missing or not an integer.
    pub fn id(&self) -> Option<i64> {
        match self.get(ID_COLUMN) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Text form of a column; missing keys render as the empty string.
    pub fn rendered(&self, column: &str) -> String {
        self.get(column).map(value_to_string).unwrap_or_default()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> JsonValue {
        let mut obj = Map::new();
        for (name, value) in &self.fields {
            obj.insert(name.clone(), value.to_json());
        }
        JsonValue::Object(obj)
    }

    pub fn from_json_object(obj: &Map<String, JsonValue>) -> Self {
        let mut record = Record::new();
        for (name, json) in obj {
            if let Some(value) = Value::from_json(json) {
                record.fields.push((name.clone(), value));
            }
        }
        record
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(&name.into(), value);
        }
        record
    }
}
