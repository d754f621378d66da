use crate::error::Result;
use crate::parser::command::Condition;
use crate::storage::Schema;
use crate::types::value::{unquote, value_to_string, Value};
use crate::types::Record;

/// A compiled `column = value` test.
///
/// The target literal is coerced against the column's declared type (text for
/// columns the schema does not know) and both sides are compared in their
/// rendered text form, so `5` matches `"5"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    pub target: String,
}

impl Predicate {
    pub fn compile(schema: &Schema, cond: &Condition) -> Result<Self> {
        let target = match schema.column(&cond.column) {
            Some(col) => col.coerce(&cond.value)?,
            None => Value::Str(unquote(&cond.value).to_string()),
        };
        Ok(Self {
            column: cond.column.clone(),
            target: value_to_string(&target),
        })
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.rendered(&self.column) == self.target
    }
}

pub(super) fn filter_records(records: Vec<Record>, predicate: Option<&Predicate>) -> Vec<Record> {
    match predicate {
        None => records,
        Some(p) => records.into_iter().filter(|r| p.matches(r)).collect(),
    }
}
