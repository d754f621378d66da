use crate::types::datatype::DataType;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
}

const TRUE_WORDS: [&str; 3] = ["true", "1", "yes"];
const FALSE_WORDS: [&str; 3] = ["false", "0", "no"];

/// Coerces a raw literal into a value of `dtype`.
///
/// Surrounding whitespace is trimmed and one matching pair of `"` or `'`
/// quotes is removed before the literal is interpreted. The error is the
/// short reason, e.g. `not an integer`.
pub fn parse_value(dtype: &DataType, token: &str) -> Result<Value, String> {
    let literal = unquote(token);
    match dtype {
        DataType::Int => literal
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| "not an integer".to_string()),
        DataType::Bool => parse_bool(literal).map(Value::Bool),
        DataType::Str => Ok(Value::Str(literal.to_string())),
    }
}

/// Text form of a value. Predicates compare on this form, so `Int(5)` and
/// `Str("5")` are equal for filtering purposes.
pub fn value_to_string(v: &Value) -> String {
    match v {
        Value::Int(n) => n.to_string(),
        Value::Str(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
    }
}

/// Strips one matching pair of single or double quotes; inner text is kept verbatim.
pub fn unquote(token: &str) -> &str {
    let t = token.trim();
    let bytes = t.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &t[1..t.len() - 1];
        }
    }
    t
}

fn parse_bool(token: &str) -> Result<bool, String> {
    let lowered = token.trim().to_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err("not a boolean".to_string())
    }
}

impl Value {
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Int(n) => JsonValue::from(*n),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::Bool(b) => JsonValue::Bool(*b),
        }
    }

    /// Reads a stored JSON scalar. `null` yields `None` and is treated like a
    /// missing key; anything else that is not an i64, string or bool is kept
    /// as its JSON text.
    pub fn from_json(json: &JsonValue) -> Option<Value> {
        match json {
            JsonValue::Null => None,
            JsonValue::Bool(b) => Some(Value::Bool(*b)),
            JsonValue::String(s) => Some(Value::Str(s.clone())),
            JsonValue::Number(n) => Some(match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Str(n.to_string()),
            }),
            other => Some(Value::Str(other.to_string())),
        }
    }
}
