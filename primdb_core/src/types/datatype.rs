use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Str,
    Bool,
}

impl DataType {
    /// Spelling used in `name:type` specs and in the catalog file.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Str => "str",
            DataType::Bool => "bool",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn parse_datatype(s: &str) -> Result<DataType, String> {
    match s.to_lowercase().as_str() {
        "int" | "integer" => Ok(DataType::Int),
        "str" | "text" | "string" => Ok(DataType::Str),
        "bool" | "boolean" => Ok(DataType::Bool),
        other => Err(format!("Unknown type '{other}'. Use int|str|bool")),
    }
}
