pub mod datatype;
pub mod record;
pub mod value;

pub use record::Record;
pub use value::Value;
