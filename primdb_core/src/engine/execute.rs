mod ddl;
mod dispatch;
mod dml;
mod filter;
mod select;

pub use dispatch::execute_command;
pub use dml::{delete, insert, update};
pub use filter::Predicate;
pub use select::{info, select};
