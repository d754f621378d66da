pub mod cache;
pub mod execute;
pub mod format;
pub mod output;

pub use cache::QueryCache;
pub use execute::execute_command;
pub use format::{format_select, to_result_set};
pub use output::{MutationSummary, Output, ResultSet, TableInfo};
