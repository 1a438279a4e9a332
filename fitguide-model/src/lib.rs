pub mod entry;
pub mod metric;
pub mod plan;
pub mod user;
