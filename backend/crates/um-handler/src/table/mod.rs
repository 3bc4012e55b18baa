pub mod paginator;
pub mod sort;
pub mod user_column;
pub mod user_table;
