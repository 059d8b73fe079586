pub mod day;
pub mod free_day;
pub mod list;
pub mod log;
pub mod overtime;
pub mod session;
pub mod sorter;
pub mod tracker;
