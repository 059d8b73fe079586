pub mod config;
pub mod free_day;
pub mod init;
pub mod list;
pub mod log;
pub mod overtime;
pub mod session;
pub mod sort;
pub mod take_overtime;
