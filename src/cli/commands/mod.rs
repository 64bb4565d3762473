pub mod add;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod next;
pub mod plan;
pub mod take;
pub mod today;
