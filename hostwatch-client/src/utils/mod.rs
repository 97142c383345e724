//! 工具模块

pub mod datetime;
pub mod log_sanitizer;
