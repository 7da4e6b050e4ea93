//! 通用工具函数

pub mod log_sanitizer;
