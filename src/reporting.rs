//! # Reporting Module / 报告模块
//!
//! This module handles everything the harness prints for the operator:
//! progress, pass confirmations, failure diagnostics and fatal errors.
//!
//! 此模块处理测试工具为操作者打印的所有内容：进度、通过确认、失败诊断和致命错误。

pub mod console;

// Re-export common reporting functions
pub use console::{print_error, print_failure_details, print_pass};
