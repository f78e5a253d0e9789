//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the harness: data models,
//! build layout detection, executable lookup and example execution.
//!
//! 此模块包含测试工具的核心功能：数据模型、构建布局检测、
//! 可执行文件定位和示例执行。

pub mod execution;
pub mod layout;
pub mod locator;
pub mod models;

// Re-exports
pub use execution::{run_example, scan_output};
pub use layout::detect_multiconfig;
pub use locator::{Platform, locate};
pub use models::{BuildContext, EXAMPLES, HarnessError, RunResult, Verdict};
