//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the harness: child
//! process execution with output capture, and i18n support.
//!
//! 此模块为测试工具提供基础设施服务：带输出捕获的子进程执行，以及国际化支持。

pub mod command;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
