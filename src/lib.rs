//! # Example Runner Library / 示例运行器库
//!
//! Smoke-test harness for the compiled examples of a CMake build tree. Each
//! example executable is located inside the build tree, run to completion,
//! and fails the run if its standard output contains a line starting with
//! `ERROR:`.
//!
//! CMake 构建树中已编译示例的冒烟测试工具。在构建树中定位每个示例的
//! 可执行文件并运行到结束；如果其标准输出中有以 `ERROR:` 开头的行，
//! 则整个运行失败。
//!
//! ## Modules / 模块
//!
//! - `core` - Build layout detection, executable lookup and example execution
//! - `infra` - Child process capture
//! - `reporting` - Console output
//! - `commands` - The run driver
//! - `cli` - Command-line interface
//!
//! - `core` - 构建布局检测、可执行文件定位和示例执行
//! - `infra` - 子进程输出捕获
//! - `reporting` - 控制台输出
//! - `commands` - 运行驱动
//! - `cli` - 命令行接口

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::execution;
pub use crate::core::layout;
pub use crate::core::locator;
pub use crate::core::models;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");

/// Initializes the application's internationalization (i18n) and returns the
/// selected language.
///
/// An explicitly requested language wins. Otherwise the system locale is
/// used. Either way the full locale (e.g. "zh-CN") is tried first, then just
/// the language code (e.g. "en" from "en-US"), and finally the default "en".
pub fn init(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}
