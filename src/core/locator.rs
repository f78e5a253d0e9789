//! # Executable Locator Module / 可执行文件定位模块
//!
//! Computes where the build system places each example's executable. All
//! functions here are pure: whether the file actually exists is checked by
//! the runner.
//!
//! 计算构建系统放置每个示例可执行文件的位置。此处的所有函数都是纯函数：
//! 文件是否真实存在由运行器检查。

use std::path::PathBuf;

use crate::core::models::BuildContext;

/// Prefix shared by every example target name.
pub const EXECUTABLE_PREFIX: &str = "slang_webgpu_example_";

/// The host platform family, as far as executable naming is concerned.
/// 就可执行文件命名而言的宿主平台类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Other,
}

impl Platform {
    /// Classifies an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        if os == "windows" {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// The platform this harness is running on.
    pub fn host() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn exe_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Other => "",
        }
    }
}

/// File name of the executable built for `example`.
pub fn executable_name(example: &str, exe_suffix: &str) -> String {
    format!("{EXECUTABLE_PREFIX}{example}{exe_suffix}")
}

/// Resolves the expected executable path of `example` within `ctx`.
///
/// Single-config: `<build_root>/examples/<example>/<name>`
/// Multi-config:  `<build_root>/examples/<example>/<config>/<name>`
///
/// 解析 `example` 在 `ctx` 中的预期可执行文件路径。
pub fn locate(example: &str, ctx: &BuildContext) -> PathBuf {
    let mut dir = ctx.build_root.join("examples").join(example);
    if ctx.multi_config {
        dir.push(&ctx.config);
    }
    dir.join(executable_name(example, ctx.exe_suffix))
}
