//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the harness: the fixed
//! example list, the build context, the outcome of a single example run, and
//! the errors that abort a run.
//!
//! 此模块定义了测试工具共用的数据结构：固定的示例列表、构建上下文、
//! 单个示例的运行结果，以及中止运行的错误。

use crate::infra::t;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// The examples checked by the harness, in run and report order.
/// 测试工具检查的示例，按运行和报告顺序排列。
pub const EXAMPLES: &[&str] = &[
    "00_no_codegen",
    "01_simple_kernel",
    "02_multiple_entrypoints",
    "03_module_import",
    "04_uniforms",
    "05_autodiff",
];

/// The line prefix an example prints on stdout to signal failure.
/// 示例在 stdout 上输出的、表示失败的行前缀。
pub const FAILURE_MARKER: &str = "ERROR:";

/// Everything the locator needs to resolve an example's executable.
/// Built once at startup and never mutated afterwards.
///
/// 定位器解析示例可执行文件所需的全部信息。
/// 在启动时构建一次，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Root of the CMake build tree / CMake 构建树的根目录
    pub build_root: PathBuf,
    /// Configuration subdirectory, only used for multi-config layouts
    /// 配置子目录，仅用于多配置布局
    pub config: String,
    /// Whether the tree was produced by a multi-config generator
    /// 构建树是否由多配置生成器生成
    pub multi_config: bool,
    /// Executable file suffix of the host platform / 宿主平台的可执行文件后缀
    pub exe_suffix: &'static str,
}

impl BuildContext {
    pub fn new(
        build_root: PathBuf,
        config: impl Into<String>,
        multi_config: bool,
        exe_suffix: &'static str,
    ) -> Self {
        Self {
            build_root,
            config: config.into(),
            multi_config,
            exe_suffix,
        }
    }
}

/// The pass/fail decision for one example's output.
/// 单个示例输出的通过/失败判定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No stdout line starts with the failure marker.
    /// 没有任何 stdout 行以失败标记开头。
    Passed,
    /// The first stdout line starting with the failure marker.
    /// 第一行以失败标记开头的 stdout 行。
    Failed {
        /// Zero-based index of the offending line / 出错行的索引（从 0 开始）
        line_index: usize,
        /// The offending line as printed / 出错行的原始内容
        line: String,
    },
}

impl Verdict {
    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Failed { .. })
    }
}

/// The outcome of running a single example.
/// 运行单个示例的结果。
#[derive(Debug)]
pub struct RunResult {
    pub example: String,
    pub verdict: Verdict,
    /// Entire captured standard output / 完整捕获的标准输出
    pub stdout: String,
    /// Entire captured standard error, kept for diagnostics only
    /// 完整捕获的标准错误，仅用于诊断
    pub stderr: String,
    pub status: ExitStatus,
    pub duration: Duration,
}

impl RunResult {
    pub fn passed(&self) -> bool {
        !self.verdict.is_failure()
    }
}

/// Errors that end a harness run. Every variant is fatal; the top-level
/// handler turns it into a non-zero exit code.
///
/// 结束测试运行的错误。所有变体都是致命的，由顶层处理器转换为非零退出码。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// `CMakeCache.txt` is missing: the examples were never built.
    /// 缺少 `CMakeCache.txt`：示例从未被构建。
    MissingBuildCache { path: PathBuf },
    /// The resolved executable does not exist.
    /// 解析出的可执行文件不存在。
    MissingExecutable { example: String, path: PathBuf },
    /// The example printed a line starting with the failure marker.
    /// 示例输出了以失败标记开头的行。
    ExampleFailed { example: String, line_index: usize },
    /// The example outlived `--timeout` and was killed.
    /// 示例运行超过 `--timeout` 并被终止。
    ExampleTimedOut { example: String, timeout: Duration },
}

impl HarnessError {
    /// `true` for errors caused by a broken test environment rather than by
    /// an example's own output.
    pub fn is_environment_error(&self) -> bool {
        matches!(
            self,
            HarnessError::MissingBuildCache { .. } | HarnessError::MissingExecutable { .. }
        )
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::MissingBuildCache { .. } => {
                write!(f, "{}", t!("error.missing_build_cache"))
            }
            HarnessError::MissingExecutable { example, path } => write!(
                f,
                "{}",
                t!(
                    "error.missing_executable",
                    name = example,
                    path = path.display()
                )
            ),
            HarnessError::ExampleFailed {
                example,
                line_index,
            } => write!(
                f,
                "{}",
                t!("error.example_failed", name = example, index = line_index)
            ),
            HarnessError::ExampleTimedOut { example, timeout } => write!(
                f,
                "{}",
                t!(
                    "error.example_timed_out",
                    name = example,
                    secs = timeout.as_secs()
                )
            ),
        }
    }
}

impl std::error::Error for HarnessError {}
