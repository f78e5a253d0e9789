//! # Run Command Module / 运行命令模块
//!
//! Drives a harness run: detects the build layout once, then runs every
//! example in order and stops at the first one that fails.
//!
//! 驱动一次测试运行：先检测一次构建布局，然后按顺序运行每个示例，
//! 在第一个失败的示例处停止。

use anyhow::Result;
use std::{path::PathBuf, time::Duration};

use crate::{
    core::{
        execution::run_example,
        layout::detect_multiconfig,
        locator::{Platform, locate},
        models::{BuildContext, EXAMPLES, HarnessError, Verdict},
    },
    infra::t,
    reporting::console,
};

/// Arguments of a harness run, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Root of the CMake build tree / CMake 构建树的根目录
    pub build_dir: PathBuf,
    /// Configuration to run under a multi-config layout / 多配置布局下要运行的配置
    pub config: String,
    /// Optional per-example time limit / 可选的单个示例时间限制
    pub timeout: Option<Duration>,
}

/// Executes the run command for the fixed example list.
pub async fn execute(args: RunArgs) -> Result<()> {
    execute_examples(args, EXAMPLES, Platform::host()).await
}

/// Runs `examples` in order against the build tree named in `args`.
///
/// Layout detection happens once, before any path is computed. The first
/// missing executable, failing example or timeout ends the run with an error;
/// reaching the end of the list means every example passed.
///
/// # Arguments
/// * `args` - Parsed command-line arguments
/// * `examples` - Ordered example identifiers to run
/// * `platform` - Platform whose executable naming applies
///
/// # Returns
/// `Ok(())` if every example passed, otherwise the error that stopped the run
pub async fn execute_examples(args: RunArgs, examples: &[&str], platform: Platform) -> Result<()> {
    let multi_config = detect_multiconfig(&args.build_dir)?;
    let ctx = BuildContext::new(
        args.build_dir,
        args.config,
        multi_config,
        platform.exe_suffix(),
    );

    console::print_run_header(&ctx);

    for example in examples {
        let exe_path = locate(example, &ctx);
        tracing::info!("{}", t!("run.running_example", name = example));

        let result = run_example(example, &exe_path, args.timeout).await?;

        if let Verdict::Failed { line_index, .. } = &result.verdict {
            console::print_failure_details(&result);
            return Err(HarnessError::ExampleFailed {
                example: result.example.clone(),
                line_index: *line_index,
            }
            .into());
        }
        console::print_pass(&result);
    }

    console::print_all_passed(examples.len());
    Ok(())
}
