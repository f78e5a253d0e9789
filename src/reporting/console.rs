//! # Console Reporting Module / 控制台报告模块
//!
//! All operator-facing output of a run: the run header, per-example pass
//! lines, the full diagnostic dump of a failing example, and the final
//! error message printed by the top-level handler.
//!
//! 运行过程中面向操作者的所有输出：运行头信息、每个示例的通过行、
//! 失败示例的完整诊断输出，以及顶层处理器打印的最终错误信息。

use colored::*;

use crate::core::models::{BuildContext, HarnessError, RunResult, Verdict};
use crate::infra::t;

/// Prints where the examples are looked up and which layout was detected.
pub fn print_run_header(ctx: &BuildContext) {
    println!("{}", t!("run.build_root", path = ctx.build_root.display()).cyan());
    if ctx.multi_config {
        println!("{}", t!("run.layout_multi", config = &ctx.config).cyan());
    } else {
        println!("{}", t!("run.layout_single").cyan());
    }
}

/// Prints the one-line confirmation for a passing example.
pub fn print_pass(result: &RunResult) {
    println!("{}", t!("run.example_passed", name = &result.example).green());
}

/// Prints the offending line of a failing example followed by its full
/// stdout and stderr.
///
/// ```text
/// Example '01_simple_kernel' failed at output line 3:
/// ERROR: Could not create pipeline
///
/// Full log:
/// <stdout>
/// <stderr>
/// ```
///
/// 打印失败示例的出错行，随后打印其完整的 stdout 和 stderr。
pub fn print_failure_details(result: &RunResult) {
    let Verdict::Failed { line_index, line } = &result.verdict else {
        return;
    };

    println!(
        "{}",
        t!("run.example_failed_at", name = &result.example, index = line_index)
            .red()
            .bold()
    );
    println!("{}", line);
    println!();
    println!("{}", t!("run.full_log").yellow());
    println!("{}", result.stdout);
    println!("{}", result.stderr);
    println!("{}", t!("run.exit_status", status = result.status).dimmed());
}

/// Prints the closing line of a fully successful run.
pub fn print_all_passed(count: usize) {
    println!("\n{}", t!("run.all_passed", count = count).green().bold());
}

/// Prints the error that ended the run.
///
/// Harness errors go to stdout next to the rest of the run log. Example
/// failures have already been dumped by [`print_failure_details`], so only a
/// short closing line is added for them. Anything else is unexpected and is
/// printed with its full context chain.
///
/// 打印结束运行的错误。
pub fn print_error(err: &anyhow::Error) {
    match err.downcast_ref::<HarnessError>() {
        Some(harness_err) if harness_err.is_environment_error() => {
            println!("{}", harness_err.to_string().red().bold());
        }
        Some(harness_err) => {
            println!("{}", harness_err.to_string().red());
        }
        None => {
            println!(
                "{}",
                t!("error.generic", message = format!("{err:#}")).red().bold()
            );
        }
    }
}
