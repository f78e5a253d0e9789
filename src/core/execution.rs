//! # Example Execution Module / 示例执行模块
//!
//! Runs a single example executable to completion and decides pass/fail by
//! scanning its standard output for lines beginning with the failure marker.
//!
//! 运行单个示例可执行文件直到结束，并通过扫描其标准输出中以失败标记
//! 开头的行来判定通过或失败。

use anyhow::{Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::{
    core::models::{FAILURE_MARKER, HarnessError, RunResult, Verdict},
    infra::{command, t},
};

/// Runs the executable at `path` with no arguments and inspects its output.
///
/// The existence check happens before anything is spawned: a missing file
/// yields [`HarnessError::MissingExecutable`]. Without a `timeout` the call
/// blocks until the child exits; with one, an overrunning child is killed and
/// [`HarnessError::ExampleTimedOut`] is returned.
///
/// # Arguments
/// * `example` - Identifier of the example, used in results and diagnostics
/// * `path` - Resolved path of the example executable
/// * `timeout` - Optional wall-clock limit for the child process
///
/// # Returns
/// A `RunResult` with the verdict and the full captured output
pub async fn run_example(
    example: &str,
    path: &Path,
    timeout: Option<Duration>,
) -> Result<RunResult> {
    if !path.is_file() {
        return Err(HarnessError::MissingExecutable {
            example: example.to_string(),
            path: path.to_path_buf(),
        }
        .into());
    }

    let mut cmd = tokio::process::Command::new(path);
    cmd.kill_on_drop(true);

    tracing::debug!(example, path = %path.display(), "spawning example");
    let start_time = Instant::now();

    let capture = command::spawn_and_capture(cmd);
    let (status_res, output) = match timeout {
        Some(limit) => match tokio::time::timeout(limit, capture).await {
            Ok(res) => res,
            Err(_) => {
                return Err(HarnessError::ExampleTimedOut {
                    example: example.to_string(),
                    timeout: limit,
                }
                .into());
            }
        },
        None => capture.await,
    };
    let duration = start_time.elapsed();

    let status = status_res.with_context(|| {
        t!("error.spawn_failed", name = example, path = path.display()).to_string()
    })?;
    tracing::debug!(example, %status, ?duration, "example exited");

    Ok(RunResult {
        example: example.to_string(),
        verdict: scan_output(&output.stdout),
        stdout: output.stdout,
        stderr: output.stderr,
        status,
        duration,
    })
}

/// Scans captured stdout for the first line starting with the failure marker.
///
/// Lines are split on `\n` only, so a trailing `\r` stays part of the line
/// text and the index matches what a `\n` split of the raw log gives.
///
/// 扫描捕获的 stdout，查找第一行以失败标记开头的行。
pub fn scan_output(stdout: &str) -> Verdict {
    stdout
        .split('\n')
        .enumerate()
        .find(|(_, line)| line.starts_with(FAILURE_MARKER))
        .map(|(line_index, line)| Verdict::Failed {
            line_index,
            line: line.to_string(),
        })
        .unwrap_or(Verdict::Passed)
}
