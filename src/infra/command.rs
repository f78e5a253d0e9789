//! # Command Execution Module / 命令执行模块
//!
//! Spawns child processes and captures their standard output and standard
//! error in full, as two separate buffers.
//!
//! 派生子进程，并将其标准输出和标准错误完整地捕获为两个独立的缓冲区。

use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::infra::t;

/// Output captured from a finished child process.
/// 从已结束的子进程中捕获的输出。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Spawns a command with stdin closed and captures its stdout and stderr.
/// Both pipes are drained concurrently so the child never stalls on a full
/// pipe, and the output is decoded only after the streams reach EOF.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The captured stdout and stderr, empty if the process could not be spawned.
///
/// A failure to read either stream is reported through the status result,
/// so callers never mistake a partial capture for a complete one.
///
/// 派生一个关闭 stdin 的命令，并捕获其 stdout 和 stderr。
/// 两个管道被并发读取，子进程不会因管道写满而阻塞；输出在流结束后才解码。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<ExitStatus>, CapturedOutput) {
    let mut child = match cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return (Err(e), CapturedOutput::default()),
    };

    let Some(stdout) = child.stdout.take() else {
        return (
            Err(std::io::Error::other(t!("error.capture_stdout_failed").to_string())),
            CapturedOutput::default(),
        );
    };
    let Some(stderr) = child.stderr.take() else {
        return (
            Err(std::io::Error::other(t!("error.capture_stderr_failed").to_string())),
            CapturedOutput::default(),
        );
    };

    let stdout_handle = tokio::spawn(read_all(stdout));
    let stderr_handle = tokio::spawn(read_all(stderr));

    let status = child.wait().await;

    let stdout = join_reader(stdout_handle, "stdout").await;
    let stderr = join_reader(stderr_handle, "stderr").await;

    let output = CapturedOutput {
        stdout: stdout.as_deref().map(decode).unwrap_or_default(),
        stderr: stderr.as_deref().map(decode).unwrap_or_default(),
    };
    // A truncated capture must not be scanned as if it were the full log.
    let status = status.and_then(|status| stdout.and(stderr).map(|_| status));

    (status, output)
}

/// Decodes captured bytes as UTF-8, replacing invalid sequences.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Reads `reader` to EOF.
pub async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}

/// Waits for a reader task spawned on `stream`, turning both read errors and
/// task failures into an `io::Error` naming the stream.
pub async fn join_reader(
    handle: tokio::task::JoinHandle<std::io::Result<Vec<u8>>>,
    stream: &str,
) -> std::io::Result<Vec<u8>> {
    let result = match handle.await {
        Ok(result) => result,
        Err(e) => Err(std::io::Error::other(e)),
    };
    result.map_err(|e| {
        tracing::debug!(stream, error = %e, "failed to capture child output");
        std::io::Error::new(
            e.kind(),
            t!("error.capture_stream_failed", stream = stream, error = e).to_string(),
        )
    })
}
