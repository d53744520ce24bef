// 带超时的外部命令执行器
//
// 每次调用独立启动一个子进程，等待其退出与超时计时并发进行，
// 先发生者决定结果；超时后向子进程发送终止信号。

use super::Executor;
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::CommandError;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandExecutor {
    timeout: Duration,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    // 零超时会与命令完成竞争，视为未设置
    pub fn with_timeout(timeout: Duration) -> Self {
        if timeout.is_zero() {
            return Self::default();
        }
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // 执行命令，成功时返回标准输出文本
    pub async fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        log::debug!("执行命令: {} {:?}", program, args);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| {
                log::error!("启动 {} 失败: {}", program, source);
                CommandError::Spawn {
                    program: program.to_string(),
                    source,
                }
            })?;

        // 读取任务独立运行，避免输出缓冲区填满导致子进程阻塞
        let stdout_task = drain(child.stdout.take());
        let stderr_task = drain(child.stderr.take());
        let stdout_abort = stdout_task.abort_handle();
        let stderr_abort = stderr_task.abort_handle();

        let completed = tokio::select! {
            biased;

            completed = async {
                let status = child.wait().await;
                let stdout = stdout_task.await.unwrap_or_default();
                let stderr = stderr_task.await.unwrap_or_default();
                (status, stdout, stderr)
            } => Some(completed),
            _ = tokio::time::sleep(self.timeout) => None,
        };

        let Some((status, stdout, stderr)) = completed else {
            log::warn!(
                "{} 执行超时 ({}s)，正在终止进程",
                program,
                self.timeout.as_secs_f64()
            );
            // 终止失败只记录日志，调用方仍收到超时错误
            if let Err(e) = child.start_kill() {
                log::warn!("终止超时进程 {} 失败: {}", program, e);
            }
            stdout_abort.abort();
            stderr_abort.abort();
            return Err(CommandError::Timeout {
                program: program.to_string(),
                timeout: self.timeout,
            });
        };

        let status = status.map_err(|source| CommandError::Wait {
            program: program.to_string(),
            source,
        })?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr).trim().to_string();
            log::warn!("{} 退出状态异常 ({}): {}", program, status, stderr);
            return Err(CommandError::Exit {
                program: program.to_string(),
                status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

#[async_trait]
impl Executor for CommandExecutor {
    async fn execute(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        self.run(program, args).await
    }
}

// 后台读取整个管道内容
fn drain<R>(pipe: Option<R>) -> JoinHandle<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe
            && let Err(e) = pipe.read_to_end(&mut buf).await
        {
            log::debug!("读取子进程输出失败: {}", e);
        }
        buf
    })
}
