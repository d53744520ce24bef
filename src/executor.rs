// 外部命令执行层

pub mod command;

use crate::error::CommandError;
use async_trait::async_trait;

pub use command::{CommandExecutor, DEFAULT_TIMEOUT};

// 执行一条外部命令并返回其标准输出。
// 网络接口只依赖该抽象，测试时可替换为记录调用的假实现。
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}
