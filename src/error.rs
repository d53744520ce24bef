// 错误类型：区分参数错误、进程失败与超时，调用方无需解析字符串。

use std::fmt;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // 调用方传入的参数格式错误
    InvalidArgument,
    // 外部命令无法启动或以失败状态退出
    ProcessFailure,
    // 外部命令超过截止时间
    Timeout,
}

// 单次外部命令调用的失败
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("无法启动 {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} 执行失败 ({status}): {stderr}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("等待 {program} 结束失败: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} 执行超时 ({}s)", .timeout.as_secs_f64())]
    Timeout { program: String, timeout: Duration },
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Timeout { .. } => ErrorKind::Timeout,
            _ => ErrorKind::ProcessFailure,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }
}

// 网络接口上的代理操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    EnableHttpProxy,
    DisableHttpProxy,
    QueryHttpProxy,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::EnableHttpProxy => "启用 HTTP 代理",
            Operation::DisableHttpProxy => "禁用 HTTP 代理",
            Operation::QueryHttpProxy => "查询 HTTP 代理",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("代理地址无效：{addr:?}，请使用 host:port 格式 (例如 127.0.0.1:8080)")]
    InvalidAddress { addr: String },

    #[error("网络接口 {interface:?} {operation}失败: {source}")]
    Interface {
        interface: String,
        operation: Operation,
        #[source]
        source: CommandError,
    },

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAddress { .. } => ErrorKind::InvalidArgument,
            Error::Interface { source, .. } => source.kind(),
            Error::Command(e) => e.kind(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }

    // 出错的网络接口名称（枚举与连通性检测不涉及具体接口）
    pub fn interface(&self) -> Option<&str> {
        match self {
            Error::Interface { interface, .. } => Some(interface.as_str()),
            _ => None,
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Interface { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn timeout_error() -> CommandError {
        CommandError::Timeout {
            program: "/usr/sbin/networksetup".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    fn spawn_error() -> CommandError {
        CommandError::Spawn {
            program: "/nonexistent".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
    }

    #[test]
    fn test_command_error_kind() {
        assert_eq!(timeout_error().kind(), ErrorKind::Timeout);
        assert!(timeout_error().is_timeout());
        assert_eq!(spawn_error().kind(), ErrorKind::ProcessFailure);
        assert!(!spawn_error().is_timeout());
    }

    #[test]
    fn test_interface_error_keeps_kind_and_context() {
        let err = Error::Interface {
            interface: "Wi-Fi".to_string(),
            operation: Operation::DisableHttpProxy,
            source: timeout_error(),
        };

        assert!(err.is_timeout());
        assert_eq!(err.interface(), Some("Wi-Fi"));
        assert_eq!(err.operation(), Some(Operation::DisableHttpProxy));

        let message = err.to_string();
        assert!(message.contains("Wi-Fi"));
        assert!(message.contains("禁用 HTTP 代理"));
    }

    #[test]
    fn test_invalid_address_kind() {
        let err = Error::InvalidAddress {
            addr: "noport".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.interface(), None);
        assert!(err.to_string().contains("noport"));
    }

    #[test]
    fn test_command_error_converts_transparently() {
        let err: Error = spawn_error().into();
        assert_eq!(err.kind(), ErrorKind::ProcessFailure);
        assert!(err.to_string().contains("/nonexistent"));
    }
}
