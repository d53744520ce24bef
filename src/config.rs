// 外部命令配置：工具路径、执行超时与连通性探测主机。

use serde::Deserialize;
use std::time::Duration;

pub const NETWORKSETUP: &str = "/usr/sbin/networksetup";
pub const SCUTIL: &str = "/usr/sbin/scutil";
pub const REACHABILITY_HOST: &str = "s3.amazonaws.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // networksetup 可执行文件路径
    pub networksetup: String,
    // scutil 可执行文件路径
    pub scutil: String,
    // 连通性检测使用的主机
    pub reachability_host: String,
    // 单条命令的超时（秒）
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            networksetup: NETWORKSETUP.to_string(),
            scutil: SCUTIL.to_string(),
            reachability_host: REACHABILITY_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    // 0 秒无法形成有效截止时间，回退到默认值
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.networksetup, "/usr/sbin/networksetup");
        assert_eq!(config.scutil, "/usr/sbin/scutil");
        assert_eq!(config.reachability_host, "s3.amazonaws.com");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config =
            match serde_json::from_str(r#"{"networksetup": "/opt/bin/networksetup"}"#) {
                Ok(c) => c,
                Err(e) => panic!("配置解析失败: {e}"),
            };

        assert_eq!(config.networksetup, "/opt/bin/networksetup");
        assert_eq!(config.scutil, SCUTIL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config: Config = match serde_json::from_str(r#"{"timeout_secs": 0}"#) {
            Ok(c) => c,
            Err(e) => panic!("配置解析失败: {e}"),
        };

        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
