// 网络服务枚举与互联网连通性检测

use super::MacNetInterface;
use crate::config::Config;
use crate::error::Result;
use crate::executor::{CommandExecutor, Executor};
use crate::interface::{NetInterface, NetInterfaces};
use std::sync::Arc;

pub struct NetworkSetup {
    config: Config,
    executor: Arc<dyn Executor>,
}

impl Default for NetworkSetup {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkSetup {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let executor = Arc::new(CommandExecutor::with_timeout(config.timeout()));
        Self { config, executor }
    }

    pub fn with_executor(config: Config, executor: Arc<dyn Executor>) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // 列出所有网络服务，顺序与 networksetup 输出一致
    pub async fn list_interfaces(&self) -> Result<NetInterfaces> {
        let output = self
            .executor
            .execute(&self.config.networksetup, &["-listallnetworkservices"])
            .await?;

        let interfaces: NetInterfaces = parse_interface_list(&output)
            .into_iter()
            .map(|name| -> Box<dyn NetInterface> {
                Box::new(MacNetInterface::new(
                    name,
                    self.config.networksetup.clone(),
                    self.executor.clone(),
                ))
            })
            .collect();

        log::info!("找到 {} 个网络服务", interfaces.len());
        Ok(interfaces)
    }

    pub async fn is_internet_reachable(&self) -> Result<bool> {
        let output = self
            .executor
            .execute(&self.config.scutil, &["-r", &self.config.reachability_host])
            .await?;

        let reachable = parse_reachability(&output);
        log::debug!(
            "{} 连通性：{}",
            self.config.reachability_host,
            output.trim()
        );
        Ok(reachable)
    }
}

// 使用默认配置列出网络服务
pub async fn list_interfaces() -> Result<NetInterfaces> {
    NetworkSetup::new().list_interfaces().await
}

// 使用默认配置检测互联网是否可达
pub async fn is_internet_reachable() -> Result<bool> {
    NetworkSetup::new().is_internet_reachable().await
}

// 第一行是说明信息，其后每个非空行是一个网络服务名称
pub fn parse_interface_list(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_reachability(output: &str) -> bool {
    output.trim() == "Reachable"
}
