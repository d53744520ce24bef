// 基于 networksetup 的网络服务

use crate::error::{CommandError, Error, Operation, Result};
use crate::executor::Executor;
use crate::interface::{NetInterface, ProxyAddr, ProxyInfo};
use async_trait::async_trait;
use std::sync::Arc;

pub struct MacNetInterface {
    name: String,
    networksetup: String,
    executor: Arc<dyn Executor>,
}

impl MacNetInterface {
    pub fn new(
        name: impl Into<String>,
        networksetup: impl Into<String>,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            name: name.into(),
            networksetup: networksetup.into(),
            executor,
        }
    }

    async fn run_networksetup(&self, operation: Operation, args: &[&str]) -> Result<String> {
        self.executor
            .execute(&self.networksetup, args)
            .await
            .map_err(|source| self.error(operation, source))
    }

    fn error(&self, operation: Operation, source: CommandError) -> Error {
        Error::Interface {
            interface: self.name.clone(),
            operation,
            source,
        }
    }
}

impl std::fmt::Debug for MacNetInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacNetInterface")
            .field("name", &self.name)
            .field("networksetup", &self.networksetup)
            .finish()
    }
}

#[async_trait]
impl NetInterface for MacNetInterface {
    fn name(&self) -> &str {
        &self.name
    }

    async fn enable_http_proxy(&self, addr: &str) -> Result<()> {
        let addr = ProxyAddr::parse(addr)?;
        log::info!(
            "正在为 {} 设置 HTTP 代理：{}:{}",
            self.name,
            addr.host,
            addr.port
        );

        self.run_networksetup(
            Operation::EnableHttpProxy,
            &["-setwebproxy", &self.name, &addr.host, &addr.port],
        )
        .await?;

        log::info!("{} HTTP 代理设置成功", self.name);
        Ok(())
    }

    async fn disable_http_proxy(&self) -> Result<()> {
        log::info!("正在禁用 {} 的 HTTP 代理", self.name);

        self.run_networksetup(
            Operation::DisableHttpProxy,
            &["-setwebproxystate", &self.name, "off"],
        )
        .await?;

        log::info!("{} HTTP 代理已禁用", self.name);
        Ok(())
    }

    async fn http_proxy_info(&self) -> Result<ProxyInfo> {
        let output = self
            .run_networksetup(Operation::QueryHttpProxy, &["-getwebproxy", &self.name])
            .await?;

        let info = parse_web_proxy(&output);
        if let Some(server) = &info.server {
            log::debug!("{} 当前 HTTP 代理：{}", self.name, server);
        }
        Ok(info)
    }
}

// 解析 `networksetup -getwebproxy` 的输出：
//   Enabled: Yes
//   Server: 127.0.0.1
//   Port: 8080
pub fn parse_web_proxy(output: &str) -> ProxyInfo {
    let mut enabled = false;
    let mut server = String::new();
    let mut port = String::new();

    for line in output.lines() {
        if let Some(value) = line.strip_prefix("Enabled:") {
            enabled = value.trim() == "Yes";
        } else if let Some(value) = line.strip_prefix("Server:") {
            server = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Port:") {
            port = value.trim().to_string();
        }
    }

    if !enabled || server.is_empty() {
        return ProxyInfo {
            is_enabled: false,
            server: None,
        };
    }

    // 端口为 0 表示未设置
    let server = if port.is_empty() || port == "0" {
        server
    } else {
        format!("{}:{}", server, port)
    };

    ProxyInfo {
        is_enabled: true,
        server: Some(server),
    }
}
