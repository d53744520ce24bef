// 网络接口抽象：按名称标识的网络服务，支持开启/关闭 HTTP 代理。
// 各平台提供各自的实现，调用方只依赖该 trait。

pub mod collection;

use crate::error::{Error, Result};
use async_trait::async_trait;

pub use collection::NetInterfaces;

#[async_trait]
pub trait NetInterface: Send + Sync {
    // 接口名称，创建后不可变
    fn name(&self) -> &str;

    // 为该接口启用位于 addr (host:port) 的 HTTP 代理
    async fn enable_http_proxy(&self, addr: &str) -> Result<()>;

    // 关闭该接口的 HTTP 代理
    async fn disable_http_proxy(&self) -> Result<()>;

    // 查询该接口当前的 HTTP 代理状态
    async fn http_proxy_info(&self) -> Result<ProxyInfo>;
}

// 解析后的代理地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyAddr {
    pub host: String,
    pub port: String,
}

impl ProxyAddr {
    // 按唯一的 ':' 拆分为 host 与 port，两部分都不能为空
    pub fn parse(addr: &str) -> Result<Self> {
        let parts: Vec<&str> = addr.split(':').collect();
        match parts.as_slice() {
            [host, port] if !host.is_empty() && !port.is_empty() => Ok(Self {
                host: host.to_string(),
                port: port.to_string(),
            }),
            _ => Err(Error::InvalidAddress {
                addr: addr.to_string(),
            }),
        }
    }
}

// 接口的 HTTP 代理配置信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyInfo {
    pub is_enabled: bool,
    pub server: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_host_port() {
        let addr = ProxyAddr::parse("127.0.0.1:8080");
        assert_eq!(
            addr.ok(),
            Some(ProxyAddr {
                host: "127.0.0.1".to_string(),
                port: "8080".to_string(),
            })
        );

        let addr = ProxyAddr::parse("proxy.local:3128");
        assert!(matches!(addr, Ok(ProxyAddr { ref host, ref port }) if host == "proxy.local" && port == "3128"));
    }

    #[test]
    fn test_parse_rejects_malformed_addresses() {
        for addr in ["noport", "a:b:c", ":8080", "127.0.0.1:", ":", "", "::1:8080"] {
            match ProxyAddr::parse(addr) {
                Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidArgument, "{addr:?}"),
                Ok(parsed) => panic!("{addr:?} 不应解析成功: {parsed:?}"),
            }
        }
    }
}
