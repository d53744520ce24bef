// 网络接口集合：按枚举顺序批量启用/禁用代理。
// 遇到第一个失败立即停止并返回该错误，已修改的接口不会回滚。

use super::NetInterface;
use crate::error::Result;

#[derive(Default)]
pub struct NetInterfaces {
    interfaces: Vec<Box<dyn NetInterface>>,
}

impl NetInterfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interface: Box<dyn NetInterface>) {
        self.interfaces.push(interface);
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.interfaces.iter().map(|i| i.name()).collect()
    }

    pub async fn enable_http_proxy_all(&self, addr: &str) -> Result<()> {
        log::info!("为 {} 个网络接口启用 HTTP 代理：{}", self.len(), addr);

        for interface in &self.interfaces {
            if let Err(e) = interface.enable_http_proxy(addr).await {
                log::error!("启用代理失败，停止处理剩余接口：{}", e);
                return Err(e);
            }
        }
        Ok(())
    }

    pub async fn disable_http_proxy_all(&self) -> Result<()> {
        log::info!("为 {} 个网络接口禁用 HTTP 代理", self.len());

        for interface in &self.interfaces {
            if let Err(e) = interface.disable_http_proxy().await {
                log::error!("禁用代理失败，停止处理剩余接口：{}", e);
                return Err(e);
            }
        }
        Ok(())
    }
}

impl From<Vec<Box<dyn NetInterface>>> for NetInterfaces {
    fn from(interfaces: Vec<Box<dyn NetInterface>>) -> Self {
        Self { interfaces }
    }
}

impl FromIterator<Box<dyn NetInterface>> for NetInterfaces {
    fn from_iter<I: IntoIterator<Item = Box<dyn NetInterface>>>(iter: I) -> Self {
        Self {
            interfaces: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for NetInterfaces {
    type Item = Box<dyn NetInterface>;
    type IntoIter = std::vec::IntoIter<Box<dyn NetInterface>>;

    fn into_iter(self) -> Self::IntoIter {
        self.interfaces.into_iter()
    }
}

impl<'a> IntoIterator for &'a NetInterfaces {
    type Item = &'a Box<dyn NetInterface>;
    type IntoIter = std::slice::Iter<'a, Box<dyn NetInterface>>;

    fn into_iter(self) -> Self::IntoIter {
        self.interfaces.iter()
    }
}

impl std::fmt::Debug for NetInterfaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
