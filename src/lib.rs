// netproxy
//
// 按网络接口配置系统 HTTP 代理，实际修改委托给外部命令行工具完成。
// 每条外部命令都有固定的执行超时，超时后终止子进程。

pub mod config;
pub mod error;
pub mod executor;
pub mod interface;
pub mod macos;

pub use config::Config;
pub use error::{CommandError, Error, ErrorKind, Operation, Result};
pub use executor::{CommandExecutor, DEFAULT_TIMEOUT, Executor};
pub use interface::{NetInterface, NetInterfaces, ProxyAddr, ProxyInfo};
pub use macos::{
    MacNetInterface, NetworkSetup, is_internet_reachable, list_interfaces, parse_interface_list,
    parse_reachability, parse_web_proxy,
};
