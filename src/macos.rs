// macOS 实现：通过 networksetup 与 scutil 命令行工具管理网络代理
//
// 修改网络配置需要管理员权限，非 root 运行时 networksetup 会请求用户授权。

pub mod interface;
pub mod setup;

// 导出公共接口
pub use interface::{MacNetInterface, parse_web_proxy};
pub use setup::{
    NetworkSetup, is_internet_reachable, list_interfaces, parse_interface_list,
    parse_reachability,
};
