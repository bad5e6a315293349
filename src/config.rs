//! 服务器配置
//!
//! 配置作为显式参数传入路由构建，而不是模块级常量。

use std::env;
use std::path::PathBuf;

/// 服务器配置结构
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 静态资源根目录（目录穿越检查的边界）
    pub public_dir: PathBuf,
    /// 商品目录文件路径
    pub catalog_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
            catalog_path: PathBuf::from("data/products.json"),
        }
    }
}

impl ServerConfig {
    /// 从环境变量读取配置，未设置的项使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);
        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        Self {
            bind_address: defaults.bind_address,
            port,
            public_dir,
            catalog_path,
        }
    }

    /// 监听地址字符串，例如 "0.0.0.0:3000"
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
