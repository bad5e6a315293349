//! # DigitalHub 电商演示服务器
//!
//! 这个库提供了一个最小化的电商店面服务，包括：
//! - 静态资源服务（HTML/CSS/JS/图片），带目录穿越防护
//! - 基于 JSON 文件的商品目录（每次请求重新读取，无缓存）
//! - 两个只读的商品 API 端点
//! - CORS 跨域支持和请求追踪日志

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use config::ServerConfig;
pub use router::{build_app, AppState};
