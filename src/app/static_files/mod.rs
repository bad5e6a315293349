//! 静态文件服务模块

pub mod handler;
pub mod mime;
pub mod resolver;
