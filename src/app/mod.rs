//! 应用层：商品目录 API 和静态文件服务

pub mod catalog;
pub mod static_files;
