//! 商品数据模型

use serde::{Deserialize, Serialize};

/// 商品记录
///
/// 目录文件中的一条记录。运行时只读，id 在编辑目录文件时人工分配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
}
