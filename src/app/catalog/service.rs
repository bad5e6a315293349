//! 商品目录服务
//!
//! 每次调用都重新读取并解析目录文件，因此离线编辑目录后
//! 下一个请求即可生效，无需重启服务。

use std::path::PathBuf;

use tokio::fs;
use tracing::error;

use super::model::Product;

#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog_path: PathBuf,
}

impl CatalogService {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self { catalog_path }
    }

    /// 加载完整的商品目录，保持文件中的顺序
    ///
    /// 读取或解析失败时记录日志并返回空目录，调用方把
    /// "没有商品" 当作降级的正常结果而不是错误。
    pub async fn load(&self) -> Vec<Product> {
        let text = match fs::read_to_string(&self.catalog_path).await {
            Ok(text) => text,
            Err(e) => {
                error!("读取商品目录 {} 失败: {}", self.catalog_path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(products) => products,
            Err(e) => {
                error!("解析商品目录 {} 失败: {}", self.catalog_path.display(), e);
                Vec::new()
            }
        }
    }

    /// 按 id 线性查找第一个匹配的商品
    pub async fn find(&self, id: u64) -> Option<Product> {
        self.load().await.into_iter().find(|p| p.id == id)
    }
}
