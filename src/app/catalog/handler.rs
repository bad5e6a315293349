//! 商品目录处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::core::response::json_pretty;
use crate::router::AppState;

/// 获取全部商品
///
/// 目录加载失败时返回空数组（仍然是 200），见 CatalogService::load。
pub async fn list_products(State(state): State<AppState>) -> Response {
    let products = state.catalog.load().await;
    json_pretty(StatusCode::OK, &products)
}

/// 按 id 获取单个商品
///
/// 路径段按整数解析，非数字输入等同于一个不存在的 id。
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let product = match id.parse::<u64>() {
        Ok(id) => state.catalog.find(id).await,
        Err(_) => None,
    };

    match product {
        Some(product) => json_pretty(StatusCode::OK, &product),
        None => product_not_found().await,
    }
}

/// 商品未找到的固定 JSON 404 响应
///
/// 也直接挂在 API 前缀下没有商品可匹配的路径上
/// （尾部斜杠、多余路径段），这些路径不落到静态文件的 HTML 404。
pub async fn product_not_found() -> Response {
    json_pretty(
        StatusCode::NOT_FOUND,
        &serde_json::json!({ "error": "Product not found" }),
    )
}
