//! 路由装配
//!
//! API 路由只注册 GET（其他方法由 axum 返回 405），
//! 其余路径全部回退到静态文件处理器。

use std::path::PathBuf;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::app::catalog::handler::{get_product, list_products, product_not_found};
use crate::app::catalog::service::CatalogService;
use crate::app::static_files::handler::serve_static;
use crate::config::ServerConfig;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub public_dir: PathBuf,
}

/// 根据配置构建完整的应用路由
pub fn build_app(config: &ServerConfig) -> Router {
    let state = AppState {
        catalog: CatalogService::new(config.catalog_path.clone()),
        public_dir: config.public_dir.clone(),
    };

    // 开发环境的宽松 CORS：任意来源，GET/POST/OPTIONS，Content-Type
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        // API 前缀下的其余路径（尾部斜杠、多余路径段）仍然回答 JSON 404
        .route("/api/products/", get(product_not_found))
        .route("/api/products/:id/*rest", get(product_not_found))
        .fallback(serve_static)
        .layer(cors)
        // CorsLayer 只在预检响应上带 Allow-Methods/Allow-Headers，
        // 这两个头要求出现在每一个响应上
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
