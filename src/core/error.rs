//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// 静态文件服务的错误类型
///
/// 每个变体对应一个终态 HTTP 响应：目录穿越和缺失目录索引返回 403，
/// 文件不存在返回 404，其余文件系统错误返回 500。
#[derive(Debug, PartialEq, Eq)]
pub enum StaticFileError {
    Forbidden,
    NotFound,
    Internal,
}

impl IntoResponse for StaticFileError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            StaticFileError::Forbidden => (StatusCode::FORBIDDEN, "<h1>403 Forbidden</h1>"),
            StaticFileError::NotFound => (
                StatusCode::NOT_FOUND,
                "<h1>404 Not Found</h1><p>The requested file could not be found.</p>",
            ),
            StaticFileError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "<h1>500 Internal Server Error</h1>",
            ),
        };

        (status, Html(body)).into_response()
    }
}
