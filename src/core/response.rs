//! 核心响应处理模块

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 构造 pretty 格式的 JSON 响应
///
/// API 响应体与目录文件一样保持人类可读的缩进格式。
pub fn json_pretty<T: Serialize>(status: StatusCode, data: &T) -> Response {
    match serde_json::to_string_pretty(data) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("JSON 序列化失败: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
