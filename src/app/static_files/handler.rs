//! 静态文件处理器
//!
//! 每个请求经过一个小状态机：根路径重写 → 穿越检查 → 存在性检查 →
//! 目录索引查找或文件服务，任何一步失败都短路到终态响应。

use std::io::ErrorKind;
use std::path::Path;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tokio::fs;
use tracing::error;

use super::mime::resolve_mime_type;
use super::resolver::resolve_request_path;
use crate::core::error::StaticFileError;
use crate::router::AppState;

/// 静态文件回退处理器
pub async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    match serve(&state.public_dir, uri.path()).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn serve(public_dir: &Path, request_path: &str) -> Result<Response, StaticFileError> {
    let relative = resolve_request_path(request_path)?;
    let full_path = public_dir.join(&relative);

    let metadata = fs::metadata(&full_path).await.map_err(map_io_error)?;

    if metadata.is_dir() {
        // 目录请求：有 index.html 就服务它，否则 403
        let index_path = full_path.join("index.html");
        match fs::metadata(&index_path).await {
            Ok(_) => serve_file(public_dir, &index_path).await,
            Err(_) => Err(StaticFileError::Forbidden),
        }
    } else {
        serve_file(public_dir, &full_path).await
    }
}

/// 读取文件字节并带解析出的 Content-Type 返回 200
async fn serve_file(public_dir: &Path, file_path: &Path) -> Result<Response, StaticFileError> {
    // canonicalize 解析符号链接后再确认真实路径仍在 public 根之内
    let canonical_root = fs::canonicalize(public_dir).await.map_err(map_io_error)?;
    let canonical_file = fs::canonicalize(file_path).await.map_err(map_io_error)?;
    if !canonical_file.starts_with(&canonical_root) {
        return Err(StaticFileError::Forbidden);
    }

    let bytes = fs::read(&canonical_file).await.map_err(map_io_error)?;
    let mime = resolve_mime_type(&file_path.to_string_lossy());

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, mime)], bytes).into_response())
}

fn map_io_error(e: std::io::Error) -> StaticFileError {
    match e.kind() {
        ErrorKind::NotFound => StaticFileError::NotFound,
        _ => {
            error!("静态文件访问失败: {}", e);
            StaticFileError::Internal
        }
    }
}
