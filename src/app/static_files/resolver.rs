//! 请求路径解析
//!
//! 把请求路径规范化为 public 根目录下的相对路径，
//! 任何会爬出根目录的 `..` 序列在触碰文件系统之前就被拒绝。

use std::path::{Component, Path, PathBuf};

use crate::core::error::StaticFileError;

/// 规范化请求路径
///
/// 根路径 `/` 重写为 `/index.html`。逐个遍历路径分量：
/// 普通分量入栈，`..` 出栈，出栈越过根即视为穿越攻击返回 Forbidden。
pub fn resolve_request_path(request_path: &str) -> Result<PathBuf, StaticFileError> {
    let request_path = if request_path == "/" {
        "/index.html"
    } else {
        request_path
    };

    let mut relative = PathBuf::new();
    for component in Path::new(request_path).components() {
        match component {
            Component::Normal(segment) => relative.push(segment),
            Component::ParentDir => {
                if !relative.pop() {
                    return Err(StaticFileError::Forbidden);
                }
            }
            Component::RootDir | Component::CurDir => {}
            Component::Prefix(_) => return Err(StaticFileError::Forbidden),
        }
    }

    Ok(relative)
}
