//! 核心层：错误处理和响应构造

pub mod error;
pub mod response;
