//! 基础设施层：日志

pub mod logger;
