//! # 统一错误类型模块
//!
//! ## 设计思路
//!
//! 定义应用级统一的 `AppError` 枚举，入口层只需匹配一种错误类型，
//! 即可区分“输入文件缺失”“转换失败”“配置问题”等用户可见场景，
//! 避免各处 `.map_err(|e| e.to_string())` 式的字符串拼接。
//!
//! ## 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为转换层 `ConvertError` 与 `std::io::Error` 提供 `From` 转换。

use crate::converter::ConvertError;

/// 应用级统一错误类型。
///
/// 入口层据此向用户输出具体或通用的失败提示，并以非零码退出。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 转换链路错误（缺失输入 / 解码 / 渲染 / 编码 / 写出）。
    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// 配置文件读取、解析或写出失败。
    #[error("配置错误：{0}")]
    Config(String),

    /// 文件系统 I/O 错误。
    #[error("文件系统错误：{0}")]
    Io(#[from] std::io::Error),
}
