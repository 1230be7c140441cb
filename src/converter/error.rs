//! # 转换错误模型
//!
//! ## 设计思路
//!
//! 整条转换链路只需要两类错误：输入文件缺失、其余一切转换失败。
//! 调用方据此向用户展示“文件未找到”或通用的“转换失败”提示，
//! 不在核心层做任何吞错或重试。
//!
//! ## 实现思路
//!
//! 使用 `thiserror` 派生可读错误消息，调用侧按分支匹配。
//! 所有底层库错误（解析、渲染、缩放、编码、写盘）统一折叠进
//! `Conversion`，保留原始错误文本便于诊断。

/// 转换统一错误类型。
///
/// 该类型会在应用层被上转为 `AppError`，并由入口统一映射为用户提示。
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// 输入文件不存在或无法打开读取。
    #[error("输入文件不存在：{0}")]
    NotFound(String),

    /// 解码、渲染、缩放、编码或写出阶段的任何其他失败。
    #[error("转换失败：{0}")]
    Conversion(String),
}

impl ConvertError {
    /// 稳定错误码，用于日志与诊断。
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Conversion(_) => "conversion",
        }
    }
}
