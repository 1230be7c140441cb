//! # 请求与路径模型
//!
//! ## 设计思路
//!
//! 将“外部输入语义”和“转换中间约定”解耦：
//! - `IconRequest` 表示一次 ICO 打包要嵌入的尺寸序列
//! - `ConversionPaths` 表示由输入文件推导出的输出路径组
//!
//! 尺寸序列在构造时校验非空，此后整条链路都能依赖该不变量；
//! 序列首个尺寸即 ICO 容器的默认帧。

use std::path::{Path, PathBuf};

use super::ConvertError;

/// ICO 打包请求：有序的目标尺寸列表。
///
/// 列表顺序即容器内帧的顺序，首个尺寸为图标消费方（如资源管理器）
/// 在未显式选择尺寸时呈现的默认帧。重复或为零的尺寸不在此处拦截，
/// 由底层缩放/编码原语决定行为（出错而非崩溃）。
#[derive(Debug, Clone)]
pub struct IconRequest {
    sizes: Vec<(u32, u32)>,
}

impl IconRequest {
    /// 由 (宽, 高) 序列构造请求。空列表直接拒绝。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use iconflow::converter::IconRequest;
    ///
    /// let request = IconRequest::new(vec![(16, 16), (32, 32), (128, 128)])?;
    /// assert_eq!(request.primary(), (16, 16));
    /// # Ok::<(), iconflow::converter::ConvertError>(())
    /// ```
    pub fn new(sizes: Vec<(u32, u32)>) -> Result<Self, ConvertError> {
        if sizes.is_empty() {
            return Err(ConvertError::Conversion(
                "ICO 尺寸列表不能为空".to_string(),
            ));
        }
        Ok(Self { sizes })
    }

    /// 由方形尺寸序列构造请求（配置文件中的常见形态）。
    pub fn from_squares(sizes: &[u32]) -> Result<Self, ConvertError> {
        Self::new(sizes.iter().map(|&n| (n, n)).collect())
    }

    /// 单一方形尺寸的便捷构造。
    pub fn square(size: u32) -> Self {
        // 单元素列表必然非空，构造不会失败
        Self {
            sizes: vec![(size, size)],
        }
    }

    /// 请求的全部尺寸，按嵌入顺序排列。
    pub fn sizes(&self) -> &[(u32, u32)] {
        &self.sizes
    }

    /// 默认帧尺寸（列表首项）。
    pub fn primary(&self) -> (u32, u32) {
        // 构造时已保证非空
        self.sizes[0]
    }

    /// 所有请求尺寸中的最大边长。
    ///
    /// 流水线以该值作为中间 PNG 的渲染边长，保证打包阶段只做降采样。
    pub fn max_dimension(&self) -> u32 {
        self.sizes
            .iter()
            .map(|&(w, h)| w.max(h))
            .max()
            .unwrap_or(0)
    }
}

/// 由输入文件推导出的输出路径组。
///
/// 命名约定：输出目录下的 `<输入文件名去扩展名>.png` / `.ico`。
#[derive(Debug, Clone)]
pub struct ConversionPaths {
    pub png_path: PathBuf,
    pub ico_path: PathBuf,
}

impl ConversionPaths {
    /// 按输入文件名与输出目录推导输出路径。
    pub fn for_input(input: &Path, output_dir: &Path) -> Self {
        let base_name = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());

        Self {
            png_path: output_dir.join(format!("{base_name}.png")),
            ico_path: output_dir.join(format!("{base_name}.ico")),
        }
    }
}
