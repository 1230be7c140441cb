//! # SVG 光栅化模块
//!
//! ## 设计思路
//!
//! 把“SVG 字节 → PNG 文件”的过程收敛为单个无状态函数：
//! 解析交给 `usvg`，渲染交给 `resvg`，画布与编码交给 `tiny-skia`。
//! 指定目标边长时按比例缩放并居中到方形画布（图标场景约定），
//! 未指定时保留 SVG 的固有尺寸。
//!
//! ## 实现思路
//!
//! 1. 输入存在性检查，缺失即报 `NotFound`
//! 2. 解析前加载系统字体，保证 `<text>` 元素可渲染
//! 3. 依据目标尺寸计算缩放与平移变换
//! 4. 渲染后直接保存 PNG，父目录不存在时先行创建

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::ConvertError;

/// 将 SVG 文件光栅化为 PNG 文件。
///
/// `target_size` 为 `Some(n)` 时输出 n×n 画布（保持纵横比、居中），
/// 为 `None` 时按 SVG 固有尺寸输出。成功返回写出的 PNG 路径，
/// 便于调用方把结果作为下一阶段的输入串联使用。
///
/// # 示例
/// ```rust,ignore
/// use iconflow::converter;
/// use std::path::Path;
///
/// let png = converter::rasterize(
///     Path::new("logo.svg"),
///     Path::new("out/logo.png"),
///     Some(128),
/// )?;
/// # Ok::<(), iconflow::converter::ConvertError>(())
/// ```
pub fn rasterize(
    input: &Path,
    output: &Path,
    target_size: Option<u32>,
) -> Result<PathBuf, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::NotFound(input.display().to_string()));
    }

    let svg_data = fs::read(input)
        .map_err(|e| ConvertError::NotFound(format!("{}（{}）", input.display(), e)))?;

    // 加载系统字体，SVG 内的文本元素才能参与渲染
    let mut opt = usvg::Options::default();
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();

    let tree = usvg::Tree::from_data(&svg_data, &opt)
        .map_err(|e| ConvertError::Conversion(format!("SVG 解析失败：{}", e)))?;

    let svg_size = tree.size();
    let (canvas_width, canvas_height, transform) = match target_size {
        Some(size) => {
            let scale_x = size as f32 / svg_size.width();
            let scale_y = size as f32 / svg_size.height();
            let scale = scale_x.min(scale_y);

            // 居中到方形画布
            let offset_x = (size as f32 - svg_size.width() * scale) / 2.0;
            let offset_y = (size as f32 - svg_size.height() * scale) / 2.0;

            (
                size,
                size,
                tiny_skia::Transform::from_scale(scale, scale)
                    .post_translate(offset_x, offset_y),
            )
        }
        None => {
            let int_size = svg_size.to_int_size();
            (
                int_size.width(),
                int_size.height(),
                tiny_skia::Transform::default(),
            )
        }
    };

    let mut pixmap = tiny_skia::Pixmap::new(canvas_width, canvas_height).ok_or_else(|| {
        ConvertError::Conversion(format!(
            "无法创建 {}x{} 渲染画布",
            canvas_width, canvas_height
        ))
    })?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| ConvertError::Conversion(format!("创建输出目录失败：{}", e)))?;
        }
    }

    pixmap
        .save_png(output)
        .map_err(|e| ConvertError::Conversion(format!("PNG 写出失败：{}", e)))?;

    log::info!(
        "🖼️ SVG→PNG 完成 - {} -> {}（{}x{}）",
        input.display(),
        output.display(),
        canvas_width,
        canvas_height
    );

    Ok(output.to_path_buf())
}
