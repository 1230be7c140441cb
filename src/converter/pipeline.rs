//! # 转换流水线模块
//!
//! ## 设计思路
//!
//! SVG→ICO 没有独立逻辑，只是对光栅化与打包两个阶段的顺序编排：
//! 先把 SVG 渲染成中间 PNG，再把中间 PNG 打包成 ICO。
//! 第一阶段失败即中止，不会触发打包；残留的中间 PNG 不做清理。
//!
//! ## 实现思路
//!
//! 中间 PNG 按请求中的最大边长渲染，打包阶段因此只做降采样，
//! 任何帧都不会被放大。光栅化返回的路径直接作为打包输入，
//! 保证两阶段之间“先写后读”的次序。

use std::path::Path;
use std::time::Instant;

use super::{packager, rasterizer, ConvertError, IconRequest};

/// 将 SVG 一步转换为多尺寸 ICO。
///
/// 依次执行光栅化与打包；中间 PNG 会保留在 `intermediate_png` 处。
///
/// # 示例
/// ```rust,ignore
/// use iconflow::converter::{self, IconRequest};
/// use std::path::Path;
///
/// let request = IconRequest::new(vec![(16, 16), (32, 32), (128, 128)])?;
/// converter::convert_svg_to_icon(
///     Path::new("app.svg"),
///     Path::new("out/app.png"),
///     Path::new("out/app.ico"),
///     &request,
/// )?;
/// # Ok::<(), iconflow::converter::ConvertError>(())
/// ```
pub fn convert_svg_to_icon(
    input_svg: &Path,
    intermediate_png: &Path,
    output_ico: &Path,
    request: &IconRequest,
) -> Result<(), ConvertError> {
    let total_start = Instant::now();

    let rasterize_start = Instant::now();
    let intermediate =
        rasterizer::rasterize(input_svg, intermediate_png, Some(request.max_dimension()))?;
    let rasterize_elapsed = rasterize_start.elapsed();

    let pack_start = Instant::now();
    packager::pack_icon(&intermediate, output_ico, request)?;
    let pack_elapsed = pack_start.elapsed();

    log::info!(
        "✅ SVG→ICO 完成 - rasterize={}ms pack={}ms total={}ms",
        rasterize_elapsed.as_millis(),
        pack_elapsed.as_millis(),
        total_start.elapsed().as_millis()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const TEST_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><circle cx="32" cy="32" r="28" fill="#c0392b"/></svg>"##;

    fn temp_workspace(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("iconflow-pipeline-{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp workspace failed");
        dir
    }

    #[test]
    fn pipeline_writes_intermediate_png_and_final_ico() {
        let dir = temp_workspace("full");
        let svg = dir.join("app.svg");
        let png = dir.join("app.png");
        let ico = dir.join("app.ico");
        fs::write(&svg, TEST_SVG).expect("write svg fixture failed");

        let request = IconRequest::new(vec![(16, 16), (32, 32), (128, 128)])
            .expect("request init failed");
        convert_svg_to_icon(&svg, &png, &ico, &request).expect("pipeline failed");

        // 中间 PNG 按最大请求边长渲染
        let (width, height) = image::image_dimensions(&png).expect("read png dims failed");
        assert_eq!((width, height), (128, 128));
        assert!(ico.exists());
    }

    #[test]
    fn first_stage_failure_aborts_before_packaging() {
        let dir = temp_workspace("abort");
        let png = dir.join("app.png");
        let ico = dir.join("app.ico");

        let result = convert_svg_to_icon(
            &dir.join("nope.svg"),
            &png,
            &ico,
            &IconRequest::square(64),
        );

        assert!(matches!(result, Err(ConvertError::NotFound(_))));
        // 打包阶段没有执行：两个输出都不存在
        assert!(!png.exists());
        assert!(!ico.exists());
    }
}
