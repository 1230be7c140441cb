//! # ICO 打包模块
//!
//! ## 设计思路
//!
//! “一次解码、多次缩放、一次编码”：源 PNG 只解码一份，每个请求尺寸
//! 都直接从这份原始解码缩放得到，避免逐级缩放带来的画质叠加损失。
//! 缩放固定使用 Lanczos3 卷积，大图缩到小图标时抗锯齿效果最好。
//!
//! ## 实现思路
//!
//! 1. 读取并解码源 PNG（缺失报 `NotFound`，解码失败报 `Conversion`）
//! 2. 逐尺寸用 `fast_image_resize` 缩放，失败时回退 `image::resize_exact`
//! 3. 每帧以 PNG 压缩后交给 `image` 的 ICO 编码器，按请求顺序写入
//! 4. 容器内帧顺序即请求顺序，首帧为消费方的默认帧

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use fast_image_resize as fr;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{DynamicImage, ExtendedColorType, ImageBuffer, Rgba};

use super::{ConvertError, IconRequest};

/// 将 PNG 文件打包为多尺寸 ICO 文件。
///
/// 每个请求尺寸独立地从源图的原始分辨率缩放得到；
/// 输出容器中的帧顺序与请求顺序一致，首帧为默认帧。
///
/// # 示例
/// ```rust,ignore
/// use iconflow::converter::{self, IconRequest};
/// use std::path::Path;
///
/// let request = IconRequest::new(vec![(16, 16), (32, 32), (128, 128)])?;
/// converter::pack_icon(Path::new("app.png"), Path::new("app.ico"), &request)?;
/// # Ok::<(), iconflow::converter::ConvertError>(())
/// ```
pub fn pack_icon(input: &Path, output: &Path, request: &IconRequest) -> Result<(), ConvertError> {
    if !input.exists() {
        return Err(ConvertError::NotFound(input.display().to_string()));
    }

    let bytes = fs::read(input)
        .map_err(|e| ConvertError::NotFound(format!("{}（{}）", input.display(), e)))?;

    let source = image::load_from_memory(&bytes)
        .map_err(|e| ConvertError::Conversion(format!("图片解码失败：{}", e)))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| ConvertError::Conversion(format!("创建输出目录失败：{}", e)))?;
        }
    }

    let file = File::create(output)
        .map_err(|e| ConvertError::Conversion(format!("创建输出文件失败：{}", e)))?;
    let mut writer = BufWriter::new(file);
    write_ico(&source, &mut writer, request)?;

    let (primary_width, primary_height) = request.primary();
    log::info!(
        "📦 PNG→ICO 完成 - {} -> {}（{} 帧，默认帧 {}x{}）",
        input.display(),
        output.display(),
        request.sizes().len(),
        primary_width,
        primary_height
    );

    Ok(())
}

/// 将已解码图像按请求打包成 ICO，写入任意 `Write` 目标。
///
/// 写入完成后显式 flush，保证调用方看到完整文件。
pub fn write_ico<W: Write>(
    source: &DynamicImage,
    writer: &mut W,
    request: &IconRequest,
) -> Result<(), ConvertError> {
    let mut frames = Vec::with_capacity(request.sizes().len());

    for &(width, height) in request.sizes() {
        // 每帧都从原始解码缩放，不复用前一帧的结果
        let resized = resize_frame(source, width, height)?;
        let frame = IcoFrame::as_png(resized.as_raw(), width, height, ExtendedColorType::Rgba8)
            .map_err(|e| {
                ConvertError::Conversion(format!("ICO 帧编码失败（{}x{}）：{}", width, height, e))
            })?;
        frames.push(frame);
    }

    IcoEncoder::new(&mut *writer)
        .encode_images(&frames)
        .map_err(|e| ConvertError::Conversion(format!("ICO 容器编码失败：{}", e)))?;

    writer
        .flush()
        .map_err(|e| ConvertError::Conversion(format!("ICO 写出失败：{}", e)))
}

/// 从源图缩放出单帧 RGBA 数据。
///
/// 零尺寸在此拦截为明确错误；其余失败回退到 `image` 的缩放实现。
fn resize_frame(
    source: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>, ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::Conversion(format!(
            "非法目标尺寸：{}x{}",
            width, height
        )));
    }

    match resize_with_fast_image_resize(source, width, height) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                err
            );
            Ok(source
                .resize_exact(width, height, image::imageops::FilterType::Lanczos3)
                .to_rgba8())
        }
    }
}

fn resize_with_fast_image_resize(
    source: &DynamicImage,
    target_width: u32,
    target_height: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>, ConvertError> {
    let src = source.to_rgba8();
    let (src_width, src_height) = src.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        src.into_raw(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| ConvertError::Conversion(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ConvertError::Conversion(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| ConvertError::Conversion("缩放输出缓冲长度异常".to_string()))
}
