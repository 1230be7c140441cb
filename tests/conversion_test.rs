// End-to-end conversion scenarios on real files
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use iconflow::converter::{self, ConvertError, IconRequest};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};

const TEST_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><rect x="4" y="4" width="56" height="56" rx="12" fill="#2d6a4f"/></svg>"##;

fn temp_workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("iconflow-e2e-{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create temp workspace failed");
    dir
}

fn create_png_file(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8, 255])
    });
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("encode test png failed");

    let path = dir.join(name);
    fs::write(&path, cursor.into_inner()).expect("write test png failed");
    path
}

/// 解析 ICONDIR，返回每个目录项的 (宽, 高)。
fn ico_frame_sizes(bytes: &[u8]) -> Vec<(u32, u32)> {
    assert_eq!(&bytes[0..4], &[0, 0, 1, 0], "not an ICO header");
    let count = u16::from_le_bytes([bytes[4], bytes[5]]) as usize;

    (0..count)
        .map(|i| {
            let entry = &bytes[6 + i * 16..6 + (i + 1) * 16];
            let width = if entry[0] == 0 { 256 } else { entry[0] as u32 };
            let height = if entry[1] == 0 { 256 } else { entry[1] as u32 };
            (width, height)
        })
        .collect()
}

#[test]
fn svg_to_png_writes_png_at_requested_size() {
    let dir = temp_workspace("svg2png");
    let svg = dir.join("app.svg");
    fs::write(&svg, TEST_SVG).expect("write svg fixture failed");

    let png = converter::rasterize(&svg, &dir.join("app.png"), Some(128))
        .expect("rasterize failed");

    let (width, height) = image::image_dimensions(&png).expect("read png dims failed");
    assert_eq!((width, height), (128, 128));
}

#[test]
fn png_to_ico_writes_single_frame_container() {
    let dir = temp_workspace("png2ico");
    let png = create_png_file(&dir, "app.png", 256, 256);
    let ico = dir.join("app.ico");

    converter::pack_icon(&png, &ico, &IconRequest::square(128)).expect("pack failed");

    let bytes = fs::read(&ico).expect("read ico failed");
    assert_eq!(ico_frame_sizes(&bytes), vec![(128, 128)]);
}

#[test]
fn svg_to_ico_chains_both_stages() {
    let dir = temp_workspace("svg2ico");
    let svg = dir.join("app.svg");
    fs::write(&svg, TEST_SVG).expect("write svg fixture failed");

    let png = dir.join("app.png");
    let ico = dir.join("app.ico");
    let request =
        IconRequest::new(vec![(16, 16), (32, 32), (128, 128)]).expect("request init failed");

    converter::convert_svg_to_icon(&svg, &png, &ico, &request).expect("pipeline failed");

    // 中间 PNG 按最大请求边长渲染，随后保留在磁盘上
    let (width, height) = image::image_dimensions(&png).expect("read png dims failed");
    assert_eq!((width, height), (128, 128));

    // ICO 含全部三个请求尺寸，顺序一致，默认帧为首项 16x16
    let bytes = fs::read(&ico).expect("read ico failed");
    assert_eq!(
        ico_frame_sizes(&bytes),
        vec![(16, 16), (32, 32), (128, 128)]
    );
}

#[test]
fn missing_inputs_report_not_found_for_both_stages() {
    let dir = temp_workspace("missing");

    let rasterize_result =
        converter::rasterize(&dir.join("nope.svg"), &dir.join("out.png"), Some(64));
    assert!(matches!(rasterize_result, Err(ConvertError::NotFound(_))));

    let pack_result = converter::pack_icon(
        &dir.join("nope.png"),
        &dir.join("out.ico"),
        &IconRequest::square(64),
    );
    assert!(matches!(pack_result, Err(ConvertError::NotFound(_))));
}

#[test]
fn pipeline_failure_leaves_no_outputs_behind() {
    let dir = temp_workspace("abort");
    let png = dir.join("app.png");
    let ico = dir.join("app.ico");

    let result = converter::convert_svg_to_icon(
        &dir.join("nope.svg"),
        &png,
        &ico,
        &IconRequest::square(64),
    );

    assert!(matches!(result, Err(ConvertError::NotFound(_))));
    assert!(!png.exists());
    assert!(!ico.exists());
}
