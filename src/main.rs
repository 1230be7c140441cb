//! # 图标转换工具 — 应用入口
//!
//! 本文件仅负责日志初始化、配置装载与命令分发。
//! 转换逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use iconflow::config::{self, AppConfig};
use iconflow::converter::{self, ConversionPaths, ConvertError, IconRequest};
use iconflow::error::AppError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    match args {
        [command] if command == "config" => show_config(),
        [command, input] => dispatch_conversion(command, input),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn dispatch_conversion(command: &str, input: &str) -> Result<(), AppError> {
    let config_path = config::config_file_path()?;
    let config = AppConfig::load_or_init(&config_path)?;

    let input = resolve_input(Path::new(input), &config.downloads_path);
    let paths = ConversionPaths::for_input(&input, &config.output_path);

    match command {
        "svg2png" => {
            converter::rasterize(&input, &paths.png_path, Some(config.icon_size))?;
        }
        "png2ico" => {
            let request = IconRequest::from_squares(&config.effective_ico_sizes())?;
            converter::pack_icon(&input, &paths.ico_path, &request)?;
        }
        "svg2ico" => {
            let request = IconRequest::from_squares(&config.effective_ico_sizes())?;
            converter::convert_svg_to_icon(&input, &paths.png_path, &paths.ico_path, &request)?;
        }
        _ => {
            print_usage();
        }
    }

    Ok(())
}

/// 解析输入路径：就地找不到的相对路径回退到配置的下载目录查找。
fn resolve_input(input: &Path, downloads_path: &Path) -> PathBuf {
    if input.is_absolute() || input.exists() {
        return input.to_path_buf();
    }

    let candidate = downloads_path.join(input);
    if candidate.exists() {
        log::info!("📁 已在下载目录中定位输入文件：{}", candidate.display());
        return candidate;
    }

    input.to_path_buf()
}

fn show_config() -> Result<(), AppError> {
    let config_path = config::config_file_path()?;
    let config = AppConfig::load_or_init(&config_path)?;

    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| AppError::Config(format!("序列化配置失败：{}", e)))?;

    println!("配置文件：{}", config_path.display());
    println!("{content}");
    Ok(())
}

/// 错误到用户提示的映射：文件缺失给出具体提示，其余统一为转换失败。
fn report_error(err: &AppError) {
    match err {
        AppError::Convert(ConvertError::NotFound(path)) => {
            log::error!("❌ 文件未找到，请检查输入路径：{}", path);
        }
        AppError::Convert(err) => {
            log::error!("❌ [{}] {}", err.code(), err);
        }
        other => {
            log::error!("❌ {}", other);
        }
    }
}

fn print_usage() {
    println!("用法：iconflow <命令> [输入文件]");
    println!();
    println!("命令：");
    println!("  svg2png <input.svg>   SVG 转 PNG（边长取配置 icon_size）");
    println!("  png2ico <input.png>   PNG 转多尺寸 ICO（尺寸取配置 ico_sizes）");
    println!("  svg2ico <input.svg>   SVG 一步转 ICO（经由中间 PNG）");
    println!("  config                显示配置文件路径与当前内容");
}
