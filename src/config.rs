//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“路径与尺寸约定”集中到 `AppConfig`，由入口在启动时装载一次，
//! 再以已解析的值传入转换函数；核心转换层自身从不读取配置。
//!
//! ## 实现思路
//!
//! - 配置以 JSON 存放在系统配置目录下的 `iconflow/config.json`。
//! - 文件不存在时生成默认配置并落盘，保证首次运行可用。
//! - 解析失败视为配置错误上报，不做静默回退。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 应用配置。
///
/// 字段覆盖输入查找目录、输出目录与 ICO 尺寸约定三类参数。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 相对输入路径的查找目录（对应文件常见的下载位置）。
    pub downloads_path: PathBuf,
    /// 转换产物的输出目录。
    pub output_path: PathBuf,
    /// SVG→PNG 的目标边长（像素），同时是单尺寸 ICO 的默认边长。
    pub icon_size: u32,
    /// ICO 打包嵌入的方形尺寸序列，首个为容器默认帧。
    pub ico_sizes: Vec<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let downloads = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        let output = downloads.join("iconflow");
        Self {
            downloads_path: downloads,
            output_path: output,
            icon_size: 128,
            ico_sizes: vec![128],
        }
    }
}

/// 配置文件的落盘位置（系统配置目录下的 `iconflow/config.json`）。
pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::Config("无法定位系统配置目录".to_string()))?
        .join("iconflow");

    fs::create_dir_all(&config_dir)
        .map_err(|e| AppError::Config(format!("创建配置目录失败：{}", e)))?;

    Ok(config_dir.join("config.json"))
}

impl AppConfig {
    /// 装载配置；文件不存在时写出默认配置并返回。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use iconflow::config::{self, AppConfig};
    ///
    /// let path = config::config_file_path()?;
    /// let config = AppConfig::load_or_init(&path)?;
    /// # Ok::<(), iconflow::error::AppError>(())
    /// ```
    pub fn load_or_init(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            log::info!("⚙️ 配置文件不存在，已生成默认配置：{}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("读取配置文件失败：{}", e)))?;
        let config = serde_json::from_str::<Self>(&content)
            .map_err(|e| AppError::Config(format!("解析配置文件失败：{}", e)))?;

        Ok(config)
    }

    /// 将配置以可读 JSON 落盘。
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::Config(format!("创建配置目录失败：{}", e)))?;
            }
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("序列化配置失败：{}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// ICO 打包使用的尺寸序列；配置为空时回退到 `icon_size`。
    pub fn effective_ico_sizes(&self) -> Vec<u32> {
        if self.ico_sizes.is_empty() {
            vec![self.icon_size]
        } else {
            self.ico_sizes.clone()
        }
    }
}
