//! # 图标转换工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 入口 (main.rs，命令分发)                  │
//! │                                                          │
//! │  svg2png ── png2ico ── svg2ico ── config                 │
//! │      │   (统一错误映射：文件缺失 / 转换失败)              │
//! └──────┼───────────────────────────────────────────────────┘
//!        ↓ Result<T, AppError>
//! ┌──────┼───────────────────────────────────────────────────┐
//! │      ↓              核心 (库)                            │
//! │                                                          │
//! │  ┌─ error ───── AppError (应用级统一错误)                 │
//! │  │                                                       │
//! │  ├─ config ──── AppConfig JSON 装载/落盘/默认值           │
//! │  │                                                       │
//! │  └─ converter   转换核心                                  │
//! │      ├─ rasterizer   SVG → PNG (usvg + resvg)            │
//! │      ├─ packager     PNG → ICO (Lanczos 缩放 + 编码)      │
//! │      ├─ pipeline     SVG → ICO (两阶段编排)               │
//! │      └─ request      尺寸请求与输出路径推导               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，入口层的统一返回类型 |
//! | [`config`] | 路径与尺寸配置的装载、落盘与默认值 |
//! | [`converter`] | SVG→PNG 光栅化、PNG→ICO 打包及其流水线编排 |

pub mod config;
pub mod converter;
pub mod error;
