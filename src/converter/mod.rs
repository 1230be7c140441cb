//! # 图像转换模块（converter）
//!
//! ## 设计思路
//!
//! 该模块把“SVG 光栅化 → 尺寸缩放 → ICO 打包”按阶段拆分为多个子模块，
//! 每个阶段都是无状态函数：同样的输入与文件系统状态得到同样的输出。
//!
//! - `rasterizer`：SVG → PNG（usvg 解析 + resvg 渲染）
//! - `packager`：PNG → ICO（一次解码、逐尺寸独立缩放、按序编码）
//! - `pipeline`：SVG → ICO（顺序编排上面两个阶段）
//! - `request/error`：请求模型与错误类型
//!
//! ## 实现思路
//!
//! 对外仅暴露三个入口函数与必要类型，内部细节保持 `mod` 私有。
//! 错误只分两类：输入缺失（`NotFound`）与其余一切失败（`Conversion`），
//! 均原样上抛，由入口层负责用户提示。
//!
//! ## 调用链
//!
//! ```text
//! main.rs（参数与配置适配）
//!    ↓
//! rasterize / pack_icon / convert_svg_to_icon
//!    ├─ rasterizer.rs（解析 + 渲染 + PNG 写出）
//!    ├─ packager.rs（解码 + Lanczos 缩放 + ICO 编码）
//!    └─ pipeline.rs（两阶段顺序编排）
//!    ↓
//! ConvertError 上抛给调用方
//! ```

mod error;
mod packager;
mod pipeline;
mod rasterizer;
mod request;

pub use error::ConvertError;
pub use packager::{pack_icon, write_ico};
pub use pipeline::convert_svg_to_icon;
pub use rasterizer::rasterize;
pub use request::{ConversionPaths, IconRequest};
