// src/hero/src/lib.rs

// 核心模块
mod core;

// 重新导出主要类型
pub use self::core::{Player, constants};
