//! 游戏错误处理模块
//!
//! 处理游戏运行过程中可能出现的错误：查表越界、查表数据损坏、输入中断与IO错误。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 按下标访问查表时越界（程序错误，不可恢复）
    #[error("{catalog} index {index} out of range (expected 0..{len})")]
    CatalogOutOfRange {
        catalog: &'static str,
        index: i64,
        len: usize,
    },

    /// 查表缺少某个键
    #[error("Missing catalog entry: {0}")]
    MissingCatalogEntry(String),

    /// 查表中同一个键出现了多次
    #[error("Duplicate catalog entry: {0}")]
    DuplicateCatalogEntry(String),

    /// 输入流已结束，但仍需要玩家做出选择
    #[error("Input closed while waiting for a choice")]
    InputClosed,

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GameError {
    /// 查表越界错误的快捷构造
    pub fn out_of_range(catalog: &'static str, index: i64, len: usize) -> Self {
        GameError::CatalogOutOfRange {
            catalog,
            index,
            len,
        }
    }
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InputClosed => "Input ended before the adventure did.".to_string(),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::BrokenPipe => "The console went away.".to_string(),
            _ => format!("IO error: {}", e),
        },
        GameError::CatalogOutOfRange { .. }
        | GameError::MissingCatalogEntry(_)
        | GameError::DuplicateCatalogEntry(_) => format!("Internal error: {}", error),
    }
}
