//! 错误类型
//!
//! 所有错误都是配置类错误（非法 k、概率越界、非法交换机 id），快速失败、不可重试。
//! 随机失效的结果永远不是错误。

use thiserror::Error;

use crate::topo::SwitchId;

/// crate 统一错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// fat-tree 的 k 必须为偶数且 >= 2
    #[error("fat-tree k must be even and >= 2, got {k}")]
    InvalidK { k: usize },
    /// 链路失效概率必须在 [0.0, 1.0] 内
    #[error("link failure probability must be within [0.0, 1.0], got {prob}")]
    InvalidProbability { prob: f64 },
    /// 交换机 id 超出 k 对应的编号范围
    #[error("switch id {id} is out of range for k={k}")]
    InvalidSwitchId { id: SwitchId, k: usize },
    /// 需要 leaf 交换机的地方传入了其他层的交换机
    #[error("switch {id} is not a leaf switch")]
    NotALeaf { id: SwitchId },
    /// 扫描参数为空（没有概率点、没有 k 或 trials = 0）
    #[error("sweep has nothing to run: {0}")]
    EmptySweep(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
