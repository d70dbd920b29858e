//! 标识符类型
//!
//! 定义交换机编号、pod 编号和交换机所在层。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 交换机标识符
///
/// 编号按层划分为连续区间：leaf、aggregation、spine，见 [`super::layout`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SwitchId(pub usize);

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pod 标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PodId(pub usize);

/// 交换机所在层（自下而上）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Leaf,
    Aggregation,
    Spine,
}
