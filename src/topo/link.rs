//! 链路类型
//!
//! 每条物理链路在两端各有一条半链路记录，各自由端点交换机持有。

use serde::{Deserialize, Serialize};

use super::id::SwitchId;

/// 默认链路容量（仅作记录，不参与计算）
pub const DEFAULT_LINK_GBPS: f64 = 40.0;

/// 链路方向（相对于持有它的交换机）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Upstream,
    Downstream,
}

impl Direction {
    /// 对端看到的方向
    pub fn reverse(self) -> Self {
        match self {
            Direction::Upstream => Direction::Downstream,
            Direction::Downstream => Direction::Upstream,
        }
    }
}

/// 半链路
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub direction: Direction,
    pub other_end: SwitchId,
    pub failed: bool,
    pub capacity_gbps: f64,
}

impl Link {
    /// 创建新链路（初始为健康状态）
    pub fn new(direction: Direction, other_end: SwitchId, capacity_gbps: f64) -> Self {
        Self {
            direction,
            other_end,
            failed: false,
            capacity_gbps,
        }
    }

    pub fn is_healthy(&self) -> bool {
        !self.failed
    }
}
