use serde::{Deserialize, Serialize};

/// 某个失效概率下的平均路径数
///
/// 没有样本时（例如 k=2 没有同 pod 的 leaf 对）对应的平均值为 `None`。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathSweepPoint {
    pub prob: f64,
    pub avg_in_pod: Option<f64>,
    pub avg_cross_pod: Option<f64>,
    pub in_pod_samples: usize,
    pub cross_pod_samples: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathSweepResult {
    pub k: usize,
    pub trials: usize,
    pub seed: u64,
    pub points: Vec<PathSweepPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultifailRow {
    pub k: usize,
    pub hosts: u64,
    pub switches: usize,
    pub failed_links: usize,
    pub multi_failed_switches: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultifailResult {
    pub fail_prob: f64,
    pub seed: u64,
    pub rows: Vec<MultifailRow>,
}

/// 计数样本的累加器
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Samples {
    sum: u64,
    n: usize,
}

impl Samples {
    pub(crate) fn push(&mut self, v: usize) {
        self.sum += v as u64;
        self.n += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    pub(crate) fn mean(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum as f64 / self.n as f64)
    }
}
