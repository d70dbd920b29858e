use serde::{Deserialize, Serialize};

/// 路径数随失效概率变化的扫描参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathSweepSpec {
    #[serde(default = "default_path_k")]
    pub k: usize,
    #[serde(default = "default_probs")]
    pub probs: Vec<f64>,
    #[serde(default = "default_trials")]
    pub trials: usize,
    #[serde(default)]
    pub seed: u64,
}

impl Default for PathSweepSpec {
    fn default() -> Self {
        Self {
            k: default_path_k(),
            probs: default_probs(),
            trials: default_trials(),
            seed: 0,
        }
    }
}

/// 多链路失效交换机数随 k 变化的扫描参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultifailSpec {
    #[serde(default = "default_ks")]
    pub ks: Vec<usize>,
    #[serde(default = "default_multifail_prob")]
    pub fail_prob: f64,
    #[serde(default)]
    pub seed: u64,
}

impl Default for MultifailSpec {
    fn default() -> Self {
        Self {
            ks: default_ks(),
            fail_prob: default_multifail_prob(),
            seed: 0,
        }
    }
}

fn default_path_k() -> usize {
    8
}

fn default_probs() -> Vec<f64> {
    vec![
        0.0, 0.01, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6,
    ]
}

fn default_trials() -> usize {
    1
}

fn default_ks() -> Vec<usize> {
    vec![4, 6, 8, 10, 12, 48]
}

fn default_multifail_prob() -> f64 {
    0.01
}
