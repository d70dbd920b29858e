//! 蒙特卡洛扫描
//!
//! 在核心模型之上做编排：反复构建拓扑、注入失效、计数并求平均。
//! 参数可以从 JSON 读入（字段缺省时使用默认扫描范围），结果可序列化为 JSON。

mod result;
mod run;
mod spec;

pub use result::{MultifailResult, MultifailRow, PathSweepPoint, PathSweepResult};
pub use run::{avg_paths_vs_prob, multifail_vs_k, trial_seed};
pub use spec::{MultifailSpec, PathSweepSpec};
