//! 链路失效模型
//!
//! 独立随机失效 + 两端同步。随机数发生器由调用方传入，便于固定种子复现。

mod inject;

pub use inject::{FailureReport, inject_failures, propagate_failure, validate_probability};
