//! 拓扑模块
//!
//! fat-tree（folded-Clos）拓扑：编号布局、链路、交换机和完整拓扑。

// 子模块声明
mod fat_tree;
mod id;
pub mod layout;
mod link;
mod switch;

// 重新导出公共接口
pub use fat_tree::{FatTreeOpts, FatTreeTopology, build_fat_tree};
pub use id::{Layer, PodId, SwitchId};
pub use layout::hosts_supported;
pub use link::{DEFAULT_LINK_GBPS, Direction, Link};
pub use switch::Switch;
