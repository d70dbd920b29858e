//! 路径冗余分析
//!
//! 在拓扑当前的失效快照上做无状态查询：健康邻居和 leaf 间路径数。

mod count;
mod neighbors;

pub use count::{count_leaf_paths, multiset_intersection_len};
pub use neighbors::healthy_neighbors;
