pub mod error;
pub mod fault;
pub mod paths;
pub mod sweep;
pub mod topo;

pub use error::{Error, Result};
pub use fault::{FailureReport, inject_failures};
pub use paths::{count_leaf_paths, healthy_neighbors, multiset_intersection_len};
pub use topo::{FatTreeOpts, FatTreeTopology, SwitchId, build_fat_tree, hosts_supported};

#[cfg(test)]
mod test;
