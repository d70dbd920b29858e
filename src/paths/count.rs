//! leaf 到 leaf 的路径计数
//!
//! - 同一 pod：leaf → aggregation → leaf，统计两端共同的健康 aggregation 邻居；
//! - 不同 pod：leaf → aggregation → spine → aggregation → leaf，统计两端经两跳上行
//!   都能到达的 spine。
//!
//! 跨 pod 的交集保留源端列表中的重复项（见 [`multiset_intersection_len`]），
//! 不能换成集合交集，否则多条 aggregation 路径到达同一 spine 时结果会变。

use tracing::trace;

use super::neighbors::healthy_neighbors;
use crate::error::{Error, Result};
use crate::topo::{Direction, FatTreeTopology, Switch, SwitchId};

/// 源端列表中出现在目的端列表里的元素个数（源端重复项逐个计数）。
pub fn multiset_intersection_len(src: &[SwitchId], dst: &[SwitchId]) -> usize {
    src.iter().filter(|id| dst.contains(id)).count()
}

/// 计算当前失效状态下 `src` 与 `dst` 两台 leaf 之间的可用最短路径数。
#[tracing::instrument(skip(topo), fields(k = topo.k()))]
pub fn count_leaf_paths(topo: &FatTreeTopology, src: SwitchId, dst: SwitchId) -> Result<usize> {
    let src_leaf = leaf(topo, src)?;
    let dst_leaf = leaf(topo, dst)?;

    let src_aggrs = healthy_neighbors(topo, src_leaf, Direction::Upstream);
    if src_aggrs.is_empty() {
        return Ok(0);
    }
    let dst_aggrs = healthy_neighbors(topo, dst_leaf, Direction::Upstream);
    if dst_aggrs.is_empty() {
        return Ok(0);
    }

    let paths = if src_leaf.pod() == dst_leaf.pod() {
        multiset_intersection_len(&ids(&src_aggrs), &ids(&dst_aggrs))
    } else {
        let src_spines = upstream_of_all(topo, &src_aggrs);
        let dst_spines = upstream_of_all(topo, &dst_aggrs);
        multiset_intersection_len(&src_spines, &dst_spines)
    };

    trace!(paths, "路径计数");
    Ok(paths)
}

fn leaf(topo: &FatTreeTopology, id: SwitchId) -> Result<&Switch> {
    let sw = topo.switch(id)?;
    if !sw.is_leaf() {
        return Err(Error::NotALeaf { id });
    }
    Ok(sw)
}

fn ids(switches: &[&Switch]) -> Vec<SwitchId> {
    switches.iter().map(|s| s.id()).collect()
}

/// 每台 aggregation 的健康上行 spine，按顺序拼接（保留重复）
fn upstream_of_all(topo: &FatTreeTopology, aggrs: &[&Switch]) -> Vec<SwitchId> {
    aggrs
        .iter()
        .flat_map(|a| healthy_neighbors(topo, a, Direction::Upstream))
        .map(Switch::id)
        .collect()
}
