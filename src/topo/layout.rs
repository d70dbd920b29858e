//! 交换机编号布局（纯函数）
//!
//! 记 `h = k/2`。编号按层划分为互不相交的连续区间：
//!
//! - leaf：`[0, k²/2)`，pod `p` 占 `[p·h, (p+1)·h)`
//! - aggregation：`[k²/2, k²)`，pod `p` 占 `[k²/2 + p·h, k²/2 + (p+1)·h)`
//! - spine：`[k², k² + h²)`
//!
//! 位置为 `pos` 的 aggregation 交换机向上连接 spine 组 `pos`，即
//! `[k² + pos·h, k² + (pos+1)·h)`；spine 组 `g` 中的每个 spine 向下连接每个 pod 里
//! 位置为 `g` 的那台 aggregation 交换机。
//!
//! 这里的函数只做整数运算，不校验参数；调用方先用 [`validate_k`] / [`layer_of`] 检查。

use std::ops::Range;

use super::id::{Layer, PodId, SwitchId};
use crate::error::{Error, Result};

pub fn validate_k(k: usize) -> Result<()> {
    if k < 2 || k % 2 != 0 {
        return Err(Error::InvalidK { k });
    }
    Ok(())
}

#[inline]
pub fn half(k: usize) -> usize {
    k / 2
}

/// 第一个 aggregation 交换机的编号（= leaf 总数）
#[inline]
fn first_aggregation(k: usize) -> usize {
    k * k / 2
}

/// 第一个 spine 交换机的编号（= leaf + aggregation 总数）
#[inline]
fn first_spine(k: usize) -> usize {
    k * k
}

pub fn leaf_ids(k: usize) -> Range<usize> {
    0..first_aggregation(k)
}

pub fn aggregation_ids(k: usize) -> Range<usize> {
    first_aggregation(k)..first_spine(k)
}

pub fn spine_ids(k: usize) -> Range<usize> {
    let h = half(k);
    first_spine(k)..first_spine(k) + h * h
}

/// 交换机总数：k²/2 + k²/2 + (k/2)²
pub fn switch_count(k: usize) -> usize {
    spine_ids(k).end
}

/// 网络可接入的主机数 k³/4
pub fn hosts_supported(k: usize) -> u64 {
    let k = k as u64;
    k.saturating_mul(k).saturating_mul(k) / 4
}

/// 根据编号判断所在层；越界编号返回 `InvalidSwitchId`。
pub fn layer_of(id: SwitchId, k: usize) -> Result<Layer> {
    validate_k(k)?;
    let i = id.0;
    if leaf_ids(k).contains(&i) {
        Ok(Layer::Leaf)
    } else if aggregation_ids(k).contains(&i) {
        Ok(Layer::Aggregation)
    } else if spine_ids(k).contains(&i) {
        Ok(Layer::Spine)
    } else {
        Err(Error::InvalidSwitchId { id, k })
    }
}

pub fn leaf_pod(id: SwitchId, k: usize) -> PodId {
    PodId(id.0 / half(k))
}

pub fn aggregation_pod(id: SwitchId, k: usize) -> PodId {
    PodId((id.0 - first_aggregation(k)) / half(k))
}

/// aggregation 交换机在 pod 内的位置
pub fn aggregation_pos(id: SwitchId, k: usize) -> usize {
    (id.0 - first_aggregation(k)) % half(k)
}

/// spine 交换机在 spine 层内的序号
pub fn spine_pos(id: SwitchId, k: usize) -> usize {
    id.0 - first_spine(k)
}

/// spine 所在的组，也就是它向下连接的 aggregation 位置
pub fn spine_group(id: SwitchId, k: usize) -> usize {
    spine_pos(id, k) / half(k)
}

pub fn pod_leaves(pod: PodId, k: usize) -> impl Iterator<Item = SwitchId> {
    let h = half(k);
    (pod.0 * h..(pod.0 + 1) * h).map(SwitchId)
}

pub fn pod_aggregations(pod: PodId, k: usize) -> impl Iterator<Item = SwitchId> {
    let h = half(k);
    let base = first_aggregation(k) + pod.0 * h;
    (base..base + h).map(SwitchId)
}

/// leaf → 本 pod 的 k/2 台 aggregation
pub fn leaf_uplinks(id: SwitchId, k: usize) -> impl Iterator<Item = SwitchId> {
    pod_aggregations(leaf_pod(id, k), k)
}

/// aggregation → 本 pod 的 k/2 台 leaf
pub fn aggregation_downlinks(id: SwitchId, k: usize) -> impl Iterator<Item = SwitchId> {
    pod_leaves(aggregation_pod(id, k), k)
}

/// aggregation → spine 组 `pos` 的 k/2 台 spine
pub fn aggregation_uplinks(id: SwitchId, k: usize) -> impl Iterator<Item = SwitchId> {
    let h = half(k);
    let pos = aggregation_pos(id, k);
    let base = first_spine(k) + pos * h;
    (base..base + h).map(SwitchId)
}

/// spine → 每个 pod 一台 aggregation（步长 k/2，共 k 台）
pub fn spine_downlinks(id: SwitchId, k: usize) -> impl Iterator<Item = SwitchId> {
    let h = half(k);
    let start = first_aggregation(k) + spine_group(id, k);
    (start..first_spine(k)).step_by(h).map(SwitchId)
}
