//! Fat-tree 拓扑构建

use tracing::{debug, info};

use super::id::{PodId, SwitchId};
use super::layout;
use super::link::DEFAULT_LINK_GBPS;
use super::switch::Switch;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct FatTreeOpts {
    pub k: usize,
    /// 链路容量，仅作记录
    pub link_gbps: f64,
}

impl Default for FatTreeOpts {
    fn default() -> Self {
        Self {
            k: 4,
            link_gbps: DEFAULT_LINK_GBPS,
        }
    }
}

/// 一次仿真所用的完整拓扑
///
/// `switches` 按编号排列（leaf、aggregation、spine），编号即下标。
#[derive(Debug, Clone)]
pub struct FatTreeTopology {
    k: usize,
    switches: Vec<Switch>,
}

impl FatTreeTopology {
    /// 用默认选项构建半径为 `k` 的拓扑
    pub fn new(k: usize) -> Result<Self> {
        build_fat_tree(&FatTreeOpts {
            k,
            ..FatTreeOpts::default()
        })
    }

    fn half(&self) -> usize {
        self.k / 2
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    pub fn leaves(&self) -> &[Switch] {
        &self.switches[layout::leaf_ids(self.k)]
    }

    pub fn aggregations(&self) -> &[Switch] {
        &self.switches[layout::aggregation_ids(self.k)]
    }

    pub fn spines(&self) -> &[Switch] {
        &self.switches[layout::spine_ids(self.k)]
    }

    /// 按编号查找交换机
    pub fn switch(&self, id: SwitchId) -> Result<&Switch> {
        self.switches.get(id.0).ok_or(Error::InvalidSwitchId { id, k: self.k })
    }

    pub(crate) fn switch_mut(&mut self, id: SwitchId) -> Result<&mut Switch> {
        let k = self.k;
        self.switches
            .get_mut(id.0)
            .ok_or(Error::InvalidSwitchId { id, k })
    }

    pub fn leaf(&self, pod: usize, index: usize) -> &Switch {
        &self.leaves()[pod * self.half() + index]
    }

    pub fn aggregation(&self, pod: usize, index: usize) -> &Switch {
        &self.aggregations()[pod * self.half() + index]
    }

    pub fn spine(&self, group: usize, index: usize) -> &Switch {
        &self.spines()[group * self.half() + index]
    }

    pub fn pods(&self) -> impl Iterator<Item = PodId> {
        (0..self.k).map(PodId)
    }

    /// 失效的物理链路数（每条链路两端各记一次，这里只数一次）
    pub fn failed_link_count(&self) -> usize {
        self.failed_half_link_count() / 2
    }

    /// 失效的半链路数
    pub fn failed_half_link_count(&self) -> usize {
        self.switches.iter().map(Switch::failed_link_count).sum()
    }

    /// 至少有两条相连链路失效的交换机数
    pub fn switches_with_multiple_failures(&self) -> usize {
        self.switches
            .iter()
            .filter(|s| s.failed_link_count() >= 2)
            .count()
    }

    /// 找出两端状态不一致（或缺少对端记录）的半链路 `(owner, other_end)`。
    pub fn asymmetric_links(&self) -> Vec<(SwitchId, SwitchId)> {
        let mut out = Vec::new();
        for sw in &self.switches {
            for link in sw.links() {
                let back = self
                    .switches
                    .get(link.other_end.0)
                    .and_then(|other| other.link_to(sw.id()));
                let consistent = back.is_some_and(|b| {
                    b.failed == link.failed && b.direction == link.direction.reverse()
                });
                if !consistent {
                    out.push((sw.id(), link.other_end));
                }
            }
        }
        out
    }
}

#[tracing::instrument(fields(k = opts.k))]
pub fn build_fat_tree(opts: &FatTreeOpts) -> Result<FatTreeTopology> {
    let k = opts.k;
    layout::validate_k(k)?;

    let switches = (0..layout::switch_count(k))
        .map(|i| Switch::with_capacity(SwitchId(i), k, opts.link_gbps))
        .collect::<Result<Vec<_>>>()?;

    let topo = FatTreeTopology { k, switches };
    debug!(
        leaves = topo.leaves().len(),
        aggregations = topo.aggregations().len(),
        spines = topo.spines().len(),
        "交换机数量"
    );
    info!(hosts = layout::hosts_supported(k), "🌲 fat-tree 构建完成");
    Ok(topo)
}
