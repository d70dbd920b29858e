//! 交换机类型
//!
//! 交换机只依赖自身编号和 k 推导出所在层、pod 以及全部链路，
//! 不要求其他交换机已经构建。

use super::id::{Layer, PodId, SwitchId};
use super::layout;
use super::link::{Direction, Link, DEFAULT_LINK_GBPS};
use crate::error::Result;

/// 交换机节点
#[derive(Debug, Clone)]
pub struct Switch {
    id: SwitchId,
    k: usize,
    layer: Layer,
    /// spine 不属于任何 pod
    pod: Option<PodId>,
    links: Vec<Link>,
}

impl Switch {
    /// 按默认链路容量创建交换机
    pub fn new(id: SwitchId, k: usize) -> Result<Self> {
        Self::with_capacity(id, k, DEFAULT_LINK_GBPS)
    }

    /// 创建交换机，所有链路使用给定容量
    pub fn with_capacity(id: SwitchId, k: usize, capacity_gbps: f64) -> Result<Self> {
        let layer = layout::layer_of(id, k)?;
        let up = |to| Link::new(Direction::Upstream, to, capacity_gbps);
        let down = |to| Link::new(Direction::Downstream, to, capacity_gbps);

        let (pod, links): (Option<PodId>, Vec<Link>) = match layer {
            Layer::Leaf => (
                Some(layout::leaf_pod(id, k)),
                layout::leaf_uplinks(id, k).map(up).collect(),
            ),
            Layer::Aggregation => {
                // 先下行（leaf），后上行（spine）
                let links = layout::aggregation_downlinks(id, k)
                    .map(down)
                    .chain(layout::aggregation_uplinks(id, k).map(up))
                    .collect();
                (Some(layout::aggregation_pod(id, k)), links)
            }
            Layer::Spine => (None, layout::spine_downlinks(id, k).map(down).collect()),
        };

        Ok(Self {
            id,
            k,
            layer,
            pod,
            links,
        })
    }

    pub fn id(&self) -> SwitchId {
        self.id
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn pod(&self) -> Option<PodId> {
        self.pod
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub(crate) fn links_mut(&mut self) -> &mut [Link] {
        &mut self.links
    }

    pub fn is_leaf(&self) -> bool {
        self.layer == Layer::Leaf
    }

    /// 指向 `other` 的链路
    pub fn link_to(&self, other: SwitchId) -> Option<&Link> {
        self.links.iter().find(|l| l.other_end == other)
    }

    pub fn failed_link_count(&self) -> usize {
        self.links.iter().filter(|l| l.failed).count()
    }
}
