//! 相关链路失效注入
//!
//! 每条链路都有一端是 aggregation 交换机，因此只遍历 aggregation 交换机持有的链路，
//! 对每条尚未失效的链路做一次伯努利试验；失效后再把对端的半链路也标记为失效。

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::topo::{FatTreeTopology, Switch, SwitchId};

/// 单次注入的结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureReport {
    /// 本次新增的失效物理链路数
    pub newly_failed: usize,
}

pub fn validate_probability(prob: f64) -> Result<()> {
    // NaN 也会落到这里
    if !(0.0..=1.0).contains(&prob) {
        return Err(Error::InvalidProbability { prob });
    }
    Ok(())
}

/// 以概率 `fail_prob` 独立地让每条健康链路失效。
///
/// 已失效的链路不会重新抽样，所以重复调用只会增加失效，不会恢复链路。
#[tracing::instrument(skip(topo, rng), fields(k = topo.k()))]
pub fn inject_failures<R: Rng + ?Sized>(
    topo: &mut FatTreeTopology,
    fail_prob: f64,
    rng: &mut R,
) -> Result<FailureReport> {
    validate_probability(fail_prob)?;

    let aggr_ids: Vec<SwitchId> = topo.aggregations().iter().map(|s| s.id()).collect();
    let mut report = FailureReport::default();

    for aggr_id in aggr_ids {
        let tripped = trip_links(topo.switch_mut(aggr_id)?, fail_prob, rng);
        for remote in tripped {
            propagate_failure(topo, aggr_id, remote)?;
            report.newly_failed += 1;
        }
    }

    debug!(
        newly_failed = report.newly_failed,
        total_failed = topo.failed_link_count(),
        "💥 链路失效注入完成"
    );
    Ok(report)
}

/// 对 `switch` 持有的每条健康链路抽样，返回本次失效链路的对端编号。
fn trip_links<R: Rng + ?Sized>(
    switch: &mut Switch,
    fail_prob: f64,
    rng: &mut R,
) -> Vec<SwitchId> {
    let mut tripped = Vec::new();
    for link in switch.links_mut() {
        if !link.failed && rng.gen_bool(fail_prob) {
            link.failed = true;
            tripped.push(link.other_end);
        }
    }
    tripped
}

/// 把 `remote` 上指向 `origin` 的半链路标记为失效，恢复两端一致。
pub fn propagate_failure(
    topo: &mut FatTreeTopology,
    origin: SwitchId,
    remote: SwitchId,
) -> Result<()> {
    let remote_sw = topo.switch_mut(remote)?;
    if let Some(link) = remote_sw
        .links_mut()
        .iter_mut()
        .find(|l| l.other_end == origin)
    {
        trace!(origin = %origin, remote = %remote, "同步对端半链路");
        link.failed = true;
    }
    Ok(())
}
