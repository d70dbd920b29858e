use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::result::{MultifailResult, MultifailRow, PathSweepPoint, PathSweepResult, Samples};
use super::spec::{MultifailSpec, PathSweepSpec};
use crate::error::{Error, Result};
use crate::fault::{inject_failures, validate_probability};
use crate::paths::count_leaf_paths;
use crate::topo::{FatTreeTopology, SwitchId, hosts_supported, layout};

/// 由基础种子和试验序号派生每次试验的种子。
///
/// 每次试验拥有独立的发生器，结果与试验的执行顺序无关。
pub fn trial_seed(base: u64, stream: u64) -> u64 {
    mix64(base ^ stream.wrapping_mul(0x9E3779B97F4A7C15))
}

/// splitmix64
fn mix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// 对每个失效概率做 `trials` 次试验，统计所有 leaf 对（`src < dst`）的平均路径数，
/// 按同 pod / 跨 pod 分开。
#[tracing::instrument(skip(spec), fields(k = spec.k, trials = spec.trials))]
pub fn avg_paths_vs_prob(spec: &PathSweepSpec) -> Result<PathSweepResult> {
    layout::validate_k(spec.k)?;
    if spec.probs.is_empty() {
        return Err(Error::EmptySweep("no failure probabilities"));
    }
    if spec.trials == 0 {
        return Err(Error::EmptySweep("trials must be > 0"));
    }
    // 先整体校验，避免跑到一半才报错
    for &p in &spec.probs {
        validate_probability(p)?;
    }

    let mut points = Vec::with_capacity(spec.probs.len());
    for (prob_idx, &prob) in spec.probs.iter().enumerate() {
        let mut in_pod = Samples::default();
        let mut cross_pod = Samples::default();

        for trial in 0..spec.trials {
            let stream = (prob_idx * spec.trials + trial) as u64;
            let mut rng = StdRng::seed_from_u64(trial_seed(spec.seed, stream));
            let mut topo = FatTreeTopology::new(spec.k)?;
            inject_failures(&mut topo, prob, &mut rng)?;
            collect_leaf_pairs(&topo, &mut in_pod, &mut cross_pod)?;
        }

        let point = PathSweepPoint {
            prob,
            avg_in_pod: in_pod.mean(),
            avg_cross_pod: cross_pod.mean(),
            in_pod_samples: in_pod.len(),
            cross_pod_samples: cross_pod.len(),
        };
        debug!(
            prob,
            avg_in_pod = ?point.avg_in_pod,
            avg_cross_pod = ?point.avg_cross_pod,
            "概率点完成"
        );
        points.push(point);
    }

    info!(points = points.len(), "📈 路径扫描完成");
    Ok(PathSweepResult {
        k: spec.k,
        trials: spec.trials,
        seed: spec.seed,
        points,
    })
}

fn collect_leaf_pairs(
    topo: &FatTreeTopology,
    in_pod: &mut Samples,
    cross_pod: &mut Samples,
) -> Result<()> {
    let leaves = layout::leaf_ids(topo.k());
    for src in leaves.clone() {
        for dst in src + 1..leaves.end {
            let (src, dst) = (SwitchId(src), SwitchId(dst));
            let paths = count_leaf_paths(topo, src, dst)?;
            if layout::leaf_pod(src, topo.k()) == layout::leaf_pod(dst, topo.k()) {
                in_pod.push(paths);
            } else {
                cross_pod.push(paths);
            }
        }
    }
    Ok(())
}

/// 对每个 k 构建一次拓扑，以 `fail_prob` 注入失效，统计至少两条链路失效的交换机数。
#[tracing::instrument(skip(spec), fields(fail_prob = spec.fail_prob))]
pub fn multifail_vs_k(spec: &MultifailSpec) -> Result<MultifailResult> {
    if spec.ks.is_empty() {
        return Err(Error::EmptySweep("no k values"));
    }
    validate_probability(spec.fail_prob)?;
    for &k in &spec.ks {
        layout::validate_k(k)?;
    }

    let mut rows = Vec::with_capacity(spec.ks.len());
    for (idx, &k) in spec.ks.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(trial_seed(spec.seed, idx as u64));
        let mut topo = FatTreeTopology::new(k)?;
        inject_failures(&mut topo, spec.fail_prob, &mut rng)?;

        let row = MultifailRow {
            k,
            hosts: hosts_supported(k),
            switches: topo.switches().len(),
            failed_links: topo.failed_link_count(),
            multi_failed_switches: topo.switches_with_multiple_failures(),
        };
        debug!(?row, "k 完成");
        rows.push(row);
    }

    info!(rows = rows.len(), "📊 多链路失效扫描完成");
    Ok(MultifailResult {
        fail_prob: spec.fail_prob,
        seed: spec.seed,
        rows,
    })
}
