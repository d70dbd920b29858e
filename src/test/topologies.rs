use crate::error::Error;
use crate::topo::{
    DEFAULT_LINK_GBPS, Direction, FatTreeOpts, FatTreeTopology, Layer, PodId, Switch, SwitchId,
    build_fat_tree,
};
use std::collections::HashSet;

#[test]
fn fat_tree_layer_counts_match_radix() {
    for k in [2, 4, 6, 8, 12] {
        let topo = FatTreeTopology::new(k).expect("build");
        let half = k / 2;
        assert_eq!(topo.leaves().len(), k * k / 2, "k={k}");
        assert_eq!(topo.aggregations().len(), k * k / 2, "k={k}");
        assert_eq!(topo.spines().len(), half * half, "k={k}");
        assert_eq!(topo.switches().len(), k * k + half * half, "k={k}");

        assert!(topo.leaves().iter().all(|s| s.layer() == Layer::Leaf));
        assert!(topo.aggregations().iter().all(|s| s.layer() == Layer::Aggregation));
        assert!(topo.spines().iter().all(|s| s.layer() == Layer::Spine));
    }
}

#[test]
fn switch_ids_equal_their_position() {
    let topo = FatTreeTopology::new(6).unwrap();
    for (idx, sw) in topo.switches().iter().enumerate() {
        assert_eq!(sw.id(), SwitchId(idx));
        assert_eq!(topo.switch(sw.id()).unwrap().id(), sw.id());
    }
    let unique: HashSet<_> = topo.switches().iter().map(|s| s.id()).collect();
    assert_eq!(unique.len(), topo.switches().len());
}

#[test]
fn every_link_has_a_healthy_reciprocal_after_build() {
    for k in [2, 4, 6, 8] {
        let topo = FatTreeTopology::new(k).unwrap();
        assert!(topo.asymmetric_links().is_empty(), "k={k}");
        assert_eq!(topo.failed_half_link_count(), 0);
        assert_eq!(topo.switches_with_multiple_failures(), 0);
    }
}

#[test]
fn link_fanout_per_layer() {
    let k = 6;
    let half = k / 2;
    let topo = FatTreeTopology::new(k).unwrap();

    for leaf in topo.leaves() {
        assert_eq!(leaf.links().len(), half);
        assert!(leaf.links().iter().all(|l| l.direction == Direction::Upstream));
        let pod = leaf.pod().expect("leaf has a pod");
        for l in leaf.links() {
            let aggr = topo.switch(l.other_end).unwrap();
            assert_eq!(aggr.layer(), Layer::Aggregation);
            assert_eq!(aggr.pod(), Some(pod));
        }
    }

    for aggr in topo.aggregations() {
        let down: Vec<_> = aggr
            .links()
            .iter()
            .filter(|l| l.direction == Direction::Downstream)
            .collect();
        let up: Vec<_> = aggr
            .links()
            .iter()
            .filter(|l| l.direction == Direction::Upstream)
            .collect();
        assert_eq!(down.len(), half);
        assert_eq!(up.len(), half);
        // downstream links come first
        assert!(aggr.links()[..half].iter().all(|l| l.direction == Direction::Downstream));
        for l in down {
            assert_eq!(topo.switch(l.other_end).unwrap().pod(), aggr.pod());
        }
        for l in up {
            assert_eq!(topo.switch(l.other_end).unwrap().layer(), Layer::Spine);
        }
    }

    for spine in topo.spines() {
        assert_eq!(spine.pod(), None);
        assert_eq!(spine.links().len(), k);
        let pods: HashSet<PodId> = spine
            .links()
            .iter()
            .map(|l| topo.switch(l.other_end).unwrap().pod().unwrap())
            .collect();
        assert_eq!(pods.len(), k, "spine {} must reach every pod once", spine.id());
    }
}

#[test]
fn indexing_helpers_follow_id_layout() {
    let topo = FatTreeTopology::new(4).unwrap();
    assert_eq!(topo.leaf(1, 1).id(), SwitchId(3));
    assert_eq!(topo.aggregation(2, 0).id(), SwitchId(12));
    assert_eq!(topo.spine(1, 0).id(), SwitchId(18));
    assert_eq!(topo.pods().count(), 4);
}

#[test]
fn build_rejects_invalid_radix() {
    for k in [0, 1, 3, 5] {
        assert!(
            matches!(FatTreeTopology::new(k), Err(Error::InvalidK { .. })),
            "k={k}"
        );
    }
}

#[test]
fn switch_construction_is_standalone_and_validates_id() {
    let leaf = Switch::new(SwitchId(3), 4).unwrap();
    assert_eq!(leaf.layer(), Layer::Leaf);
    assert_eq!(leaf.pod(), Some(PodId(1)));
    assert_eq!(leaf.k(), 4);

    assert!(matches!(
        Switch::new(SwitchId(20), 4),
        Err(Error::InvalidSwitchId { .. })
    ));
    assert!(matches!(
        FatTreeTopology::new(4).unwrap().switch(SwitchId(20)),
        Err(Error::InvalidSwitchId { .. })
    ));
}

#[test]
fn link_capacity_comes_from_opts() {
    let topo = build_fat_tree(&FatTreeOpts {
        k: 4,
        link_gbps: 100.0,
    })
    .unwrap();
    assert!(topo
        .switches()
        .iter()
        .flat_map(|s| s.links())
        .all(|l| l.capacity_gbps == 100.0));

    let default = FatTreeTopology::new(4).unwrap();
    assert_eq!(default.leaf(0, 0).links()[0].capacity_gbps, DEFAULT_LINK_GBPS);
}
