use crate::error::Error;
use crate::fault::{inject_failures, propagate_failure};
use crate::topo::{FatTreeTopology, SwitchId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn failed_half_links(topo: &FatTreeTopology) -> HashSet<(SwitchId, SwitchId)> {
    topo.switches()
        .iter()
        .flat_map(|s| {
            s.links()
                .iter()
                .filter(|l| l.failed)
                .map(move |l| (s.id(), l.other_end))
        })
        .collect()
}

/// 2·k·(k/2)² physical links: leaf–aggregation plus aggregation–spine
fn physical_links(k: usize) -> usize {
    let half = k / 2;
    2 * k * half * half
}

#[test]
fn zero_probability_fails_nothing() {
    let mut topo = FatTreeTopology::new(8).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let report = inject_failures(&mut topo, 0.0, &mut rng).unwrap();
    assert_eq!(report.newly_failed, 0);
    assert_eq!(topo.failed_half_link_count(), 0);
    assert_eq!(topo.switches_with_multiple_failures(), 0);
}

#[test]
fn probability_one_fails_every_link_on_both_ends() {
    for k in [2, 4, 6] {
        let mut topo = FatTreeTopology::new(k).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let report = inject_failures(&mut topo, 1.0, &mut rng).unwrap();
        assert_eq!(report.newly_failed, physical_links(k), "k={k}");
        assert_eq!(topo.failed_link_count(), physical_links(k));
        assert!(
            topo.switches()
                .iter()
                .all(|s| s.links().iter().all(|l| l.failed))
        );
        assert!(topo.asymmetric_links().is_empty());
    }
}

#[test]
fn out_of_range_probability_is_rejected_without_mutation() {
    let mut topo = FatTreeTopology::new(4).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    for p in [-0.1, 1.000_1, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                inject_failures(&mut topo, p, &mut rng),
                Err(Error::InvalidProbability { .. })
            ),
            "p={p}"
        );
    }
    assert_eq!(topo.failed_half_link_count(), 0);
}

#[test]
fn repeated_injection_never_heals_links() {
    let mut topo = FatTreeTopology::new(8).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    inject_failures(&mut topo, 0.2, &mut rng).unwrap();
    let first = failed_half_links(&topo);
    let first_count = topo.failed_link_count();

    let report = inject_failures(&mut topo, 0.2, &mut rng).unwrap();
    let second = failed_half_links(&topo);

    assert!(first.is_subset(&second));
    assert_eq!(topo.failed_link_count(), first_count + report.newly_failed);
}

#[test]
fn already_failed_links_are_not_counted_again() {
    let k = 4;
    let mut topo = FatTreeTopology::new(k).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    inject_failures(&mut topo, 0.5, &mut rng).unwrap();
    let before = topo.failed_link_count();
    let report = inject_failures(&mut topo, 1.0, &mut rng).unwrap();
    assert_eq!(report.newly_failed, physical_links(k) - before);

    let report = inject_failures(&mut topo, 1.0, &mut rng).unwrap();
    assert_eq!(report.newly_failed, 0);
}

#[test]
fn failures_stay_symmetric_across_injection_sequences() {
    let mut rng = StdRng::seed_from_u64(2024);
    for k in [4, 6, 8] {
        let mut topo = FatTreeTopology::new(k).unwrap();
        for p in [0.05, 0.3, 0.0, 0.1, 0.7] {
            inject_failures(&mut topo, p, &mut rng).unwrap();
            assert!(
                topo.asymmetric_links().is_empty(),
                "k={k} p={p}: {:?}",
                topo.asymmetric_links()
            );
            assert_eq!(topo.failed_half_link_count() % 2, 0);
        }
    }
}

#[test]
fn same_seed_gives_same_failures() {
    let run = |seed| {
        let mut topo = FatTreeTopology::new(6).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        inject_failures(&mut topo, 0.25, &mut rng).unwrap();
        failed_half_links(&topo)
    };
    assert_eq!(run(11), run(11));
}

#[test]
fn propagate_failure_marks_the_link_pointing_back() {
    let mut topo = FatTreeTopology::new(4).unwrap();
    propagate_failure(&mut topo, SwitchId(8), SwitchId(0)).unwrap();

    let leaf = topo.switch(SwitchId(0)).unwrap();
    assert!(leaf.link_to(SwitchId(8)).unwrap().failed);
    assert!(!leaf.link_to(SwitchId(9)).unwrap().failed);
    // only the remote half was touched
    assert!(!topo.switch(SwitchId(8)).unwrap().link_to(SwitchId(0)).unwrap().failed);

    assert!(matches!(
        propagate_failure(&mut topo, SwitchId(8), SwitchId(99)),
        Err(Error::InvalidSwitchId { .. })
    ));
}

#[test]
fn multiple_failure_count_tracks_switches_with_two_or_more_failed_links() {
    // k=2: leaves own a single link, aggregation and spine switches own two
    let mut topo = FatTreeTopology::new(2).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    inject_failures(&mut topo, 1.0, &mut rng).unwrap();
    assert_eq!(topo.switches_with_multiple_failures(), 3);

    let mut topo = FatTreeTopology::new(4).unwrap();
    inject_failures(&mut topo, 1.0, &mut rng).unwrap();
    assert_eq!(topo.switches_with_multiple_failures(), topo.switches().len());
}
