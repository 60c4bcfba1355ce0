use sweep::{
    combination_count, discretize, discretize_all, expand, expand_with, sweep, Combinations,
    Error, ExpandOptions, ParameterRange,
};

#[test]
fn test_single_axis_half_steps() {
    let ranges = vec![ParameterRange::new("a", 0.0, 1.0, 0.5)];
    let seqs = discretize_all(&ranges).unwrap();
    assert_eq!(seqs, vec![vec![0.0, 0.5, 1.0]]);

    let rs = expand(&seqs);
    assert_eq!(rs.len(), 3);
    assert_eq!(rs.get("000"), Some("0.00 "));
    assert_eq!(rs.get("050"), Some("0.50 "));
    assert_eq!(rs.get("100"), Some("1.00 "));
}

#[test]
fn test_two_unit_axes() {
    let ranges = vec![
        ParameterRange::new("x", 0.0, 1.0, 1.0),
        ParameterRange::new("y", 0.0, 1.0, 1.0),
    ];
    let rs = sweep(&ranges, &ExpandOptions::default()).unwrap();
    let labels: Vec<&String> = rs.iter().map(|(k, _)| k).collect();
    assert_eq!(labels, ["000000", "000100", "100000", "100100"]);
    assert_eq!(rs.get("100000"), Some("1.00 0.00 "));
}

#[test]
fn test_negative_increment_rejected_before_expansion() {
    let ranges = vec![
        ParameterRange::new("fine", 0.0, 1.0, 0.5),
        ParameterRange::new("broken", 0.0, 5.0, -1.0),
    ];
    match sweep(&ranges, &ExpandOptions::default()) {
        Err(Error::InvalidRange { name, reason }) => {
            assert_eq!(name, "broken");
            assert!(reason.contains("increment"), "reason: {reason}");
        }
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn test_no_ranges_gives_single_empty_entry() {
    let rs = sweep(&[], &ExpandOptions::default()).unwrap();
    assert_eq!(rs.len(), 1);
    assert_eq!(rs.get(""), Some(""));
}

#[test]
fn test_sequence_properties() {
    // (min, max, increment) triples with min <= max, increment > 0.
    let cases = [
        (0.0, 1.0, 0.1),
        (0.0, 1.0, 0.3),
        (-2.0, 3.0, 0.7),
        (2.4, 3.0, 0.02),
        (0.0, 100.0, 0.01),
        (5.0, 5.0, 0.25),
        (1e-3, 2e-3, 1e-4),
    ];
    for (min, max, inc) in cases {
        let v = discretize(&ParameterRange::new("p", min, max, inc)).unwrap();
        let tol = inc * 1e-9;
        assert!(!v.is_empty(), "empty for {min}..{max} by {inc}");
        assert_eq!(v[0], min);
        assert!(v.windows(2).all(|w| w[1] > w[0]), "not increasing for {min}..{max} by {inc}");
        let last = *v.last().unwrap();
        assert!(last <= max + tol, "last {last} beyond {max}");
        assert!(last + inc > max, "skipped a step below {max} (last {last})");
    }
}

#[test]
fn test_product_size_before_collisions() {
    let ranges = vec![
        ParameterRange::new("a", 0.0, 1.0, 0.25),  // 5
        ParameterRange::new("b", 0.0, 2.0, 1.0),   // 3
        ParameterRange::new("c", 7.0, 7.0, 1.0),   // 1
        ParameterRange::new("d", 0.0, 0.3, 0.1),   // 4
    ];
    let seqs = discretize_all(&ranges).unwrap();
    assert_eq!(combination_count(&seqs), 60);
    assert_eq!(Combinations::new(&seqs).count(), 60);
    assert_eq!(expand(&seqs).len(), 60);
}

#[test]
fn test_repeated_runs_are_identical() {
    let ranges = vec![
        ParameterRange::new("beta", 2.4, 3.0, 0.1),
        ParameterRange::new("alpha", 0.0, 2.0, 0.5),
    ];
    let first = sweep(&ranges, &ExpandOptions::default()).unwrap();
    let second = sweep(&ranges, &ExpandOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_sweep_matches_sequential() {
    let ranges = vec![
        ParameterRange::new("beta", 2.4, 3.0, 0.02),
        ParameterRange::new("alpha", 0.0, 2.0, 0.1),
    ];
    let seq = sweep(&ranges, &ExpandOptions::default()).unwrap();
    let par = sweep(&ranges, &ExpandOptions { parallel: true, ..Default::default() }).unwrap();
    assert_eq!(seq.len(), 31 * 21);
    assert_eq!(seq, par);
}

#[test]
fn test_strict_mode_reports_collision() {
    let seqs = discretize_all(&[ParameterRange::new("fine", 0.0, 0.01, 0.001)]).unwrap();
    assert_eq!(seqs[0].len(), 11);

    let lossy = expand(&seqs);
    assert!(lossy.len() < 11);

    let strict = ExpandOptions { collisions: sweep::CollisionPolicy::Reject, ..Default::default() };
    assert!(matches!(expand_with(&seqs, &strict), Err(Error::LabelCollision { .. })));
}
