use std::collections::BTreeSet;

use diffcov_core::relcov::{performance_over_corpus, relcov};
use diffcov_core::{ApproachData, CollectionReducer, ScoreError, ScoringConfig, ValueReducer};

type Data = ApproachData<&'static str, u32>;

fn edges(range: std::ops::Range<u32>) -> Vec<u32> {
    range.collect()
}

fn approach(trials: Vec<(&'static str, Vec<u32>)>) -> Data {
    ApproachData::new(trials).expect("valid approach")
}

fn default_relcov(lhs: &Data, rhs: &Data) -> f64 {
    lhs.relcov(rhs, ValueReducer::Median, CollectionReducer::Union).unwrap()
}

fn join(parts: &[&[u32]]) -> Vec<u32> {
    parts.iter().flat_map(|p| p.iter().copied()).collect()
}

const A: &[u32] = &[1, 2, 3];
const B: &[u32] = &[4, 5, 6];
const C: &[u32] = &[7, 8, 9];

#[test]
fn relcov_of_sets() {
    let reference: BTreeSet<u32> = [1, 2, 3, 4].into_iter().collect();
    let querying: BTreeSet<u32> = [1, 2, 9].into_iter().collect();
    assert_eq!(relcov(&querying, &reference).unwrap(), 0.5);
    assert_eq!(relcov(&reference, &reference).unwrap(), 1.0);
    assert_eq!(relcov(&BTreeSet::new(), &reference).unwrap(), 0.0);
}

#[test]
fn relcov_against_empty_reference_is_an_error() {
    let querying: BTreeSet<u32> = [1].into_iter().collect();
    assert_eq!(relcov(&querying, &BTreeSet::new()), Err(ScoreError::DivisionByZero));
}

#[test]
fn single_trials_with_default_reducers() {
    let small_a = approach(vec![("t1", A.to_vec())]);
    let small_b = approach(vec![("t1", B.to_vec())]);
    let large_a = approach(vec![("t1", join(&[A, B]))]);
    let large_b = approach(vec![("t1", join(&[A, C]))]);

    assert_eq!(default_relcov(&small_a, &small_a.clone()), 1.0);
    assert_eq!(default_relcov(&small_a, &large_a), 0.5);
    assert_eq!(default_relcov(&large_a, &small_a), 1.0);
    assert_eq!(default_relcov(&small_a, &small_b), 0.0);
    assert_eq!(default_relcov(&small_b, &small_a), 0.0);
    assert_eq!(default_relcov(&large_a, &large_b), 0.5);
    assert_eq!(default_relcov(&large_b, &large_a), 0.5);
}

#[test]
fn single_trial_against_multiple_trials() {
    let left = approach(vec![("t1", A.to_vec())]);

    let right = approach(vec![("t1", join(&[A, B])), ("t2", join(&[A, B]))]);
    assert_eq!(default_relcov(&left, &right), 0.5);

    let right = approach(vec![("t1", A.to_vec()), ("t2", B.to_vec())]);
    assert_eq!(default_relcov(&left, &right), 0.5);

    let right = approach(vec![("t1", join(&[A, B])), ("t2", join(&[A, C]))]);
    assert_eq!(default_relcov(&left, &right), 1.0 / 3.0);

    let left = approach(vec![("t1", join(&[A, B]))]);
    assert_eq!(default_relcov(&left, &right), 2.0 / 3.0);
}

#[test]
fn multiple_trials_against_single_trial() {
    let rhs = approach(vec![("t1", edges(1..7))]);

    let lhs = approach(vec![("t1", A.to_vec()), ("t2", A.to_vec())]);
    assert_eq!(default_relcov(&lhs, &rhs), 0.5);

    let lhs = approach(vec![("t1", A.to_vec()), ("t2", B.to_vec())]);
    assert_eq!(default_relcov(&lhs, &rhs), 0.5);

    // median of 2/6, 4/6, 6/6
    let lhs =
        approach(vec![("t1", edges(1..3)), ("t2", edges(1..5)), ("t3", edges(1..7))]);
    assert_eq!(default_relcov(&lhs, &rhs), 2.0 / 3.0);

    // coverage outside the reference is ignored
    let lhs = approach(vec![
        ("t1", edges(10..100)),
        ("t2", join(&[A, &edges(10..100)])),
        ("t3", join(&[&edges(1..7), &edges(10..100)])),
    ]);
    assert_eq!(default_relcov(&lhs, &rhs), 0.5);
}

#[test]
fn value_reducer_selects_among_trial_ratios() {
    // per-trial ratios: 1/3, 1/2, 1
    let lhs = approach(vec![("t1", edges(1..3)), ("t2", edges(1..4)), ("t3", edges(1..7))]);
    let rhs = approach(vec![("t1", edges(1..7))]);

    let run = |reducer| lhs.relcov(&rhs, reducer, CollectionReducer::Union).unwrap();
    assert_eq!(run(ValueReducer::Median), 0.5);
    assert_eq!(run(ValueReducer::Min), 1.0 / 3.0);
    assert_eq!(run(ValueReducer::Max), 1.0);
    assert!((run(ValueReducer::Average) - 11.0 / 18.0).abs() < 1e-12);
}

#[test]
fn collection_reducer_picks_reference_set() {
    let lhs = approach(vec![("lhs1", vec![1])]);
    let rhs = approach(vec![("rhs1", vec![1, 2]), ("rhs2", vec![2])]);

    assert_eq!(lhs.relcov(&rhs, ValueReducer::Median, CollectionReducer::Union).unwrap(), 0.5);
    assert_eq!(
        lhs.relcov(&rhs, ValueReducer::Median, CollectionReducer::Intersection).unwrap(),
        0.0
    );
}

#[test]
fn intersection_of_disjoint_reference_trials_is_undefined() {
    let lhs = approach(vec![("t1", vec![1])]);
    let rhs = approach(vec![("t1", vec![1]), ("t2", vec![2])]);
    let err = lhs.relcov(&rhs, ValueReducer::Median, CollectionReducer::Intersection).unwrap_err();
    assert_eq!(err, ScoreError::DivisionByZero);
}

#[test]
fn relcov_with_uses_config_reducers() {
    let lhs = approach(vec![("t1", edges(1..3)), ("t2", edges(1..7))]);
    let rhs = approach(vec![("t1", edges(1..7))]);
    let config = ScoringConfig::new(ValueReducer::Min, CollectionReducer::Union);
    assert_eq!(lhs.relcov_with(&rhs, &config).unwrap(), 1.0 / 3.0);
}

#[test]
fn reliability_is_self_relcov() {
    let data = approach(vec![("t1", vec![1, 3]), ("t2", vec![1, 2])]);
    assert_eq!(data.reliability().unwrap(), 2.0 / 3.0);

    let steady = approach(vec![("t1", vec![1, 2]), ("t2", vec![1, 2])]);
    assert_eq!(steady.reliability().unwrap(), 1.0);
}

#[test]
fn corpus_is_the_querying_side() {
    let corpus = approach(vec![("seeds", vec![1])]);
    let fuzzer = approach(vec![("t1", vec![1, 3]), ("t2", vec![1, 2])]);
    assert_eq!(performance_over_corpus("seeds", &corpus, &fuzzer).unwrap(), 1.0 / 3.0);
}

#[test]
fn corpus_must_have_exactly_one_trial() {
    let corpus = approach(vec![("t1", vec![1]), ("t2", vec![1])]);
    let fuzzer = approach(vec![("t1", vec![1])]);
    let err = performance_over_corpus("two_trials", &corpus, &fuzzer).unwrap_err();
    assert_eq!(err, ScoreError::InvalidCorpus { approach: "two_trials".into(), trials: 2 });
    assert!(err.to_string().contains("exactly one trial"));
    assert!(err.is_structural());
}
