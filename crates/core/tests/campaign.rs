use diffcov_core::{
    Campaign, CollectionReducer, ScoreError, ScoringConfig, ValueReducer,
};

type Sample = Campaign<&'static str, &'static str, u32>;

fn sample(with_seeds: bool) -> Sample {
    let mut approaches = vec![
        ("fuzzer_a", vec![("t1", vec![1, 3]), ("t2", vec![1, 2])]),
        ("fuzzer_b", vec![("t1", vec![1, 2]), ("t2", vec![1, 2])]),
        ("fuzzer_c", vec![("t1", vec![1, 2, 3]), ("t2", vec![1, 2, 3])]),
    ];
    if with_seeds {
        approaches.push(("seeds", vec![("seeds", vec![1])]));
    }
    Campaign::new(approaches).expect("valid sample campaign")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_campaign_is_rejected() {
    let err = Sample::new(Vec::<(&str, Vec<(&str, Vec<u32>)>)>::new()).unwrap_err();
    assert_eq!(err, ScoreError::EmptyCampaign);
}

#[test]
fn approach_without_trials_is_named_in_the_error() {
    let err = Sample::new(vec![("lonely", Vec::<(&str, Vec<u32>)>::new())]).unwrap_err();
    assert_eq!(err, ScoreError::EmptyApproach { approach: "lonely".into() });
    assert_eq!(err.to_string(), "Approach lonely has no trials");
}

#[test]
fn names_are_sorted() {
    assert_eq!(sample(true).names(), vec!["fuzzer_a", "fuzzer_b", "fuzzer_c", "seeds"]);
    assert_eq!(sample(true).len(), 4);
}

#[test]
fn relscores_without_seeds() {
    let scores = sample(false).relscores();
    assert_eq!(scores["fuzzer_c"], 1.0);
    assert_eq!(scores["fuzzer_a"], 0.5);
    assert_eq!(scores["fuzzer_b"], 0.0);
}

#[test]
fn relscores_with_seeds() {
    let scores = sample(true).relscores();
    assert_eq!(scores["fuzzer_c"], 3.0);
    assert_eq!(scores["fuzzer_a"], 1.5);
    assert_eq!(scores["fuzzer_b"], 1.0);
    assert_eq!(scores["seeds"], 0.0);
}

#[test]
fn reliabilities() {
    let results = sample(false).reliabilities().unwrap();
    assert_eq!(results.len(), 3);
    assert!(approx(results["fuzzer_a"], 2.0 / 3.0));
    assert_eq!(results["fuzzer_b"], 1.0);
    assert_eq!(results["fuzzer_c"], 1.0);
}

#[test]
fn performance_over_reference_approach() {
    let results =
        sample(false).performance_over_approach(&"fuzzer_c", &ScoringConfig::default()).unwrap();
    assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec!["fuzzer_a", "fuzzer_b"]);
    assert!(approx(results["fuzzer_a"], 2.0 / 3.0));
    assert!(approx(results["fuzzer_b"], 2.0 / 3.0));
}

#[test]
fn missing_reference_is_reported() {
    let err = sample(false)
        .performance_over_approach(&"nonexistent", &ScoringConfig::default())
        .unwrap_err();
    assert_eq!(err, ScoreError::ReferenceNotFound { name: "nonexistent".into() });
    assert!(err.to_string().contains("not found in campaign"));
    assert!(!err.is_structural());
}

#[test]
fn performance_table_has_reliability_on_the_diagonal() {
    let campaign = sample(false);
    let table = campaign.performance_table(&ScoringConfig::default()).unwrap();
    assert_eq!(table.columns, vec!["fuzzer_a", "fuzzer_b", "fuzzer_c"]);
    assert_eq!(table.rows.len(), 3);
    for name in &table.columns {
        let reliability = campaign.get(name).unwrap().reliability().unwrap();
        assert_eq!(table.get(name, name), Some(reliability));
    }
    assert!(approx(table.get(&"fuzzer_a", &"fuzzer_c").unwrap(), 2.0 / 3.0));
    assert!(approx(table.get(&"fuzzer_b", &"fuzzer_c").unwrap(), 2.0 / 3.0));
    assert_eq!(table.get(&"fuzzer_c", &"fuzzer_b"), Some(1.0));
}

#[test]
fn performance_table_honours_reducers_off_the_diagonal() {
    let campaign = sample(false);
    let config = ScoringConfig::new(ValueReducer::Max, CollectionReducer::Intersection);
    let table = campaign.performance_table(&config).unwrap();
    // intersection of fuzzer_a is {1}; every trial of fuzzer_b contains it
    assert_eq!(table.get(&"fuzzer_b", &"fuzzer_a"), Some(1.0));
    assert!(approx(table.get(&"fuzzer_a", &"fuzzer_a").unwrap(), 2.0 / 3.0));
}

#[test]
fn corpus_approaches_have_one_trial() {
    assert_eq!(sample(true).corpus_approaches(), vec!["seeds"]);
    assert!(sample(false).corpus_approaches().is_empty());
}

#[test]
fn performance_over_corpus() {
    let scores = sample(true).performance_over_corpus(&"seeds").unwrap();
    assert_eq!(scores.len(), 3);
    assert!(approx(scores["fuzzer_a"], 1.0 / 3.0));
    assert!(approx(scores["fuzzer_b"], 1.0 / 2.0));
    assert!(approx(scores["fuzzer_c"], 1.0 / 3.0));
}

#[test]
fn performance_over_corpus_errors() {
    let campaign = sample(true);
    let err = campaign.performance_over_corpus(&"nonexistent").unwrap_err();
    assert!(err.to_string().contains("not found in campaign"));

    let err = campaign.performance_over_corpus(&"fuzzer_a").unwrap_err();
    assert!(err.to_string().contains("exactly one trial"));
}

#[test]
fn corpus_table_covers_every_approach() {
    let table = sample(true).corpus_table().unwrap();
    assert_eq!(table.columns, vec!["seeds"]);
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.get(&"seeds", &"seeds"), Some(1.0));
    assert!(approx(table.get(&"fuzzer_a", &"seeds").unwrap(), 1.0 / 3.0));
    assert!(approx(table.get(&"fuzzer_b", &"seeds").unwrap(), 1.0 / 2.0));
    assert!(approx(table.get(&"fuzzer_c", &"seeds").unwrap(), 1.0 / 3.0));
}

#[test]
fn corpus_table_without_corpora_has_no_columns() {
    let table = sample(false).corpus_table().unwrap();
    assert!(table.columns.is_empty());
    assert!(table.rows.values().all(|cells| cells.is_empty()));
}
