use evotune::config::AppConfig;
use evotune::engines::evaluation::Dataset;
use evotune::models::KnnClassifier;
use evotune::space::{ParamDomain, ParamSpace};
use evotune::tuner::HyperSearch;
use evotune::types::{SearchResult, SENTINEL_FITNESS};
use std::sync::Arc;

fn knn_space() -> ParamSpace {
    let mut space = ParamSpace::new();
    space
        .add("n_neighbors", ParamDomain::DiscreteInt(vec![1, 3, 5, 7]))
        .unwrap();
    space
        .add(
            "metric",
            ParamDomain::Categorical(vec![
                "euclidean".to_string(),
                "manhattan".to_string(),
                "chebyshev".to_string(),
            ]),
        )
        .unwrap();
    space
        .add(
            "weighting",
            ParamDomain::Categorical(vec!["uniform".to_string(), "distance".to_string()]),
        )
        .unwrap();
    space
}

/// Small, fast configuration for test runs
fn test_config(generations: usize, seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.search.generations = generations;
    config.search.seed = Some(seed);
    config.population.population_size = 12;
    config.population.num_populations = 1;
    config.population.local_search_steps = 0;
    config
}

fn run_search(generations: usize, seed: u64) -> SearchResult {
    let search = HyperSearch::new(
        Arc::new(KnnClassifier::new()),
        knn_space(),
        Dataset::synthetic_blobs(25, 3, 42),
        test_config(generations, seed),
    )
    .expect("search construction should succeed");
    search.fit().expect("search run should succeed")
}

#[test]
fn one_generation_on_separable_data_scores_above_sentinel() {
    let result = run_search(1, 3);

    assert!(result.best_score > SENTINEL_FITNESS);
    assert_eq!(result.generations_run, 1);
    assert!(!result.cancelled);
    assert!(result.total_time_seconds >= 0.0);

    // The reported best configuration is drawn from the declared space
    let k = result.best_params["n_neighbors"].as_int().unwrap();
    assert!([1, 3, 5, 7].contains(&k));
    let metric = result.best_params["metric"].as_str().unwrap();
    assert!(["euclidean", "manhattan", "chebyshev"].contains(&metric));

    assert_eq!(result.best_chromosome.len(), 3);
}

#[test]
fn identical_seeds_produce_identical_results() {
    let first = run_search(3, 99);
    let second = run_search(3, 99);

    assert_eq!(first.best_score, second.best_score);
    assert_eq!(first.best_params, second.best_params);
    assert_eq!(first.best_chromosome, second.best_chromosome);
}

#[test]
fn search_with_no_viable_configuration_reports_the_sentinel() {
    // Every k in the space exceeds the 20-sample dataset, so every fit
    // fails and the sentinel floor is the best the search can report.
    let mut space = ParamSpace::new();
    space
        .add(
            "n_neighbors",
            ParamDomain::DiscreteInt(vec![50, 100, 200, 400]),
        )
        .unwrap();

    let search = HyperSearch::new(
        Arc::new(KnnClassifier::new()),
        space,
        Dataset::synthetic_blobs(10, 2, 7),
        test_config(2, 5),
    )
    .unwrap();
    let result = search.fit().unwrap();

    assert_eq!(result.best_score, SENTINEL_FITNESS);
    assert!(result.fit_failures > 0);
}

#[test]
fn invalid_space_fails_before_any_search() {
    let mut space = ParamSpace::new();
    space
        .add("bad", ParamDomain::DiscreteInt(vec![1, 2]))
        .unwrap();

    assert!(HyperSearch::new(
        Arc::new(KnnClassifier::new()),
        space,
        Dataset::synthetic_blobs(10, 2, 7),
        test_config(1, 1),
    )
    .is_err());
}

#[test]
fn training_score_fallback_runs_without_a_fold_plan() {
    let mut config = test_config(1, 8);
    config.evaluation.n_folds = None;

    let search = HyperSearch::new(
        Arc::new(KnnClassifier::new()),
        knn_space(),
        Dataset::synthetic_blobs(25, 3, 42),
        config,
    )
    .unwrap();
    let result = search.fit().unwrap();

    assert!(result.best_score > SENTINEL_FITNESS);
}

#[test]
fn elite_refinement_and_multiple_populations_still_converge() {
    let mut config = test_config(4, 21);
    config.population.num_populations = 2;
    config.population.local_search_steps = 2;
    config.population.diversity_restart_threshold = Some(0.01);

    let search = HyperSearch::new(
        Arc::new(KnnClassifier::new()),
        knn_space(),
        Dataset::synthetic_blobs(25, 3, 42),
        config,
    )
    .unwrap();
    let result = search.fit().unwrap();

    assert!(result.best_score > 0.9);
    assert_eq!(result.generations_run, 4);
}
