use evotune::engines::evaluation::{
    Dataset, EvaluationMode, FitnessEvaluator, KFoldPlan,
};
use evotune::models::KnnClassifier;
use evotune::types::{ParamConfig, ParamValue, SENTINEL_FITNESS};
use std::sync::Arc;

fn knn_config(k: i64, metric: &str, weighting: &str) -> ParamConfig {
    let mut params = ParamConfig::new();
    params.insert("n_neighbors".to_string(), ParamValue::Int(k));
    params.insert("metric".to_string(), ParamValue::Str(metric.to_string()));
    params.insert(
        "weighting".to_string(),
        ParamValue::Str(weighting.to_string()),
    );
    params
}

fn cv_evaluator(n_folds: usize) -> FitnessEvaluator {
    FitnessEvaluator::new(
        Arc::new(KnnClassifier::new()),
        Arc::new(Dataset::synthetic_blobs(30, 3, 11)),
        EvaluationMode::CrossValidated(KFoldPlan::new(n_folds).unwrap()),
    )
}

#[test]
fn cross_validated_score_on_separable_data_is_high() {
    let evaluator = cv_evaluator(5);
    let outcome = evaluator.evaluate(&knn_config(3, "euclidean", "uniform"));

    let fitness = outcome.fitness();
    assert!(!outcome.is_failed());
    assert!(fitness > 0.9, "separable blobs should score high, got {}", fitness);
    assert!(fitness <= 1.0);
}

#[test]
fn invalid_configuration_is_contained_as_sentinel() {
    let evaluator = cv_evaluator(5);

    // 60 samples total; k = 500 cannot fit
    let outcome = evaluator.evaluate(&knn_config(500, "euclidean", "uniform"));
    assert!(outcome.is_failed());
    assert_eq!(outcome.fitness(), SENTINEL_FITNESS);

    let outcome = evaluator.evaluate(&knn_config(3, "cosine", "uniform"));
    assert!(outcome.is_failed());
    assert_eq!(outcome.fitness(), SENTINEL_FITNESS);

    let mut params = knn_config(3, "euclidean", "uniform");
    params.insert("max_depth".to_string(), ParamValue::Int(4));
    let outcome = evaluator.evaluate(&params);
    assert!(outcome.is_failed());
    assert_eq!(outcome.fitness(), SENTINEL_FITNESS);
}

#[test]
fn failures_are_counted() {
    let evaluator = cv_evaluator(5);
    assert_eq!(evaluator.fit_failures(), 0);

    evaluator.evaluate(&knn_config(500, "euclidean", "uniform"));
    evaluator.evaluate(&knn_config(3, "euclidean", "uniform"));
    evaluator.evaluate(&knn_config(999, "euclidean", "uniform"));

    assert_eq!(evaluator.fit_failures(), 2);
}

#[test]
fn training_score_mode_scores_on_the_training_set() {
    let evaluator = FitnessEvaluator::new(
        Arc::new(KnnClassifier::new()),
        Arc::new(Dataset::synthetic_blobs(30, 3, 11)),
        EvaluationMode::TrainingScore,
    );

    // 1-NN on its own training set is trivially perfect, which is
    // exactly why this mode is a distinct, more optimistic path.
    let outcome = evaluator.evaluate(&knn_config(1, "euclidean", "uniform"));
    assert_eq!(outcome.fitness(), 1.0);
}

#[test]
fn evaluation_is_repeatable() {
    let evaluator = cv_evaluator(4);
    let params = knn_config(5, "manhattan", "distance");

    let first = evaluator.evaluate(&params).fitness();
    for _ in 0..5 {
        assert_eq!(evaluator.evaluate(&params).fitness(), first);
    }
}

#[test]
fn kfold_covers_every_sample_exactly_once() {
    let plan = KFoldPlan::new(4).unwrap();
    let splits = plan.split(22).unwrap();
    assert_eq!(splits.len(), 4);

    let mut seen = vec![0usize; 22];
    for split in &splits {
        assert_eq!(split.train.len() + split.test.len(), 22);
        for &idx in &split.test {
            seen[idx] += 1;
        }
        for &idx in &split.train {
            assert!(!split.test.contains(&idx));
        }
    }
    assert!(seen.iter().all(|&count| count == 1));
}

#[test]
fn kfold_rejects_degenerate_plans() {
    assert!(KFoldPlan::new(1).is_err());
    assert!(KFoldPlan::new(5).unwrap().split(3).is_err());
}

#[test]
fn dataset_rejects_inconsistent_shapes() {
    assert!(Dataset::new(vec![vec![1.0, 2.0]], vec![1.0, 2.0]).is_err());
    assert!(Dataset::new(vec![vec![1.0, 2.0], vec![1.0]], vec![0.0, 1.0]).is_err());
    assert!(Dataset::new(vec![vec![1.0], vec![2.0]], vec![0.0, 1.0]).is_ok());
}
