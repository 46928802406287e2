use anyhow::Context;
use evotune::config::{AppConfig, ConfigManager};
use evotune::engines::evaluation::Dataset;
use evotune::models::KnnClassifier;
use evotune::space::{ParamDomain, ParamSpace};
use evotune::tuner::HyperSearch;
use std::sync::Arc;

/// Demo run: tune a kNN classifier on synthetic two-class blobs.
/// Optional argument: path to a TOML/JSON config file.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let manager = ConfigManager::new();
            manager
                .load_from_file(&path)
                .with_context(|| format!("loading config from {}", path))?;
            manager.get()
        }
        None => AppConfig::default(),
    };

    let mut space = ParamSpace::new();
    space.add(
        "n_neighbors",
        ParamDomain::DiscreteInt(vec![1, 3, 5, 7, 9, 15]),
    )?;
    space.add(
        "metric",
        ParamDomain::Categorical(vec![
            "euclidean".to_string(),
            "manhattan".to_string(),
            "chebyshev".to_string(),
        ]),
    )?;
    space.add(
        "weighting",
        ParamDomain::Categorical(vec!["uniform".to_string(), "distance".to_string()]),
    )?;

    let dataset = Dataset::synthetic_blobs(60, 4, 7);

    let search = HyperSearch::new(Arc::new(KnnClassifier::new()), space, dataset, config)?;
    let result = search.fit()?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
