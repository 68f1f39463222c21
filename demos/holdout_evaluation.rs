//! Holdout Evaluation
//!
//! This example measures prediction error on held-out users for several noise
//! levels and minimum-support thresholds. Run with `RUST_LOG=debug` to see the
//! training and evaluation logs.

use slope_one::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Holdout Evaluation ===\n");

    let eval_config = EvaluationConfig::new().with_test_fraction(0.2).with_seed(42);

    for noise in [0.0, 0.3, 0.8] {
        let corpus = SyntheticRatings::generate(&SyntheticConfig::new().with_noise(noise))?;

        for min_support in [1, 3] {
            let predictor_config = PredictorConfig::new().with_min_support(min_support);
            let report = evaluate_holdout(corpus.users(), &predictor_config, &eval_config)?;

            println!("noise = {:.1}, min_support = {}", noise, min_support);
            println!("{}\n", report.summary());
        }
    }

    Ok(())
}
