//! Top-N Recommendations
//!
//! This example generates a synthetic rating corpus, trains a model on it and
//! recommends the best unseen items for one user, comparing the weighted and
//! basic (uniform) Slope One schemes.

use slope_one::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Top-N Recommendations ===\n");

    let config = SyntheticConfig::new()
        .with_users(500)
        .with_items(60)
        .with_ratings_per_user(12)
        .with_seed(7);
    let corpus = SyntheticRatings::generate(&config)?;
    let (query, training) = corpus
        .users()
        .split_first()
        .ok_or("synthetic corpus is empty")?;

    let model = DifferenceModel::from_users(training);
    println!("{}\n", ModelSummary::from_model(&model).summary());

    for weighting in [Weighting::CoOccurrence, Weighting::Uniform] {
        let predictor =
            Predictor::with_config(&model, PredictorConfig::new().with_weighting(weighting))?;

        println!("{:?} weighting:", weighting);
        for rec in predictor.recommend(query, 5) {
            let truth = corpus.item_quality(rec.item).unwrap_or(f64::NAN);
            println!(
                "  item {:>3}: predicted {:.2} (latent quality {:.2})",
                rec.item, rec.rating, truth
            );
        }
        println!();
    }

    Ok(())
}
