//! Movie Rating Prediction
//!
//! This example trains a Slope One model on three users' movie ratings and
//! predicts how a fourth user would rate the movies they have not seen yet.

use slope_one::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Slope One Movie Ratings ===\n");

    // Each user rated a handful of movies, keyed by movie id
    let users = vec![
        user_ratings([(2005u64, 2.4), (5513, 1.3), (13035, 2.0)]),
        user_ratings([(5513, 4.0), (359602, 5.0), (13035, 1.5), (29074, 4.0)]),
        user_ratings([(29074, 4.3), (359602, 2.5), (2005, 5.0)]),
    ];

    let mut model = DifferenceModel::new();
    model.train(&users);

    println!("{}\n", ModelSummary::from_model(&model).summary());

    // The user we want predictions for
    let query = user_ratings([(2005, 2.0), (29074, 3.2)]);
    let predictor = Predictor::with_config(&model, PredictorConfig::default())?;

    let mut predictions: Vec<(u64, f64)> = predictor.predict(&query).into_iter().collect();
    predictions.sort_by_key(|(item, _)| *item);

    println!("Predicted ratings:");
    for (item, rating) in predictions {
        println!("  movie {:>6}: {:.1}", item, rating);
    }

    Ok(())
}
