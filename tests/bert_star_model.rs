// Downloads the multilingual star-rating checkpoint from the Hugging Face hub.
// Run with `--features integration`.
#![cfg(feature = "integration")]

use review_sentiment::models::{BertStarOptions, BertStarRatingModel};
use review_sentiment::pipelines::overall::{OverallSentimentClassifier, StarRatingModel};
use review_sentiment::{FineSentiment, VerdictTier};
use std::sync::Arc;

#[test]
fn star_distribution_covers_five_classes() -> anyhow::Result<()> {
    let model = BertStarRatingModel::new(BertStarOptions::default(), candle_core::Device::Cpu)?;
    assert_eq!(model.labels().len(), 5);

    let distribution = model.star_distribution("Absolutely terrible, it broke after a day.")?;
    assert_eq!(distribution.len(), 5);
    assert!((distribution.iter().sum::<f32>() - 1.0).abs() < 1e-3);
    Ok(())
}

#[test]
fn model_tier_separates_extremes() -> anyhow::Result<()> {
    let model = BertStarRatingModel::new(BertStarOptions::default(), candle_core::Device::Cpu)?;
    let classifier = OverallSentimentClassifier::new(&[], &[], Some(Arc::new(model)));

    let low = classifier.classify("Es una basura, no funciona y nadie responde.")?;
    let high = classifier.classify("Ce téléphone est génial, je le recommande à tous.")?;

    assert_eq!(low.tier, VerdictTier::Model);
    assert!(matches!(
        low.sentiment,
        FineSentiment::VeryNegative | FineSentiment::Negative
    ));
    assert!(matches!(
        high.sentiment,
        FineSentiment::VeryPositive | FineSentiment::Positive
    ));
    Ok(())
}
