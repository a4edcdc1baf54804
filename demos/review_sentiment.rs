use std::sync::Arc;

use anyhow::Result;
use review_sentiment::models::TfidfLogisticModel;
use review_sentiment::pipelines::language::NoopTranslator;
use review_sentiment::{BatchMode, BatchRow, PipelineConfig, ReviewPipelineBuilder};

// A toy aspect model; real deployments export one from their training run.
const ASPECT_MODEL: &str = r#"{
    "vocabulary": {"bad": 0, "great": 1, "slow": 2, "good": 3, "broken": 4},
    "idf": [1.4, 1.2, 1.6, 1.1, 1.8],
    "classes": ["negative", "positive"],
    "coef": [[-2.5, 2.0, -1.5, 1.5, -2.0]],
    "intercept": [0.0]
}"#;

fn main() -> Result<()> {
    println!("Building pipeline...");

    let config = PipelineConfig {
        batch_mode: BatchMode::Partial,
        ..PipelineConfig::default()
    };
    let pipeline = ReviewPipelineBuilder::new()
        .config(config)
        .aspect_model(Arc::new(TfidfLogisticModel::from_json_str(ASPECT_MODEL)?))
        // Offline: non-English reviews are analysed untranslated.
        .translator(Arc::new(NoopTranslator))
        .cpu()
        .build()?;

    println!("Pipeline built successfully.");

    let text = "The battery is bad. The screen is great! Delivery was slow.";
    let result = pipeline.run(text)?;

    println!("\n=== Review Analysis ===");
    println!("Text: \"{}\"", text);
    println!("Language: {} ({:?})", result.detected_language, result.normalization);
    for (aspect, label) in &result.aspects {
        println!("  {aspect}: {label}");
    }
    println!("Overall: {}", result.overall);

    let verdict = pipeline.quick_verdict(text)?;
    println!("Quick verdict: {} via {:?}", verdict.sentiment, verdict.tier);

    let rows = vec![
        BatchRow::new("Good camera, but the price is bad."),
        BatchRow::default(),
        BatchRow::new("Screen arrived broken."),
    ];
    let output = pipeline.run_batch(&rows)?;

    println!("\n=== Batch ===");
    for row in &output.results {
        println!("Row {}: {} [{}]", row.row, row.result.overall, row.aspects_summary());
    }
    for error in &output.errors {
        println!("{error}");
    }
    println!(
        "Total: {}, positive: {}, negative: {}",
        output.summary.total_reviews, output.summary.positive, output.summary.negative
    );

    Ok(())
}
