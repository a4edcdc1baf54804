// Integration tests for batch analysis in strict and partial mode

mod common;

use std::sync::Arc;

use common::*;
use review_sentiment::{
    BatchMode, BatchRow, HistoryStore, MemoryHistory, PipelineConfig, SentimentError,
    SentimentLabel,
};

fn partial_config() -> PipelineConfig {
    PipelineConfig {
        batch_mode: BatchMode::Partial,
        ..PipelineConfig::default()
    }
}

#[test]
fn strict_mode_rejects_the_whole_batch() -> anyhow::Result<()> {
    let pipeline = english_builder().build()?;
    assert_eq!(pipeline.batch_mode(), BatchMode::Strict);

    let rows = vec![BatchRow::new("good camera"), BatchRow::new("")];
    let err = pipeline.run_batch(&rows).unwrap_err();

    match &err {
        SentimentError::InvalidRows(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].row, 2);
            assert_eq!(errors[0].message, "Review text missing");
        }
        other => panic!("expected InvalidRows, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Invalid rows: Row 2: Review text missing");
    Ok(())
}

#[test]
fn strict_mode_accepts_a_clean_batch() -> anyhow::Result<()> {
    let pipeline = english_builder().build()?;
    let rows = vec![
        BatchRow::new("The battery is bad."),
        BatchRow::new("Great screen."),
        BatchRow::new("Bad camera. Bad price."),
    ];

    let output = pipeline.run_batch(&rows)?;

    assert!(output.errors.is_empty());
    let numbers: Vec<_> = output.results.iter().map(|r| r.row).collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(output.summary.total_reviews, 3);
    assert_eq!(output.summary.positive, 1);
    assert_eq!(output.summary.negative, 2);
    Ok(())
}

#[test]
fn partial_mode_returns_results_and_errors() -> anyhow::Result<()> {
    let pipeline = english_builder().config(partial_config()).build()?;
    let rows = vec![
        BatchRow::new("good camera"),
        BatchRow::default(),
        BatchRow {
            review_text: None,
            text: Some("The screen is bad.".into()),
        },
        BatchRow::new(""),
    ];

    let output = pipeline.run_batch(&rows)?;

    let rows_ok: Vec<_> = output.results.iter().map(|r| r.row).collect();
    let rows_bad: Vec<_> = output.errors.iter().map(|e| e.row).collect();
    assert_eq!(rows_ok, [1, 3]);
    assert_eq!(rows_bad, [2, 4]);
    assert_eq!(output.errors[0].to_string(), "Row 2: Review text missing");

    assert_eq!(output.results[0].result.overall, SentimentLabel::Positive);
    assert_eq!(output.results[1].result.overall, SentimentLabel::Negative);
    assert_eq!(output.results[1].aspects_summary(), "screen: negative");
    assert_eq!(output.summary.total_reviews, 2);
    Ok(())
}

#[test]
fn aspects_summary_lists_every_aspect() -> anyhow::Result<()> {
    let pipeline = english_builder().build()?;
    let output = pipeline.run_batch(&[BatchRow::new("Bad battery. Great screen.")])?;

    assert_eq!(
        output.results[0].aspects_summary(),
        "battery: negative; screen: positive"
    );
    Ok(())
}

#[test]
fn empty_batch_has_zero_totals() -> anyhow::Result<()> {
    let pipeline = english_builder().build()?;
    let output = pipeline.run_batch(&[])?;

    assert!(output.results.is_empty());
    assert_eq!(output.summary.total_reviews, 0);
    Ok(())
}

#[test]
fn model_error_aborts_partial_batch() -> anyhow::Result<()> {
    let pipeline = english_builder()
        .config(partial_config())
        .aspect_model(Arc::new(FailingAspectModel))
        .build()?;

    let err = pipeline
        .run_batch(&[BatchRow::new("no aspects here"), BatchRow::new("bad camera")])
        .unwrap_err();
    assert!(matches!(err, SentimentError::Inference(_)));
    Ok(())
}

#[test]
fn batch_for_user_records_each_valid_row() -> anyhow::Result<()> {
    let history = Arc::new(MemoryHistory::new());
    let pipeline = english_builder()
        .config(partial_config())
        .history(history.clone())
        .build()?;

    let rows = vec![BatchRow::new("Bad battery."), BatchRow::default(), BatchRow::new("Good price.")];
    pipeline.run_batch_for("ana", &rows)?;

    let recent = history.recent("ana", 5)?;
    assert_eq!(recent.len(), 2);
    assert!(history.recent("bo", 5)?.is_empty());
    Ok(())
}
