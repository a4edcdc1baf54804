use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use tokenizers::{Tokenizer, TruncationParams};

use super::bert::{BertForSequenceClassification, Config};
use crate::core::ModelOptions;
use crate::error::{Result, SentimentError};
use crate::loaders::{HfLoader, TokenizerLoader, WeightsFile, WeightsLoader};
use crate::pipelines::overall::StarRatingModel;

/// Where to fetch the star-rating checkpoint from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BertStarOptions {
    /// Hugging Face repository of a BERT checkpoint with five star classes.
    pub model_id: String,
    pub uncased: bool,
    pub max_sequence_length: usize,
}

impl Default for BertStarOptions {
    fn default() -> Self {
        Self {
            model_id: "nlptown/bert-base-multilingual-uncased-sentiment".to_string(),
            uncased: true,
            max_sequence_length: 512,
        }
    }
}

impl ModelOptions for BertStarOptions {
    fn cache_key(&self) -> String {
        format!("{}-{}", self.model_id, self.max_sequence_length)
    }
}

/// Multilingual BERT fine-tuned to predict 1..=5 star review ratings.
pub struct BertStarRatingModel {
    model: BertForSequenceClassification,
    tokenizer: Tokenizer,
    labels: Vec<String>,
    device: Device,
}

impl BertStarRatingModel {
    pub fn new(options: BertStarOptions, device: Device) -> Result<Self> {
        let config_path = HfLoader::new(&options.model_id, "config.json").load()?;
        let config_content = std::fs::read_to_string(&config_path).map_err(|e| {
            SentimentError::ModelFormat(format!(
                "Failed to read config file {config_path:?}: {e}"
            ))
        })?;
        let config: Config = serde_json::from_str(&config_content).map_err(|e| {
            SentimentError::ModelFormat(format!("Failed to parse model config: {e}"))
        })?;
        if config.num_labels() != 5 {
            return Err(SentimentError::ModelFormat(format!(
                "{} has {} labels, expected 5 star classes",
                options.model_id,
                config.num_labels()
            )));
        }

        let dtype = DType::F32;
        let vb = match WeightsLoader::new(&options.model_id).load()? {
            WeightsFile::Safetensors(path) => unsafe {
                VarBuilder::from_mmaped_safetensors(&[path], dtype, &device)?
            },
            WeightsFile::Pytorch(path) => VarBuilder::from_pth(&path, dtype, &device)?,
        };
        let model = BertForSequenceClassification::load(vb, &config)?;

        let mut tokenizer = TokenizerLoader::new(&options.model_id, options.uncased).load()?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: options.max_sequence_length,
                ..Default::default()
            }))
            .map_err(|e| SentimentError::Tokenization(e.to_string()))?;
        // Single sequences only; padding would just waste compute.
        tokenizer.with_padding(None);

        tracing::info!(model = %options.model_id, device = ?device.location(), "star-rating model loaded");

        Ok(Self {
            model,
            tokenizer,
            labels: config.labels(),
            device,
        })
    }

    /// Class labels from the checkpoint config, lowest star first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl StarRatingModel for BertStarRatingModel {
    fn star_distribution(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| SentimentError::Tokenization(e.to_string()))?;

        self.model
            .predict_proba(encoding.get_ids(), &self.device)
            .map_err(|e| SentimentError::Inference(e.to_string()))
    }
}
