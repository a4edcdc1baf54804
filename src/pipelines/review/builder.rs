use std::path::PathBuf;
use std::sync::Arc;

use super::pipeline::ReviewPipeline;
use crate::core::{ModelCache, PipelineConfig};
use crate::error::{Result, SentimentError};
use crate::history::HistoryStore;
use crate::models::{BertStarOptions, BertStarRatingModel, TfidfLogisticModel};
use crate::pipelines::aspects::{
    AspectExtractor, AspectSentimentClassifier, AspectSentimentModel, AspectVocabulary,
};
use crate::pipelines::language::{
    GoogleTranslator, LanguageDetector, LanguageNormalizer, Translator, WhatlangDetector,
};
use crate::pipelines::overall::{OverallSentimentClassifier, StarRatingModel};
use crate::pipelines::utils::{build_cache_key, DeviceRequest};

enum AspectSource {
    Model(Arc<dyn AspectSentimentModel>),
    File(PathBuf),
}

enum StarSource {
    Model(Arc<dyn StarRatingModel>),
    Bert(BertStarOptions),
}

/// Assembles a [`ReviewPipeline`].
///
/// An aspect model is required. Without a star-rating model the pipeline
/// still analyses reviews, but [`ReviewPipeline::quick_verdict`] fails for
/// texts that match no keyword.
#[derive(Default)]
pub struct ReviewPipelineBuilder {
    config: PipelineConfig,
    device_request: DeviceRequest,
    cache: Option<ModelCache>,
    aspect_model: Option<AspectSource>,
    star_model: Option<StarSource>,
    detector: Option<Arc<dyn LanguageDetector>>,
    translator: Option<Arc<dyn Translator>>,
    history: Option<Arc<dyn HistoryStore>>,
}

impl ReviewPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    pub fn cuda_device(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    pub fn device(mut self, device: candle_core::Device) -> Self {
        self.device_request = DeviceRequest::Explicit(device);
        self
    }

    /// Share loaded models with other pipelines built from the same cache.
    pub fn cache(mut self, cache: ModelCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn aspect_model(mut self, model: Arc<dyn AspectSentimentModel>) -> Self {
        self.aspect_model = Some(AspectSource::Model(model));
        self
    }

    /// Load a TF-IDF + logistic regression artifact from JSON.
    pub fn aspect_model_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.aspect_model = Some(AspectSource::File(path.into()));
        self
    }

    pub fn star_model(mut self, model: Arc<dyn StarRatingModel>) -> Self {
        self.star_model = Some(StarSource::Model(model));
        self
    }

    /// Fetch a BERT star-rating checkpoint from the Hugging Face hub.
    pub fn bert_star_model(mut self, options: BertStarOptions) -> Self {
        self.star_model = Some(StarSource::Bert(options));
        self
    }

    pub fn detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn history(mut self, history: Arc<dyn HistoryStore>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn build(self) -> Result<ReviewPipeline> {
        let config = self.config;
        let cache = self.cache.unwrap_or_default();

        let aspect_model: Arc<dyn AspectSentimentModel> = match self.aspect_model {
            Some(AspectSource::Model(model)) => model,
            Some(AspectSource::File(path)) => {
                let key = format!("tfidf-{}", path.display());
                let model = cache.get_or_create::<TfidfLogisticModel, _>(&key, || {
                    TfidfLogisticModel::from_json_file(&path)
                })?;
                model as Arc<dyn AspectSentimentModel>
            }
            None => {
                return Err(SentimentError::ModelNotFound(
                    "no aspect sentiment model configured".into(),
                ))
            }
        };

        let star_model: Option<Arc<dyn StarRatingModel>> = match self.star_model {
            Some(StarSource::Model(model)) => Some(model),
            Some(StarSource::Bert(options)) => {
                let device = self.device_request.resolve()?;
                let options = BertStarOptions {
                    max_sequence_length: options
                        .max_sequence_length
                        .min(config.max_sequence_length),
                    ..options
                };
                let key = build_cache_key(&options, &device);
                let model = cache.get_or_create::<BertStarRatingModel, _>(&key, || {
                    BertStarRatingModel::new(options, device)
                })?;
                Some(model as Arc<dyn StarRatingModel>)
            }
            None => None,
        };

        let detector: Arc<dyn LanguageDetector> = match self.detector {
            Some(detector) => detector,
            None => Arc::new(
                WhatlangDetector::new().require_reliable(config.require_reliable_detection),
            ) as Arc<dyn LanguageDetector>,
        };
        let translator: Arc<dyn Translator> = match self.translator {
            Some(translator) => translator,
            None => Arc::new(GoogleTranslator::new(
                config.translation_endpoint.clone(),
                config.translation_timeout(),
            )?) as Arc<dyn Translator>,
        };

        let vocabulary = AspectVocabulary::new(&config.aspects);
        if vocabulary.is_empty() {
            tracing::warn!("no aspects configured; every review will aggregate to positive");
        }

        Ok(ReviewPipeline {
            normalizer: LanguageNormalizer::new(
                detector,
                translator,
                config.target_language.clone(),
            ),
            extractor: AspectExtractor::new(vocabulary),
            aspect_classifier: AspectSentimentClassifier::new(
                aspect_model,
                config.aspect_fallback_label,
            ),
            overall_classifier: OverallSentimentClassifier::new(
                &config.positive_keywords,
                &config.negative_keywords,
                star_model,
            ),
            batch_mode: config.batch_mode,
            history: self.history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_aspect_model_is_an_error() {
        let err = ReviewPipelineBuilder::new()
            .translator(Arc::new(crate::pipelines::language::NoopTranslator))
            .build()
            .err();
        assert!(matches!(err, Some(SentimentError::ModelNotFound(_))));
    }

    #[test]
    fn artifact_file_is_loaded_once_per_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aspect_model.json");
        std::fs::write(
            &path,
            r#"{"vocabulary": {"bad": 0, "good": 1}, "idf": [1.0, 1.0],
                "classes": ["negative", "positive"],
                "coef": [[-1.0, 1.0]], "intercept": [0.0]}"#,
        )
        .unwrap();

        let cache = ModelCache::new();
        for _ in 0..2 {
            ReviewPipelineBuilder::new()
                .cache(cache.clone())
                .aspect_model_file(&path)
                .translator(Arc::new(crate::pipelines::language::NoopTranslator))
                .build()
                .unwrap();
        }
        assert_eq!(cache.len().unwrap(), 1);
    }
}
