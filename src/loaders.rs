//! Model and tokenizer loading utilities for Hugging Face Hub integration.
//!
//! ## Main Types
//!
//! - [`HfLoader`] - Fetches a single file from a hub repository (cached locally by hf-hub)
//! - [`TokenizerLoader`] - Loads `tokenizer.json`, or rebuilds a BERT WordPiece tokenizer from `vocab.txt`
//! - [`WeightsLoader`] - Locates model weights, preferring safetensors over `pytorch_model.bin`

use hf_hub::api::sync::Api as HfApi;
use std::path::PathBuf;
use tokenizers::models::wordpiece::WordPiece;
use tokenizers::normalizers::BertNormalizer;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::processors::bert::BertProcessing;
use tokenizers::Tokenizer;

use crate::error::{Result, SentimentError};

#[derive(Debug, Clone)]
pub struct HfLoader {
    pub repo: String,
    pub filename: String,
}

impl HfLoader {
    pub fn new(repo: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            filename: filename.into(),
        }
    }

    pub fn load(&self) -> Result<PathBuf> {
        let hf_api = HfApi::new()?;
        let path = hf_api.model(self.repo.clone()).get(&self.filename)?;
        tracing::debug!(repo = %self.repo, file = %self.filename, "hub file ready");
        Ok(path)
    }
}

#[derive(Debug, Clone)]
pub struct TokenizerLoader {
    pub repo: String,
    /// Lower-case input when rebuilding from `vocab.txt` (uncased checkpoints).
    pub lowercase: bool,
}

impl TokenizerLoader {
    pub fn new(repo: &str, lowercase: bool) -> Self {
        Self {
            repo: repo.into(),
            lowercase,
        }
    }

    pub fn load(&self) -> Result<Tokenizer> {
        match HfLoader::new(&self.repo, "tokenizer.json").load() {
            Ok(path) => Tokenizer::from_file(path)
                .map_err(|e| SentimentError::TokenizerNotFound(e.to_string())),
            Err(e) => {
                tracing::debug!(error = %e, repo = %self.repo, "no tokenizer.json, rebuilding from vocab.txt");
                let vocab = HfLoader::new(&self.repo, "vocab.txt").load()?;
                wordpiece_tokenizer(vocab, self.lowercase)
            }
        }
    }
}

/// Standard BERT tokenization: BERT normalizer, whitespace/punctuation
/// pre-tokenizer, WordPiece model and `[CLS] ... [SEP]` post-processing.
fn wordpiece_tokenizer(vocab: PathBuf, lowercase: bool) -> Result<Tokenizer> {
    let wordpiece = WordPiece::from_file(&vocab.to_string_lossy())
        .unk_token("[UNK]".to_string())
        .build()
        .map_err(|e| SentimentError::TokenizerNotFound(e.to_string()))?;

    let mut tokenizer = Tokenizer::new(wordpiece);
    let special = |token: &str| {
        tokenizer.token_to_id(token).ok_or_else(|| {
            SentimentError::TokenizerNotFound(format!("{token} missing from vocab.txt"))
        })
    };
    let cls = special("[CLS]")?;
    let sep = special("[SEP]")?;

    tokenizer
        .with_normalizer(Some(BertNormalizer::new(true, true, None, lowercase)))
        .with_pre_tokenizer(Some(BertPreTokenizer))
        .with_post_processor(Some(BertProcessing::new(
            ("[SEP]".to_string(), sep),
            ("[CLS]".to_string(), cls),
        )));
    Ok(tokenizer)
}

/// Model weight file and its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightsFile {
    Safetensors(PathBuf),
    Pytorch(PathBuf),
}

#[derive(Debug, Clone)]
pub struct WeightsLoader {
    pub repo: String,
}

impl WeightsLoader {
    pub fn new(repo: &str) -> Self {
        Self { repo: repo.into() }
    }

    pub fn load(&self) -> Result<WeightsFile> {
        match HfLoader::new(&self.repo, "model.safetensors").load() {
            Ok(path) => Ok(WeightsFile::Safetensors(path)),
            Err(_) => match HfLoader::new(&self.repo, "pytorch_model.bin").load() {
                Ok(path) => Ok(WeightsFile::Pytorch(path)),
                Err(e) => Err(SentimentError::ModelNotFound(format!(
                    "Model weights not found in repo {}. Expected `model.safetensors` or `pytorch_model.bin`. Error: {e}",
                    self.repo
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab_file(dir: &tempfile::TempDir, tokens: &[&str]) -> PathBuf {
        let path = dir.path().join("vocab.txt");
        std::fs::write(&path, tokens.join("\n")).unwrap();
        path
    }

    #[test]
    fn rebuilt_tokenizer_wraps_wordpieces_in_special_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let vocab = vocab_file(
            &dir,
            &["[PAD]", "[UNK]", "[CLS]", "[SEP]", "good", "cam", "##era"],
        );

        let tokenizer = wordpiece_tokenizer(vocab, true).unwrap();
        let encoding = tokenizer.encode("Good Camera", true).unwrap();

        assert_eq!(
            encoding.get_tokens(),
            ["[CLS]", "good", "cam", "##era", "[SEP]"]
        );
        assert_eq!(encoding.get_ids(), [2, 4, 5, 6, 3]);
    }

    #[test]
    fn unknown_words_map_to_unk() {
        let dir = tempfile::tempdir().unwrap();
        let vocab = vocab_file(&dir, &["[PAD]", "[UNK]", "[CLS]", "[SEP]", "good"]);

        let tokenizer = wordpiece_tokenizer(vocab, true).unwrap();
        let encoding = tokenizer.encode("good zebra", true).unwrap();
        assert_eq!(encoding.get_tokens(), ["[CLS]", "good", "[UNK]", "[SEP]"]);
    }

    #[test]
    fn vocab_without_special_tokens_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let vocab = vocab_file(&dir, &["[PAD]", "[UNK]", "good"]);

        let err = wordpiece_tokenizer(vocab, true).unwrap_err();
        assert!(matches!(err, SentimentError::TokenizerNotFound(_)));
    }
}
