//! BERT encoder with a sequence classification head.
//!
//! Follows the original BERT layout (learned absolute positions, post-norm
//! residual blocks, tanh pooler over `[CLS]`) and the Hugging Face weight
//! names (`bert.embeddings.*`, `bert.encoder.layer.N.*`, `bert.pooler.dense`,
//! `classifier`).

use candle_core::{DType, Device, IndexOp, Result, Tensor, D};
use candle_nn::{embedding, linear, ops::softmax, Embedding, LayerNorm, Linear, VarBuilder};
use serde::Deserialize;
use std::collections::HashMap;

const MIN_VALUE_F64: f64 = f32::MIN as f64;

fn default_layer_norm_eps() -> f64 {
    1e-12
}

fn default_type_vocab_size() -> usize {
    2
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub vocab_size: usize,
    pub hidden_size: usize,
    pub num_hidden_layers: usize,
    pub num_attention_heads: usize,
    pub intermediate_size: usize,
    pub max_position_embeddings: usize,
    #[serde(default = "default_type_vocab_size")]
    pub type_vocab_size: usize,
    #[serde(default = "default_layer_norm_eps")]
    pub layer_norm_eps: f64,
    #[serde(default)]
    pub id2label: HashMap<String, String>,
}

impl Config {
    pub fn num_labels(&self) -> usize {
        self.id2label.len().max(2)
    }

    /// Labels ordered by class index.
    pub fn labels(&self) -> Vec<String> {
        (0..self.num_labels())
            .map(|i| {
                self.id2label
                    .get(&i.to_string())
                    .cloned()
                    .unwrap_or_else(|| format!("LABEL_{i}"))
            })
            .collect()
    }
}

/// Older checkpoints name layer norm parameters `gamma`/`beta`.
fn bert_layer_norm(size: usize, eps: f64, vb: VarBuilder) -> Result<LayerNorm> {
    let (weight, bias) = match (vb.get(size, "weight"), vb.get(size, "bias")) {
        (Ok(weight), Ok(bias)) => (weight, bias),
        _ => (vb.get(size, "gamma")?, vb.get(size, "beta")?),
    };
    Ok(LayerNorm::new(weight, bias, eps))
}

#[derive(Debug, Clone)]
struct Embeddings {
    word: Embedding,
    position: Embedding,
    token_type: Embedding,
    norm: LayerNorm,
}

impl Embeddings {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        Ok(Self {
            word: embedding(config.vocab_size, config.hidden_size, vb.pp("word_embeddings"))?,
            position: embedding(
                config.max_position_embeddings,
                config.hidden_size,
                vb.pp("position_embeddings"),
            )?,
            token_type: embedding(
                config.type_vocab_size,
                config.hidden_size,
                vb.pp("token_type_embeddings"),
            )?,
            norm: bert_layer_norm(config.hidden_size, config.layer_norm_eps, vb.pp("LayerNorm"))?,
        })
    }

    fn forward(&self, input_ids: &Tensor, token_type_ids: &Tensor) -> Result<Tensor> {
        let seq_len = input_ids.dim(1)?;
        let positions = Tensor::arange(0u32, seq_len as u32, input_ids.device())?.unsqueeze(0)?;

        let embeddings = input_ids
            .apply(&self.word)?
            .broadcast_add(&token_type_ids.apply(&self.token_type)?)?
            .broadcast_add(&positions.apply(&self.position)?)?;
        embeddings.apply(&self.norm)
    }
}

#[derive(Debug, Clone)]
struct SelfAttention {
    query: Linear,
    key: Linear,
    value: Linear,
    output: Linear,
    norm: LayerNorm,
    num_attention_heads: usize,
    attention_head_size: usize,
}

impl SelfAttention {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        let hidden = config.hidden_size;
        let self_vb = vb.pp("self");
        let output_vb = vb.pp("output");
        Ok(Self {
            query: linear(hidden, hidden, self_vb.pp("query"))?,
            key: linear(hidden, hidden, self_vb.pp("key"))?,
            value: linear(hidden, hidden, self_vb.pp("value"))?,
            output: linear(hidden, hidden, output_vb.pp("dense"))?,
            norm: bert_layer_norm(hidden, config.layer_norm_eps, output_vb.pp("LayerNorm"))?,
            num_attention_heads: config.num_attention_heads,
            attention_head_size: hidden / config.num_attention_heads,
        })
    }

    fn split_heads(&self, xs: &Tensor) -> Result<Tensor> {
        let (batch, seq_len, _) = xs.dims3()?;
        xs.reshape((
            batch,
            seq_len,
            self.num_attention_heads,
            self.attention_head_size,
        ))?
        .transpose(1, 2)?
        .contiguous()
    }

    fn forward(&self, hidden_states: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
        let (batch, seq_len, hidden_size) = hidden_states.dims3()?;

        let q = self.split_heads(&hidden_states.apply(&self.query)?)?;
        let k = self.split_heads(&hidden_states.apply(&self.key)?)?;
        let v = self.split_heads(&hidden_states.apply(&self.value)?)?;

        let scale = (self.attention_head_size as f64).powf(-0.5);
        let scores = (q.matmul(&k.t()?)? * scale)?.broadcast_add(attention_mask)?;
        let probs = softmax(&scores, D::Minus1)?;

        let context = probs
            .matmul(&v)?
            .transpose(1, 2)?
            .reshape((batch, seq_len, hidden_size))?;

        (context.apply(&self.output)? + hidden_states)?.apply(&self.norm)
    }
}

#[derive(Debug, Clone)]
struct Layer {
    attention: SelfAttention,
    intermediate: Linear,
    output: Linear,
    norm: LayerNorm,
}

impl Layer {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        Ok(Self {
            attention: SelfAttention::load(vb.pp("attention"), config)?,
            intermediate: linear(
                config.hidden_size,
                config.intermediate_size,
                vb.pp("intermediate.dense"),
            )?,
            output: linear(
                config.intermediate_size,
                config.hidden_size,
                vb.pp("output.dense"),
            )?,
            norm: bert_layer_norm(
                config.hidden_size,
                config.layer_norm_eps,
                vb.pp("output.LayerNorm"),
            )?,
        })
    }

    fn forward(&self, hidden_states: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
        let attended = self.attention.forward(hidden_states, attention_mask)?;
        let ffn = attended
            .apply(&self.intermediate)?
            .gelu_erf()?
            .apply(&self.output)?;
        (ffn + attended)?.apply(&self.norm)
    }
}

/// BERT with pooler and a linear classification head.
#[derive(Debug, Clone)]
pub struct BertForSequenceClassification {
    embeddings: Embeddings,
    layers: Vec<Layer>,
    pooler: Linear,
    classifier: Linear,
    dtype: DType,
}

impl BertForSequenceClassification {
    pub fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        let bert = vb.pp("bert");
        let embeddings = Embeddings::load(bert.pp("embeddings"), config)?;

        let mut layers = Vec::with_capacity(config.num_hidden_layers);
        for layer_idx in 0..config.num_hidden_layers {
            layers.push(Layer::load(
                bert.pp(format!("encoder.layer.{layer_idx}")),
                config,
            )?);
        }

        let pooler = linear(config.hidden_size, config.hidden_size, bert.pp("pooler.dense"))?;
        let classifier = linear(config.hidden_size, config.num_labels(), vb.pp("classifier"))?;

        Ok(Self {
            embeddings,
            layers,
            pooler,
            classifier,
            dtype: vb.dtype(),
        })
    }

    /// Additive mask: 0 for real tokens, a large negative value for padding.
    fn extended_attention_mask(&self, mask: &Tensor) -> Result<Tensor> {
        let mask = mask.unsqueeze(1)?.unsqueeze(2)?.to_dtype(self.dtype)?;
        ((1.0 - mask)? * MIN_VALUE_F64)?.to_dtype(self.dtype)
    }

    /// Classification logits with shape `(batch_size, num_labels)`.
    ///
    /// # Arguments
    /// * `input_ids` - Token IDs with shape `(batch_size, sequence_length)`
    /// * `attention_mask` - 1 for tokens to attend to, 0 for padding
    pub fn forward(&self, input_ids: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
        let token_type_ids = input_ids.zeros_like()?;
        let mask = self.extended_attention_mask(attention_mask)?;

        let mut hidden_states = self.embeddings.forward(input_ids, &token_type_ids)?;
        for layer in &self.layers {
            hidden_states = layer.forward(&hidden_states, &mask)?;
        }

        hidden_states
            .i((.., 0, ..))?
            .apply(&self.pooler)?
            .tanh()?
            .apply(&self.classifier)
    }

    /// Softmax over the logits of a single sequence.
    pub fn predict_proba(&self, input_ids: &[u32], device: &Device) -> Result<Vec<f32>> {
        let ids = Tensor::new(input_ids, device)?.unsqueeze(0)?;
        let mask = ids.ones_like()?;
        let logits = self.forward(&ids, &mask)?;
        softmax(&logits.to_dtype(DType::F32)?, D::Minus1)?
            .squeeze(0)?
            .to_vec1::<f32>()
    }
}
