//! Language normalization: detect the review language and translate it to
//! the analysis language before aspects are extracted.
//!
//! Detection and translation are collaborators behind the [`LanguageDetector`]
//! and [`Translator`] traits. [`LanguageNormalizer`] never returns an error;
//! the [`Normalization`] it reports says whether the text was degraded to a
//! pass-through.

pub mod detector;
pub mod normalizer;
pub mod translator;

pub use detector::{LanguageDetector, WhatlangDetector};
pub use normalizer::{LanguageNormalizer, Normalization, NormalizedText};
pub use translator::{GoogleTranslator, NoopTranslator, Translator};
