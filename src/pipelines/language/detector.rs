use crate::error::{Result, SentimentError};

/// Identifies the language a text is written in.
pub trait LanguageDetector: Send + Sync {
    /// Returns an ISO 639-1 code such as `"en"` or `"fr"`.
    fn detect(&self, text: &str) -> Result<String>;
}

/// Trigram-based detection backed by `whatlang`.
#[derive(Debug, Clone, Default)]
pub struct WhatlangDetector {
    require_reliable: bool,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject detections whatlang itself flags as unreliable.
    pub fn require_reliable(mut self, require: bool) -> Self {
        self.require_reliable = require;
        self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String> {
        let info = whatlang::detect(text)
            .ok_or_else(|| SentimentError::Detection("no language features in text".into()))?;

        if self.require_reliable && !info.is_reliable() {
            return Err(SentimentError::Detection(format!(
                "unreliable detection ({}, confidence {:.2})",
                info.lang().code(),
                info.confidence()
            )));
        }

        Ok(iso_639_1(info.lang().code()).to_string())
    }
}

/// whatlang reports ISO 639-3; translators and callers expect two-letter codes.
/// Languages without a two-letter code keep their three-letter one.
fn iso_639_1(code: &'static str) -> &'static str {
    match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "no",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        other => other,
    }
}
