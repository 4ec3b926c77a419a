//! Assembled outputs of a generation run.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Width in pixels of every synthesized image.
pub const IMAGE_WIDTH: u32 = 1024;
/// Height in pixels of every synthesized image.
pub const IMAGE_HEIGHT: u32 = 1024;

/// Every field generated for one word.
///
/// Created fresh per generation and never mutated afterwards; ownership
/// passes straight to whatever persists or renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub word: String,
    pub part_of_speech: String,
    pub pronunciation: String,
    pub offensive: bool,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub sentences: Vec<String>,
    pub definitions: Vec<String>,
    pub inspirational_quotes: Vec<String>,
    pub rhymes: Vec<String>,
}

/// One generated illustration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    /// Decoded image bytes. Serialized as base64.
    #[serde(serialize_with = "to_base64", deserialize_with = "from_base64")]
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// The exact text submitted to the image model.
    pub prompt: String,
    /// Wrapping template the prompt was slotted into, if any.
    pub style_template: Option<String>,
}

impl ImageAsset {
    /// `data:` URI for embedding the image into an SVG or HTML template.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.data))
    }
}

impl std::fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAsset")
            .field("data", &format_args!("<{} bytes>", self.data.len()))
            .field("width", &self.width)
            .field("height", &self.height)
            .field("prompt", &self.prompt)
            .field("style_template", &self.style_template)
            .finish()
    }
}

fn to_base64<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64.encode(data))
}

fn from_base64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    BASE64.decode(encoded).map_err(serde::de::Error::custom)
}
