use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Output dimensions accepted by the image generation endpoint.
///
/// The three classic sizes have their own variants. Any other `WIDTHxHEIGHT`
/// value is carried through as `Other` and left for the server to judge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageSize {
    S256,
    S512,
    #[default]
    S1024,
    Other(String),
}

impl ImageSize {
    pub fn as_str(&self) -> &str {
        match self {
            ImageSize::S256 => "256x256",
            ImageSize::S512 => "512x512",
            ImageSize::S1024 => "1024x1024",
            ImageSize::Other(size) => size,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "256x256" => Ok(ImageSize::S256),
            "512x512" => Ok(ImageSize::S512),
            "1024x1024" => Ok(ImageSize::S1024),
            other => {
                let is_dimension =
                    |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
                match other.split_once('x') {
                    Some((w, h)) if is_dimension(w) && is_dimension(h) => {
                        Ok(ImageSize::Other(other.to_string()))
                    }
                    _ => Err(format!(
                        "invalid image size '{}' (expected WIDTHxHEIGHT, e.g. 1024x1024)",
                        other
                    )),
                }
            }
        }
    }
}

impl Serialize for ImageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ImageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let size = String::deserialize(deserializer)?;
        size.parse().map_err(de::Error::custom)
    }
}

/// How generated images are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Hosted URL per image
    #[default]
    Url,
    /// Inline base64-encoded image data
    B64Json,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Url => "url",
            ResponseFormat::B64Json => "b64_json",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(ResponseFormat::Url),
            "b64_json" => Ok(ResponseFormat::B64Json),
            other => Err(format!(
                "unsupported response format '{}' (expected url or b64_json)",
                other
            )),
        }
    }
}

/// Request body for the image generations endpoint.
///
/// Every field is always serialized, defaults included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub size: ImageSize,
    pub n: u32,
    pub response_format: ResponseFormat,
}

impl ImageRequest {
    /// One 1024x1024 image returned as a URL
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: ImageSize::default(),
            n: 1,
            response_format: ResponseFormat::default(),
        }
    }

    pub fn size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn n(mut self, n: u32) -> Self {
        self.n = n;
        self
    }

    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }
}
