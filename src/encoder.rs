use crate::constants::WEBP_METHOD;
use crate::error::{CompressionError, Result};
use image::RgbImage;

/// Encodes a whole RGB image to WebP at a given quality.
///
/// The quality search only depends on this trait, so it can be driven by a
/// scripted encoder in tests.
pub trait WebpEncoder {
    fn encode(&self, image: &RgbImage, quality: u8) -> Result<Vec<u8>>;
}

/// Lossy WebP through libwebp.
#[derive(Debug, Clone, Copy)]
pub struct LibWebpEncoder {
    method: i32,
}

impl LibWebpEncoder {
    pub fn new() -> Self {
        Self {
            method: WEBP_METHOD,
        }
    }

    pub fn with_method(method: i32) -> Self {
        Self { method }
    }

    pub fn method(&self) -> i32 {
        self.method
    }

    fn config(&self, quality: u8) -> Result<webp::WebPConfig> {
        let mut config = webp::WebPConfig::new().map_err(|_| {
            CompressionError::WebpEncoding("failed to initialise encoder config".to_string())
        })?;
        config.lossless = 0;
        config.quality = f32::from(quality);
        config.method = self.method;
        Ok(config)
    }
}

impl Default for LibWebpEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl WebpEncoder for LibWebpEncoder {
    fn encode(&self, image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
        let config = self.config(quality)?;
        let (width, height) = image.dimensions();

        let encoded = webp::Encoder::from_rgb(image.as_raw(), width, height)
            .encode_advanced(&config)
            .map_err(|e| {
                CompressionError::WebpEncoding(format!("quality {}: {:?}", quality, e))
            })?;

        Ok(encoded.to_vec())
    }
}
