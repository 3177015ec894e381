use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_MIN_QUALITY, DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY_STEP,
    DEFAULT_START_QUALITY, DEFAULT_TARGET_SIZE_BYTES, MAX_QUALITY, MIN_QUALITY,
};
use crate::error::{CompressionError, Result};
use std::path::PathBuf;

/// Parameters of the quality descent for a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub target_size_bytes: u64,
    pub start_quality: u8,
    pub min_quality: u8,
    pub step: u8,
}

impl SearchParams {
    /// Builds search parameters, filling unset values from the defaults.
    ///
    /// # Errors
    /// * `InvalidTargetSize` if the budget is zero
    /// * `InvalidQuality` if either quality is outside 1..=100
    /// * `InvalidStep` if the step is zero
    /// * `InvalidQualityRange` if the floor is above the starting quality
    pub fn new(
        target_size_bytes: Option<u64>,
        start_quality: Option<u8>,
        min_quality: Option<u8>,
        step: Option<u8>,
    ) -> Result<Self> {
        let target_size_bytes = target_size_bytes.unwrap_or(DEFAULT_TARGET_SIZE_BYTES);
        if target_size_bytes == 0 {
            return Err(CompressionError::InvalidTargetSize(target_size_bytes));
        }

        let start_quality = validate_quality(start_quality.unwrap_or(DEFAULT_START_QUALITY))?;
        let min_quality = validate_quality(min_quality.unwrap_or(DEFAULT_MIN_QUALITY))?;
        if min_quality > start_quality {
            return Err(CompressionError::InvalidQualityRange {
                start: start_quality,
                min: min_quality,
            });
        }

        let step = step.unwrap_or(DEFAULT_QUALITY_STEP);
        if step == 0 {
            return Err(CompressionError::InvalidStep(step));
        }

        Ok(Self {
            target_size_bytes,
            start_quality,
            min_quality,
            step,
        })
    }

    /// True when the floor equals the starting quality, which leaves the
    /// descent with exactly one attempt. The shipped defaults are like this.
    pub fn is_single_attempt(&self) -> bool {
        self.min_quality == self.start_quality
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            target_size_bytes: DEFAULT_TARGET_SIZE_BYTES,
            start_quality: DEFAULT_START_QUALITY,
            min_quality: DEFAULT_MIN_QUALITY,
            step: DEFAULT_QUALITY_STEP,
        }
    }
}

fn validate_quality(quality: u8) -> Result<u8> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(CompressionError::InvalidQuality(quality));
    }
    Ok(quality)
}

/// Everything a batch run needs: where to read, where to write, how to search.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub search: SearchParams,
}

impl ConversionOptions {
    pub fn new(input_dir: Option<PathBuf>, output_dir: Option<PathBuf>, search: SearchParams) -> Self {
        Self {
            input_dir: input_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            search,
        }
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self::new(None, None, SearchParams::default())
    }
}
