use crate::encoder::WebpEncoder;
use crate::error::Result;
use crate::options::SearchParams;
use crate::verbose;
use image::RgbImage;

/// Result of a quality descent for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Quality of the accepted encoding.
    pub quality: u8,
    /// The accepted encoding.
    pub bytes: Vec<u8>,
    /// Number of encodes performed.
    pub attempts: usize,
    /// False when even the floor quality was over budget.
    pub met_budget: bool,
}

impl SearchOutcome {
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Qualities tried by the descent: `start`, `start - step`, ... down to and
/// including `min` when the step lands on it.
pub fn quality_schedule(start: u8, min: u8, step: u8) -> impl Iterator<Item = u8> {
    let step = usize::from(step.max(1));
    (min..=start).rev().step_by(step)
}

/// Encodes `image` at descending qualities until the output fits
/// `params.target_size_bytes`.
///
/// The first quality that fits wins. If none fits, the encoding at the
/// lowest quality tried is returned with `met_budget` unset. Nothing touches
/// the filesystem; the caller decides what to persist.
pub fn search_quality<E>(image: &RgbImage, encoder: &E, params: &SearchParams) -> Result<SearchOutcome>
where
    E: WebpEncoder + ?Sized,
{
    let mut outcome: Option<SearchOutcome> = None;
    let mut attempts = 0;

    for quality in quality_schedule(params.start_quality, params.min_quality, params.step) {
        let bytes = encoder.encode(image, quality)?;
        attempts += 1;

        let size = bytes.len() as u64;
        let fits = size <= params.target_size_bytes;
        verbose!(
            "quality {:>3} -> {} bytes ({})",
            quality,
            size,
            if fits { "fits" } else { "over budget" }
        );

        outcome = Some(SearchOutcome {
            quality,
            bytes,
            attempts,
            met_budget: fits,
        });
        if fits {
            break;
        }
    }

    // An empty schedule can only come from params built around the validation
    // in `SearchParams::new`. Fall back to one encode at the floor.
    match outcome {
        Some(outcome) => Ok(outcome),
        None => {
            let bytes = encoder.encode(image, params.min_quality)?;
            let met_budget = bytes.len() as u64 <= params.target_size_bytes;
            Ok(SearchOutcome {
                quality: params.min_quality,
                bytes,
                attempts: 1,
                met_budget,
            })
        }
    }
}
