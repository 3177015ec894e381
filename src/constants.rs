pub const DEFAULT_TARGET_SIZE_BYTES: u64 = 80 * 1024;
pub const DEFAULT_START_QUALITY: u8 = 95;
// Equal to the start quality, so the default search runs a single attempt.
pub const DEFAULT_MIN_QUALITY: u8 = 95;
pub const DEFAULT_QUALITY_STEP: u8 = 2;

pub const DEFAULT_INPUT_DIR: &str = ".";
pub const DEFAULT_OUTPUT_DIR: &str = "pillow";

pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// libwebp effort setting, 0 (fast) to 6 (slowest, smallest output).
pub const WEBP_METHOD: i32 = 6;

pub const PNG_EXTENSION: &str = "png";
pub const WEBP_EXTENSION: &str = "webp";

pub const BYTES_PER_KB: u64 = 1024;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✔";
pub const ARROW: &str = "→";
