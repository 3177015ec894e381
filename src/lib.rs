pub mod batch;
pub mod cli;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod logger;
pub mod options;
pub mod search;
pub mod utils;

pub use batch::{
    batch_convert, collect_png_files, convert_file, generate_output_path, is_png_file,
    BatchSummary, ConvertedFile,
};
pub use encoder::{LibWebpEncoder, WebpEncoder};
pub use error::{CompressionError, Result};
pub use options::{ConversionOptions, SearchParams};
pub use search::{quality_schedule, search_quality, SearchOutcome};
