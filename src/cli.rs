use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webp-squeeze",
    about = "Batch-convert PNG images to WebP within a size budget",
    long_about = "webp-squeeze converts every PNG in a directory to WebP. Each image is encoded \
                  at decreasing quality until the output fits the target size, or until the \
                  minimum quality is reached. With no arguments it reads the current directory \
                  and writes to ./pillow.",
    version,
    after_help = "EXAMPLES:\n  \
    webp-squeeze\n  \
    webp-squeeze -i ./images -o ./webp -t 102400\n  \
    webp-squeeze -s 95 -m 50 --step 5 -v"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long,
        value_name = "DIR",
        help = "Directory to read PNG files from (default: .)",
        long_help = "Directory whose PNG files are converted. Only files directly inside it are \
                     read; subdirectories are ignored."
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Directory to write WebP files to (default: pillow)",
        long_help = "Output directory, created if missing. A relative path is resolved against \
                     the working directory, not the input directory."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 't',
        long,
        value_name = "BYTES",
        help = "Target file size in bytes (default: 81920)"
    )]
    pub target_size: Option<u64>,

    #[arg(
        short = 's',
        long,
        value_name = "QUALITY",
        help = "Quality of the first attempt, 1-100 (default: 95)"
    )]
    pub start_quality: Option<u8>,

    #[arg(
        short = 'm',
        long,
        value_name = "QUALITY",
        help = "Lowest quality the search may fall back to, 1-100 (default: 95)",
        long_help = "Quality floor. When it equals the starting quality only one attempt is made \
                     per image, whatever its size."
    )]
    pub min_quality: Option<u8>,

    #[arg(
        long,
        value_name = "N",
        help = "Quality decrement between attempts (default: 2)"
    )]
    pub step: Option<u8>,

    #[arg(short = 'q', long, help = "Suppress per-file output and warnings")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Log every encode attempt")]
    pub verbose: bool,
}
