use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use webp_squeeze::cli::Args;
use webp_squeeze::error;
use webp_squeeze::logger::{self, Verbosity};
use webp_squeeze::{batch_convert, ConversionOptions, LibWebpEncoder, SearchParams};

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    let search = SearchParams::new(
        args.target_size,
        args.start_quality,
        args.min_quality,
        args.step,
    )
    .context("invalid search parameters")?;
    let options = ConversionOptions::new(args.input, args.output, search);

    batch_convert(&options, &LibWebpEncoder::new()).with_context(|| {
        format!(
            "failed to convert PNG files in {}",
            options.input_dir.display()
        )
    })?;

    Ok(())
}
