use crate::constants::{PNG_EXTENSION, WEBP_EXTENSION};
use crate::encoder::WebpEncoder;
use crate::error::{CompressionError, Result};
use crate::options::{ConversionOptions, SearchParams};
use crate::search::search_quality;
use crate::utils::{create_progress_spinner, format_file_size, format_report_line};
use crate::{info, verbose, warn};
use image::ImageReader;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// One PNG converted and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub quality: u8,
    pub size_bytes: u64,
    pub attempts: usize,
    pub met_budget: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub files: Vec<ConvertedFile>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn total_size_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }

    pub fn over_budget_count(&self) -> usize {
        self.files.iter().filter(|f| !f.met_budget).count()
    }
}

/// Converts every PNG directly inside `options.input_dir`, one at a time.
///
/// The output directory is created first. A report line is printed as each
/// file finishes. The first failure aborts the run; files converted before
/// it stay on disk.
pub fn batch_convert<E>(options: &ConversionOptions, encoder: &E) -> Result<BatchSummary>
where
    E: WebpEncoder + ?Sized,
{
    let start_time = Instant::now();
    let search = &options.search;

    if search.is_single_attempt() {
        warn!(
            "Minimum quality {} equals starting quality {}: each image gets a single encode attempt",
            search.min_quality, search.start_quality
        );
    }

    fs::create_dir_all(&options.output_dir).map_err(|source| {
        CompressionError::DirectoryCreationFailed {
            path: options.output_dir.clone(),
            source,
        }
    })?;

    let png_files = collect_png_files(&options.input_dir)?;
    if png_files.is_empty() {
        warn!("No PNG files found in {}", options.input_dir.display());
        return Ok(BatchSummary {
            files: Vec::new(),
            elapsed: start_time.elapsed(),
        });
    }

    verbose!(
        "Found {} PNG files in {}",
        png_files.len(),
        options.input_dir.display()
    );

    let mut files = Vec::with_capacity(png_files.len());
    for input_path in &png_files {
        let converted = convert_file(input_path, &options.output_dir, search, encoder)?;
        info!(
            "{}",
            format_report_line(&display_name(input_path), &converted.output, converted.size_bytes)
        );
        files.push(converted);
    }

    let summary = BatchSummary {
        files,
        elapsed: start_time.elapsed(),
    };

    verbose!(
        "Converted {} files ({} total, {} over budget) in {:.2?}",
        summary.files.len(),
        format_file_size(summary.total_size_bytes()),
        summary.over_budget_count(),
        summary.elapsed
    );

    Ok(summary)
}

/// Decodes one PNG, runs the quality search and persists the accepted
/// encoding to `output_dir/<stem>.webp`.
///
/// Attempts are held in memory; only the accepted bytes reach the
/// destination, through a temporary file renamed into place.
pub fn convert_file<E>(
    input_path: &Path,
    output_dir: &Path,
    params: &SearchParams,
    encoder: &E,
) -> Result<ConvertedFile>
where
    E: WebpEncoder + ?Sized,
{
    let output_path = generate_output_path(input_path, output_dir)?;

    let pb = create_progress_spinner(&format!("Encoding {}...", display_name(input_path)));

    let image = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?
        .to_rgb8();
    verbose!(
        "{}: {}x{} pixels",
        input_path.display(),
        image.width(),
        image.height()
    );

    let outcome = search_quality(&image, encoder, params)?;
    pb.finish_and_clear();

    if !outcome.met_budget {
        verbose!(
            "{}: {} bytes at floor quality {} is over the {} byte budget",
            input_path.display(),
            outcome.size_bytes(),
            outcome.quality,
            params.target_size_bytes
        );
    }

    write_atomically(&output_path, output_dir, &outcome.bytes)?;

    Ok(ConvertedFile {
        input: input_path.to_path_buf(),
        output: output_path,
        quality: outcome.quality,
        size_bytes: outcome.size_bytes(),
        attempts: outcome.attempts,
        met_budget: outcome.met_budget,
    })
}

fn write_atomically(destination: &Path, dir: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(destination).map_err(|e| e.error)?;
    Ok(())
}

/// Lists the PNG files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into and non-PNG entries are skipped
/// without being opened. Symlinks are judged by their target.
pub fn collect_png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CompressionError::NotADirectory(dir.to_path_buf()));
    }

    let mut png_files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_png_file(entry.path()) {
            png_files.push(entry.into_path());
        }
    }

    Ok(png_files)
}

/// Name ends in `.png`, any case. A bare `.png` counts too.
pub fn is_png_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_ascii_lowercase()
                .ends_with(&format!(".{}", PNG_EXTENSION))
        })
        .unwrap_or(false)
}

/// `output_dir/<stem>.webp`; the stem keeps its case, the extension is
/// always lowercase.
pub fn generate_output_path(input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_stem = input_path.file_stem().ok_or_else(|| {
        CompressionError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid file name: {}", input_path.display()),
        ))
    })?;

    let output_filename = format!("{}.{}", file_stem.to_string_lossy(), WEBP_EXTENSION);
    Ok(output_dir.join(output_filename))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
