#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Deterministic noisy pattern so the encoder has something to chew on.
pub fn noisy_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(2_654_435_761).wrapping_add(y.wrapping_mul(40_503));
        Rgb([(v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8])
    })
}

pub fn write_png(path: &Path, width: u32, height: u32) -> PathBuf {
    noisy_image(width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
    path.to_path_buf()
}

pub fn write_rgba_png(path: &Path, width: u32, height: u32) -> PathBuf {
    RgbaImage::from_pixel(width, height, Rgba([20, 140, 220, 128]))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
    path.to_path_buf()
}

pub fn write_non_png_files(dir: &Path) -> Vec<PathBuf> {
    let jpg_file = dir.join("photo.jpg");
    let txt_file = dir.join("notes.txt");

    File::create(&jpg_file)
        .unwrap()
        .write_all(b"fake jpg data")
        .unwrap();
    File::create(&txt_file)
        .unwrap()
        .write_all(b"not an image")
        .unwrap();

    vec![jpg_file, txt_file]
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
