//! Shared fixtures for pillowmap-render integration tests

#![allow(dead_code)]

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Rgb, RgbImage};
use pillowmap_core::{PipelineConfig, Resolution};

/// Header written by the pillow logger
pub const HEADER: &str = "Timestamp,Pressure1,Pressure2,Pressure3,Pressure4";

/// Small, fast config writing into `dir`
pub fn small_config(dir: &Path) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.output_dir = dir.join("output");
    config.render.width_px = 160;
    config.render.height_px = 100;
    config.field.resolution = Resolution::square(12);
    config.workers = Some(3);
    config
}

/// Write a logger CSV with one row per force tuple
pub fn write_logger_csv(path: &Path, forces: &[[f64; 4]]) {
    let mut file = File::create(path).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for (i, f) in forces.iter().enumerate() {
        writeln!(file, "2024-05-01 23:00:{:02},{},{},{},{}", i % 60, f[0], f[1], f[2], f[3]).unwrap();
    }
}

/// Solid-color PNG
pub fn solid_png(dir: &Path, name: &str, size: (u32, u32), rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(size.0, size.1, Rgb(rgb)).save(&path).unwrap();
    path
}

/// Decode every frame of a GIF
pub fn decode_gif(path: &Path) -> Vec<image::Frame> {
    let decoder = GifDecoder::new(BufReader::new(File::open(path).unwrap())).unwrap();
    decoder.into_frames().collect_frames().unwrap()
}

/// Channel-wise color comparison with tolerance for palette quantization
pub fn color_near(actual: [u8; 3], expected: [u8; 3]) -> bool {
    actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| (*a as i16 - *e as i16).abs() <= 8)
}
