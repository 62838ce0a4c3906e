//! GIF composition from rendered frames
//!
//! ## Procedure
//!
//! 1. Pre-check every frame: readable image header, same size as the first.
//!    Nothing is created on disk until this passes.
//! 2. Create the output file and stream frames into a looping GIF encoder
//!    in the order given, one decoded frame in memory at a time.
//! 3. Flush, then report what was written.
//!
//! Frames are never resized, cropped or color corrected. Every frame shows
//! for `1000 / fps` ms.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, ImageError};
use pillowmap_core::constants::output::DEFAULT_FPS;

use crate::errors::CompositionError;

/// NeuQuant sampling factor passed to the GIF encoder (1 best, 30 fastest)
const DEFAULT_QUANTIZER_SPEED: i32 = 10;

/// What [`AnimationCompositor::compose`] wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSummary {
    /// Number of frames encoded
    pub frames: usize,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Playback rate
    pub fps: u32,
    /// Animation file
    pub path: PathBuf,
}

/// Combines ordered frame images into one looping GIF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCompositor {
    fps: u32,
    speed: i32,
}

impl Default for AnimationCompositor {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl AnimationCompositor {
    /// Compositor playing at `fps` frames per second
    ///
    /// `fps` is clamped to at least 1.
    pub fn new(fps: u32) -> Self {
        Self {
            fps: fps.max(1),
            speed: DEFAULT_QUANTIZER_SPEED,
        }
    }

    /// Trade palette quality for encoding speed (1..=30)
    pub fn with_quantizer_speed(mut self, speed: i32) -> Self {
        self.speed = speed.clamp(1, 30);
        self
    }

    /// Playback rate
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Per-frame display time
    pub fn frame_delay(&self) -> Delay {
        Delay::from_numer_denom_ms(1000, self.fps)
    }

    /// Encode `frames`, in order, into a GIF at `output`
    ///
    /// An existing file at `output` is replaced.
    pub fn compose<P: AsRef<Path>>(
        &self,
        frames: &[P],
        output: &Path,
    ) -> Result<AnimationSummary, CompositionError> {
        let (width, height) = precheck(frames)?;

        let encode_err = |source: ImageError| CompositionError::Encode {
            path: output.to_path_buf(),
            source,
        };

        let file = File::create(output).map_err(|e| encode_err(ImageError::IoError(e)))?;
        let mut writer = BufWriter::new(file);
        let delay = self.frame_delay();

        {
            let mut encoder = GifEncoder::new_with_speed(&mut writer, self.speed);
            encoder.set_repeat(Repeat::Infinite).map_err(encode_err)?;

            for path in frames {
                let path = path.as_ref();
                let rgba = image::open(path)
                    .map_err(|source| CompositionError::Decode {
                        path: path.to_path_buf(),
                        source,
                    })?
                    .to_rgba8();

                // File may have changed since the pre-check
                if rgba.dimensions() != (width, height) {
                    return Err(CompositionError::DimensionMismatch {
                        path: path.to_path_buf(),
                        expected: (width, height),
                        found: rgba.dimensions(),
                    });
                }

                encoder
                    .encode_frame(image::Frame::from_parts(rgba, 0, 0, delay))
                    .map_err(encode_err)?;
                log_debug!("Encoded {}", path.display());
            }
        }

        writer
            .flush()
            .map_err(|e| encode_err(ImageError::IoError(e)))?;

        Ok(AnimationSummary {
            frames: frames.len(),
            width,
            height,
            fps: self.fps,
            path: output.to_path_buf(),
        })
    }
}

/// Size shared by every frame
fn precheck<P: AsRef<Path>>(frames: &[P]) -> Result<(u32, u32), CompositionError> {
    let mut expected = None;
    for path in frames {
        let path = path.as_ref();
        let found = image::image_dimensions(path).map_err(|source| CompositionError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(CompositionError::DimensionMismatch {
                    path: path.to_path_buf(),
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
    }
    expected.ok_or(CompositionError::NoFrames)
}
