//! Rendered frames and their ordered sequence
//!
//! A [`FrameSequence`] is index-aligned with the input rows: frame `i`
//! shows row `i`. The pipeline builds it once after every frame is on disk
//! and hands it to the compositor; nothing mutates it afterward.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use pillowmap_core::Point;
use serde::Serialize;

/// One heatmap image on disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Position in the sequence
    pub index: usize,
    /// Zero-based input row
    pub row: usize,
    /// Estimated head position drawn in this frame
    pub position: Point,
    /// Image file
    pub path: PathBuf,
}

/// Ordered frames of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    index: usize,
    row: usize,
    x: f64,
    y: f64,
    file: &'a str,
}

impl FrameSequence {
    /// Wrap frames already ordered by index
    pub(crate) fn new(frames: Vec<Frame>) -> Self {
        debug_assert!(frames.iter().enumerate().all(|(i, f)| f.index == i));
        Self { frames }
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no rows were rendered
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame by index
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Frames in order
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Image paths in order
    pub fn paths(&self) -> Vec<&Path> {
        self.frames.iter().map(|f| f.path.as_path()).collect()
    }

    /// Write a pretty JSON manifest of the sequence
    ///
    /// File names are stored relative to the frame directory.
    pub fn write_manifest(&self, path: &Path) -> io::Result<()> {
        let entries: Vec<ManifestEntry<'_>> = self
            .frames
            .iter()
            .map(|f| ManifestEntry {
                index: f.index,
                row: f.row,
                x: f.position.x,
                y: f.position.y,
                file: f
                    .path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or_default(),
            })
            .collect();

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &entries).map_err(io::Error::from)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
