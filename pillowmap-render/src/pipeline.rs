//! Batch Frame Pipeline
//!
//! ## Stages
//!
//! ```text
//! CSV ─► readings ─► positions ─► worker pool ─► barrier ─► GIF ─► manifest
//!                    (sequential)  (frame files)            (ordered sequence)
//! ```
//!
//! 1. The output directory is created once, idempotently.
//! 2. Positions are estimated sequentially; each becomes a frame job with a
//!    fixed index and path.
//! 3. Scoped workers claim job indices from a shared counter and each
//!    writes only its own file. No lock is taken on frame data.
//! 4. After every worker has joined, the ordered [`FrameSequence`] goes to
//!    the compositor. The GIF is built from that list, never from a
//!    directory listing.
//!
//! ## Stopping Early
//!
//! Workers check the [`CancelToken`] and a shared failure flag before
//! claiming each job. A failure stops further claims; the failure with the
//! lowest frame index is reported. Frames already written stay on disk.

use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use pillowmap_core::stream::CsvReadingStream;
use pillowmap_core::{
    IntensityField, PipelineConfig, PositionEstimator, SensorReading, WeightedCentroid,
};

use crate::compositor::{AnimationCompositor, AnimationSummary};
use crate::errors::{PipelineError, RenderError};
use crate::frame::{Frame, FrameSequence};
use crate::heatmap::HeatmapRenderer;
use crate::naming::FrameNaming;

/// Shared stop flag for a running pipeline
///
/// Clones share the same flag. Cancelling is permanent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every holder to stop
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](Self::cancel) was called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Outputs of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Every frame, index-aligned with the input rows
    pub frames: FrameSequence,
    /// The GIF
    pub animation: AnimationSummary,
    /// Manifest path, when one was written
    pub manifest: Option<PathBuf>,
}

/// Renders one heatmap per reading and animates them
pub struct FramePipeline<E = WeightedCentroid> {
    config: PipelineConfig,
    estimator: E,
    renderer: HeatmapRenderer,
    compositor: AnimationCompositor,
    cancel: CancelToken,
    workers: usize,
}

impl FramePipeline<WeightedCentroid> {
    /// Validate `config` and build a pipeline around the weighted centroid
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        let estimator = WeightedCentroid::new(config.layout()?);
        let workers = config.workers.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });

        Ok(Self {
            renderer: HeatmapRenderer::new(config.render.clone()),
            compositor: AnimationCompositor::new(config.animation.fps),
            estimator,
            cancel: CancelToken::new(),
            workers,
            config,
        })
    }
}

impl<E: PositionEstimator + Sync> FramePipeline<E> {
    /// Replace the position estimator
    ///
    /// The estimator's layout decides which CSV columns are read and which
    /// domain frames cover.
    pub fn with_estimator<F: PositionEstimator + Sync>(self, estimator: F) -> FramePipeline<F> {
        FramePipeline {
            config: self.config,
            estimator,
            renderer: self.renderer,
            compositor: self.compositor,
            cancel: self.cancel,
            workers: self.workers,
        }
    }

    /// Use an externally held cancel token
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that stops this pipeline
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Number of render threads
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Read the configured CSV and run every stage
    pub fn run(&self) -> Result<RunSummary, PipelineError> {
        let readings =
            CsvReadingStream::open(&self.config.input, self.estimator.layout())?.read_all()?;
        self.run_readings(&readings)
    }

    /// Run every stage on readings already in memory
    ///
    /// Readings are expected in row order; frame `i` is built from
    /// `readings[i]`. No readings is [`CompositionError::NoFrames`].
    ///
    /// [`CompositionError::NoFrames`]: crate::errors::CompositionError::NoFrames
    pub fn run_readings(&self, readings: &[SensorReading]) -> Result<RunSummary, PipelineError> {
        let frames = self.render_frames(readings)?;

        let animation_path = self.config.animation_path();
        let animation = self.compositor.compose(&frames.paths(), &animation_path)?;
        log_info!(
            "Animation saved: {} ({} frames at {} fps)",
            animation.path.display(),
            animation.frames,
            animation.fps
        );

        let manifest = if self.config.manifest {
            let path = self.config.manifest_path();
            frames
                .write_manifest(&path)
                .map_err(|source| PipelineError::Manifest {
                    path: path.clone(),
                    source,
                })?;
            log_debug!("Manifest saved: {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(RunSummary {
            frames,
            animation,
            manifest,
        })
    }

    /// Write one frame per reading and return them in order
    pub fn render_frames(&self, readings: &[SensorReading]) -> Result<FrameSequence, PipelineError> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| PipelineError::OutputDir {
            path: dir.clone(),
            source,
        })?;

        let naming = FrameNaming::for_count(self.config.render.frame_prefix.as_str(), readings.len());
        let jobs: Vec<Frame> = readings
            .iter()
            .enumerate()
            .map(|(index, reading)| Frame {
                index,
                row: reading.row(),
                position: self.estimator.estimate(reading),
                path: dir.join(naming.file_name(index)),
            })
            .collect();

        let total = jobs.len();
        let workers = self.workers.clamp(1, total.max(1));
        log_info!("Rendering {} frames with {} workers", total, workers);

        let next = AtomicUsize::new(0);
        let failed = AtomicBool::new(false);

        let joined: Vec<thread::Result<Vec<(usize, Result<(), RenderError>)>>> =
            thread::scope(|scope| {
                let handles: Vec<_> = (0..workers)
                    .map(|_| {
                        let (jobs, naming, next, failed) = (&jobs, &naming, &next, &failed);
                        scope.spawn(move || {
                            let mut outcomes = Vec::new();
                            while !self.cancel.is_cancelled() && !failed.load(Ordering::Acquire) {
                                let index = next.fetch_add(1, Ordering::Relaxed);
                                let Some(frame) = jobs.get(index) else {
                                    break;
                                };
                                let result = self.render_frame(frame, naming);
                                match &result {
                                    Ok(()) => log_info!("Saved: {}", frame.path.display()),
                                    Err(_) => failed.store(true, Ordering::Release),
                                }
                                outcomes.push((index, result));
                            }
                            outcomes
                        })
                    })
                    .collect();
                handles.into_iter().map(|h| h.join()).collect()
            });

        let mut outcomes = Vec::with_capacity(total);
        for worker in joined {
            outcomes.extend(worker.map_err(|_| PipelineError::WorkerPanicked)?);
        }
        outcomes.sort_by_key(|(index, _)| *index);

        let completed = outcomes.iter().filter(|(_, r)| r.is_ok()).count();
        if let Some((index, Err(source))) = outcomes.into_iter().find(|(_, r)| r.is_err()) {
            return Err(PipelineError::Render {
                index,
                path: jobs[index].path.clone(),
                source,
            });
        }

        if completed < total {
            log_warn!("Cancelled after {} of {} frames", completed, total);
            return Err(PipelineError::Cancelled { completed, total });
        }

        Ok(FrameSequence::new(jobs))
    }

    fn render_frame(&self, frame: &Frame, naming: &FrameNaming) -> Result<(), RenderError> {
        let field = IntensityField::from_spec(
            frame.position,
            self.estimator.layout().domain(),
            &self.config.field,
        )?;
        let title = format!("{} | frame {}", self.config.render.title, naming.label(frame.index));
        self.renderer.render(&field, &title, &frame.path)
    }
}
