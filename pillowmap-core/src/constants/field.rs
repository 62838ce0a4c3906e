//! Intensity Field Parameters

/// Samples per axis of the intensity mesh.
///
/// 100 samples over 60 cm gives ~0.6 cm spacing, finer than a single
/// raster cell at the default frame size.
pub const DEFAULT_MESH_RESOLUTION: usize = 100;

/// Largest accepted samples per axis.
///
/// A 4096 x 4096 mesh already holds 128 MiB of samples per worker.
pub const MAX_MESH_RESOLUTION: usize = 4096;

/// Distance (cm) at which intensity reaches zero.
///
/// Roughly the radius of an adult head's contact patch.
pub const DEFAULT_FALLOFF_RADIUS_CM: f64 = 10.0;
