//! Heatmap raster rendering
//!
//! ## Layout
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │   Estimated Head Position Heatmap | frame 007  │
//! ├──────────────────────────────────────┬─────────┤
//! │ y (cm)                               │  ▇ 1.0  │
//! │  40 ┤  ░░░░░░░░░░░░░░░░░░░░░░░░░░░   │  ▇      │
//! │     │  ░░░░░░░▒▒▓▓▒▒░░░░░░░░░░░░░░   │  ▆      │
//! │     │  ░░░░░░▒▓████▓▒░░░░░░░░░░░░░   │  ▃      │
//! │   0 ┤  ░░░░░░░░░░░░░░░░░░░░░░░░░░░   │  ▁ 0.0  │
//! │     └──┬──────────────────────────┬─   │Pressure │
//! │        0         x (cm)          60    │Intensity│
//! └──────────────────────────────────────┴─────────┘
//! ```
//!
//! - The plot's axes span exactly the physical domain, origin lower-left.
//! - Each mesh sample is painted as one cell covering `width / columns` by
//!   `height / rows` of the extent, so the picture keeps the pillow's
//!   aspect ratio whatever the mesh size.
//! - The legend maps `[0, 1]` through the same color scale as the plot.
//!
//! Drawing happens into an in-memory buffer; writing the PNG is a separate
//! step. That keeps [`HeatmapRenderer::rasterize`] free of file I/O.

use std::path::Path;

use image::RgbImage;
use pillowmap_core::constants::output::MAX_FRAME_SIDE_PX;
use pillowmap_core::{IntensityField, RenderSettings};
use plotters::prelude::*;

use crate::colormap::ColorMap;
use crate::errors::RenderError;

/// Number of bands in the color legend
const LEGEND_STEPS: usize = 128;

/// Font family for all text
const FONT: &str = "sans-serif";

type DrawResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Draws intensity fields as titled, legended heatmaps
#[derive(Debug, Clone, Default)]
pub struct HeatmapRenderer {
    settings: RenderSettings,
}

impl HeatmapRenderer {
    /// Create a renderer with fixed settings for a whole run
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Settings in use
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Draw a field into an RGB image
    pub fn rasterize(&self, field: &IntensityField, title: &str) -> Result<RgbImage, RenderError> {
        let (width, height) = (self.settings.width_px, self.settings.height_px);
        let sides = 1..=MAX_FRAME_SIDE_PX;
        if !sides.contains(&width) || !sides.contains(&height) {
            return Err(RenderError::FrameSize {
                width,
                height,
                max: MAX_FRAME_SIDE_PX,
            });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or(RenderError::Buffer { width, height })?;
        let mut buffer = vec![0u8; len];

        self.draw(
            BitMapBackend::with_buffer(&mut buffer, (width, height)),
            field,
            title,
        )
        .map_err(RenderError::Draw)?;

        RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer { width, height })
    }

    /// Draw a field and write it to `path`, replacing any existing file
    ///
    /// The image format follows the file extension.
    pub fn render(&self, field: &IntensityField, title: &str, path: &Path) -> Result<(), RenderError> {
        let image = self.rasterize(field, title)?;
        image.save(path).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn draw(&self, backend: BitMapBackend<'_>, field: &IntensityField, title: &str) -> DrawResult {
        let scale = self.settings.color_scale;
        let color = |t: f64| {
            let [r, g, b] = scale.rgb(t);
            RGBColor(r, g, b)
        };

        let root = backend.into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(title, (FONT, 20))?;

        let legend_width = (self.settings.width_px / 6).max(70) as i32;
        let split = self.settings.width_px as i32 - legend_width;
        let (plot_area, legend_area) = root.split_horizontally(split);

        // Field
        let domain = field.domain();
        let resolution = field.resolution();
        let cell_w = domain.width / resolution.columns as f64;
        let cell_h = domain.height / resolution.rows as f64;

        let mut chart = ChartBuilder::on(&plot_area)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..domain.width, 0.0..domain.height)?;

        chart.draw_series(field.cells().map(|(column, row, value)| {
            let x0 = column as f64 * cell_w;
            let y0 = row as f64 * cell_h;
            Rectangle::new([(x0, y0), (x0 + cell_w, y0 + cell_h)], color(value).filled())
        }))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("x (cm)")
            .y_desc("y (cm)")
            .label_style((FONT, 12))
            .axis_desc_style((FONT, 14))
            .draw()?;

        // Legend
        let mut legend = ChartBuilder::on(&legend_area)
            .margin_top(10)
            .margin_bottom(50)
            .margin_right(10)
            .y_label_area_size(45)
            .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

        legend.draw_series((0..LEGEND_STEPS).map(|step| {
            let y0 = step as f64 / LEGEND_STEPS as f64;
            let y1 = (step + 1) as f64 / LEGEND_STEPS as f64;
            Rectangle::new([(0.0, y0), (1.0, y1)], color((y0 + y1) / 2.0).filled())
        }))?;

        legend
            .configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_labels(6)
            .y_label_formatter(&|v| format!("{:.1}", v))
            .y_desc(self.settings.legend_label.as_str())
            .label_style((FONT, 12))
            .axis_desc_style((FONT, 12))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillowmap_core::{ColorScale, Domain, Point, Resolution};

    fn coarse_field() -> IntensityField {
        // 5 × 5 mesh so each cell is tens of pixels wide
        IntensityField::radial(
            Point::new(30.0, 20.0),
            Domain::default(),
            Resolution::square(5),
            20.0,
        )
        .unwrap()
    }

    fn contains_color(image: &RgbImage, rgb: [u8; 3]) -> bool {
        image.pixels().any(|p| p.0 == rgb)
    }

    #[test]
    fn rasterize_matches_settings_size() {
        let renderer = HeatmapRenderer::default();
        let image = renderer.rasterize(&coarse_field(), "frame 000").unwrap();
        assert_eq!(image.dimensions(), (600, 400));
    }

    #[test]
    fn rasterize_rejects_unbounded_sizes() {
        for (width_px, height_px) in [(0, 400), (600, MAX_FRAME_SIDE_PX + 1), (u32::MAX, u32::MAX)] {
            let renderer = HeatmapRenderer::new(RenderSettings {
                width_px,
                height_px,
                ..RenderSettings::default()
            });
            let err = renderer.rasterize(&coarse_field(), "frame 000").unwrap_err();
            assert!(matches!(
                err,
                RenderError::FrameSize { width, height, .. } if (width, height) == (width_px, height_px)
            ));
        }
    }

    #[test]
    fn rasterize_paints_field_colors() {
        let renderer = HeatmapRenderer::default();
        let field = coarse_field();
        let image = renderer.rasterize(&field, "frame 000").unwrap();

        // Peak cell and an empty corner cell are both visible
        let peak = ColorScale::Jet.rgb(field.get(2, 2).unwrap());
        let empty = ColorScale::Jet.rgb(field.get(0, 0).unwrap());
        assert!(contains_color(&image, peak));
        assert!(contains_color(&image, empty));
    }

    #[test]
    fn color_scale_is_configurable() {
        let settings = RenderSettings {
            color_scale: ColorScale::Grayscale,
            ..RenderSettings::default()
        };
        let field = coarse_field();
        let image = HeatmapRenderer::new(settings)
            .rasterize(&field, "gray")
            .unwrap();

        // (15, 20) is 15 cm from the center: 1 - 15/20
        let quarter = ColorScale::Grayscale.rgb(field.get(1, 2).unwrap());
        assert_eq!(quarter, [64, 64, 64]);
        assert!(contains_color(&image, quarter));
        assert!(!contains_color(&image, ColorScale::Jet.rgb(0.0)));
    }

    #[test]
    fn render_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heatmap_000.png");
        std::fs::write(&path, b"stale").unwrap();

        HeatmapRenderer::default()
            .render(&coarse_field(), "frame 000", &path)
            .unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (600, 400));
    }

    #[test]
    fn render_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("heatmap_000.png");
        let result = HeatmapRenderer::default().render(&coarse_field(), "x", &path);
        assert!(matches!(result, Err(RenderError::Write { .. })));
    }
}
