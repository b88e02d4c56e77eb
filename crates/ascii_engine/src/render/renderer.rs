//! Point-cloud rasterizer
//!
//! Projects every point of every placed object into a character grid, keeping
//! the nearest point per cell, and writes the finished frame to a display sink.

use crate::config::RendererConfig;
use crate::foundation::math::{Coordinate3D, DMatrix, Mat3x4};
use crate::foundation::time::FrameSynchronizer;
use crate::render::camera::{camera_matrix, CameraParameters};
use crate::render::glyph::{illumination_to_glyph, BLANK, PALETTE};
use crate::render::lighting::PointLight;
use crate::render::object::ObjectPlacement;
use crate::render::transform::{affine_transform, linear_transform, project, rotation_matrix};
use crate::render::RenderError;
use std::io::{Stdout, Write};

/// Moves the terminal cursor to the top-left cell
const CURSOR_HOME: &str = "\x1b[H";

/// Per-frame rasterization counters
///
/// Every point handed to the renderer ends up in exactly one of the
/// `behind_camera`, `out_of_bounds`, `occluded` or `drawn` buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Points considered this frame
    pub points: usize,
    /// Points on or behind the camera plane
    pub behind_camera: usize,
    /// Points projecting outside the grid
    pub out_of_bounds: usize,
    /// Points hidden behind a nearer point in the same cell
    pub occluded: usize,
    /// Points written into the frame buffer
    pub drawn: usize,
}

impl FrameStats {
    fn merge(&mut self, other: &Self) {
        self.points += other.points;
        self.behind_camera += other.behind_camera;
        self.out_of_bounds += other.out_of_bounds;
        self.occluded += other.occluded;
        self.drawn += other.drawn;
    }
}

/// Character grid renderer
///
/// Owns the frame buffer, the depth buffer, the cached camera matrix and the
/// frame synchronizer. Both buffers are `height x width` and indexed by
/// `(row, column)`.
pub struct Renderer<W: Write = Stdout> {
    frame_buffer: DMatrix<char>,
    depth_buffer: DMatrix<f64>,
    camera_matrix: Mat3x4,
    frame_synchronizer: FrameSynchronizer,
    sink: W,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer drawing `width x height` frames into `sink`
    ///
    /// # Arguments
    /// * `calibration` - Camera calibration, turned into a cached camera matrix
    /// * `width` - Number of columns in the grid
    /// * `height` - Number of rows in the grid
    /// * `fps` - Target frame rate [frames / s]
    /// * `sink` - Display sink receiving each finished frame
    pub fn new(
        calibration: &CameraParameters,
        width: usize,
        height: usize,
        fps: f64,
        sink: W,
    ) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let frame_synchronizer = FrameSynchronizer::try_new(fps)?;

        log::info!(
            "Renderer created: {width}x{height} @ {fps} fps, focal length {:.2}x{:.2} px",
            calibration.intrinsic.focal_length_x,
            calibration.intrinsic.focal_length_y
        );

        Ok(Self {
            frame_buffer: DMatrix::from_element(height, width, BLANK),
            depth_buffer: DMatrix::from_element(height, width, f64::INFINITY),
            camera_matrix: camera_matrix(calibration),
            frame_synchronizer,
            sink,
        })
    }

    /// Create a renderer from a validated configuration
    pub fn from_config(config: &RendererConfig, sink: W) -> Result<Self, RenderError> {
        config.validate()?;
        Self::new(
            &config.calibration(),
            config.screen_width,
            config.screen_height,
            config.target_fps,
            sink,
        )
    }

    /// Render one frame
    ///
    /// Rasterizes every placement, waits for the frame period, then writes the
    /// frame to the display sink. The only failure is the sink refusing the write.
    pub fn render_frame(
        &mut self,
        light: &PointLight,
        placements: &[ObjectPlacement<'_>],
    ) -> Result<FrameStats, RenderError> {
        let stats = self.rasterize(light, placements);
        self.frame_synchronizer.sync();
        self.present()?;
        Ok(stats)
    }

    /// Reset both buffers and rasterize `placements` into them
    ///
    /// Does not pace or present. Calling this twice with the same inputs leaves
    /// the buffers in the same state.
    pub fn rasterize(&mut self, light: &PointLight, placements: &[ObjectPlacement<'_>]) -> FrameStats {
        self.frame_buffer.fill(BLANK);
        self.depth_buffer.fill(f64::INFINITY);

        let mut stats = FrameStats::default();
        for placement in placements {
            let object_stats = self.rasterize_object(light, placement);
            stats.merge(&object_stats);
        }

        log::debug!(
            "Rasterized {} points: {} drawn, {} occluded, {} out of bounds, {} behind camera",
            stats.points,
            stats.drawn,
            stats.occluded,
            stats.out_of_bounds,
            stats.behind_camera
        );

        stats
    }

    fn rasterize_object(&mut self, light: &PointLight, placement: &ObjectPlacement<'_>) -> FrameStats {
        let rotation = rotation_matrix(&placement.rotation);
        let mut stats = FrameStats {
            points: placement.object.len(),
            ..FrameStats::default()
        };

        for (point, normal) in placement.object.iter() {
            let world_position = affine_transform(point, &rotation, &placement.position);
            let world_normal = linear_transform(normal, &rotation);

            self.plot(light, &world_position, &world_normal, &mut stats);
        }

        stats
    }

    fn plot(&mut self, light: &PointLight, world_position: &Coordinate3D, world_normal: &Coordinate3D, stats: &mut FrameStats) {
        let Some(projection) = project(world_position, &self.camera_matrix) else {
            stats.behind_camera += 1;
            return;
        };

        let Some((row, col)) = self.cell(projection.image.x, projection.image.y) else {
            stats.out_of_bounds += 1;
            return;
        };

        // Strictly nearer only: on equal depth the first point drawn stays
        if projection.depth < self.depth_buffer[(row, col)] {
            let illumination = light.illuminate(world_position, world_normal);
            self.frame_buffer[(row, col)] = illumination_to_glyph(illumination, &PALETTE);
            self.depth_buffer[(row, col)] = projection.depth;
            stats.drawn += 1;
        } else {
            stats.occluded += 1;
        }
    }

    /// Grid cell of an image coordinate, rounded to the nearest pixel
    fn cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let col = x.round();
        let row = y.round();

        let in_bounds = col >= 0.0
            && row >= 0.0
            && col < self.frame_buffer.ncols() as f64
            && row < self.frame_buffer.nrows() as f64;

        in_bounds.then(|| (row as usize, col as usize))
    }

    /// Write the current frame buffer to the display sink
    ///
    /// Emits a cursor-home sequence followed by every row, newline-terminated.
    pub fn present(&mut self) -> Result<(), RenderError> {
        let frame = self.frame_to_string();
        self.sink.write_all(CURSOR_HOME.as_bytes())?;
        self.sink.write_all(frame.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Current frame as text, one newline-terminated line per row
    pub fn frame_to_string(&self) -> String {
        let mut result = String::with_capacity((self.width() + 1) * self.height());

        for row in self.frame_buffer.row_iter() {
            result.extend(row.iter());
            result.push('\n');
        }

        result
    }

    /// Frame buffer, indexed by `(row, column)`
    pub const fn frame_buffer(&self) -> &DMatrix<char> {
        &self.frame_buffer
    }

    /// Depth buffer, indexed by `(row, column)`; empty cells hold infinity
    pub const fn depth_buffer(&self) -> &DMatrix<f64> {
        &self.depth_buffer
    }

    /// Cached camera matrix
    pub const fn camera_matrix(&self) -> &Mat3x4 {
        &self.camera_matrix
    }

    /// Frame synchronizer pacing this renderer
    pub const fn frame_synchronizer(&self) -> &FrameSynchronizer {
        &self.frame_synchronizer
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.frame_buffer.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.frame_buffer.nrows()
    }

    /// Consume the renderer and hand back its display sink
    pub fn into_sink(self) -> W {
        self.sink
    }
}
