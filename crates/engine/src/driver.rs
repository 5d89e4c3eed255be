//! Frame driver: one reset, draw, shade, present cycle per displayed frame.
//!
//! ```text
//! Init --frame()--> Frame --frame()--> Frame ... --shutdown() / output error--> Exit
//! ```
//!
//! The driver owns the only state that outlives a frame: the cell buffer
//! (and the reusable encoding buffer). Segments are projected and
//! rasterized as the scene emits them and never stored.

use log::{error, info, trace};

use crate::config::RenderConfig;
use crate::core::{Camera, CellBuffer, LineRasterizer, Projector, RenderError, Scene};
use crate::term::{FrameEncoder, FrameOutput};
use crate::types::CameraAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Buffers allocated, nothing shown yet.
    Init,
    /// At least one frame presented; more may follow.
    Frame,
    /// Finished, by request or after a fatal output error.
    Exit,
}

/// Per-frame rasterization counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Segments emitted by the scene.
    pub segments: usize,
    /// Segments that reached the rasterizer and were scanned.
    pub drawn: usize,
    /// Segments dropped: behind the viewer or outside the drawable interior.
    pub rejected: usize,
    /// Cells visited by the rasterizer (before depth testing).
    pub cells: usize,
}

pub struct FrameDriver {
    config: RenderConfig,
    buffer: CellBuffer,
    projector: Projector,
    raster: LineRasterizer,
    camera: Camera,
    encoder: FrameEncoder,
    state: DriverState,
    frames: u64,
    last_stats: FrameStats,
}

impl FrameDriver {
    /// Allocate the cell buffer and frame encoder for a `width` x `height` area.
    pub fn new(config: RenderConfig, width: u16, height: u16) -> Result<Self, RenderError> {
        let buffer = CellBuffer::new(width, height, config.max_render)?;
        let encoder = FrameEncoder::new(width, height)?;
        info!(
            "frame driver ready: {}x{} cells, max render {}",
            width, height, config.max_render
        );

        Ok(Self {
            config,
            buffer,
            projector: Projector::for_buffer(width, height),
            raster: LineRasterizer::default(),
            camera: Camera::default(),
            encoder,
            state: DriverState::Init,
            frames: 0,
            last_stats: FrameStats::default(),
        })
    }

    pub fn with_rasterizer(mut self, raster: LineRasterizer) -> Self {
        self.raster = raster;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn buffer(&self) -> &CellBuffer {
        &self.buffer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Apply one input command; takes effect from the next frame.
    pub fn apply(&mut self, action: CameraAction) {
        self.camera.apply(action);
    }

    /// Reset the cell buffer and rasterize every segment the scene emits.
    pub fn draw_scene<S: Scene + ?Sized>(&mut self, scene: &mut S) -> FrameStats {
        let Self {
            buffer,
            projector,
            raster,
            camera,
            ..
        } = self;

        buffer.reset();
        projector.set_zoom(camera.zoom());

        let mut stats = FrameStats::default();
        scene.segments(&mut |seg| {
            stats.segments += 1;
            let p0 = projector.project(camera.to_view(seg.start));
            let p1 = projector.project(camera.to_view(seg.end));
            let visited = match (p0, p1) {
                (Some(p0), Some(p1)) => raster.draw_line(buffer, p0, p1, seg.color),
                _ => 0,
            };
            if visited > 0 {
                stats.drawn += 1;
                stats.cells += visited;
            } else {
                stats.rejected += 1;
            }
        });

        self.last_stats = stats;
        stats
    }

    /// Draw the scene and compose it into the escape-coded frame buffer.
    pub fn render<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Result<&[u8], RenderError> {
        self.draw_scene(scene);
        self.encoder.encode(&self.buffer)
    }

    /// Run one full frame and present it.
    ///
    /// An output failure moves the driver to [`DriverState::Exit`]. After
    /// exit, further calls draw nothing.
    pub fn frame<S, O>(&mut self, scene: &mut S, out: &mut O) -> Result<(), RenderError>
    where
        S: Scene + ?Sized,
        O: FrameOutput + ?Sized,
    {
        if self.state == DriverState::Exit {
            return Ok(());
        }
        self.state = DriverState::Frame;

        let result = self.render(scene).and_then(|bytes| out.present(bytes));
        match &result {
            Ok(()) => {
                self.frames += 1;
                trace!("frame {}: {:?}", self.frames, self.last_stats);
            }
            Err(e) => {
                error!("frame {} failed: {}", self.frames + 1, e);
                self.state = DriverState::Exit;
            }
        }
        result
    }

    pub fn shutdown(&mut self) {
        if self.state != DriverState::Exit {
            info!("frame driver exiting after {} frames", self.frames);
        }
        self.state = DriverState::Exit;
    }
}
