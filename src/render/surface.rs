use crate::foundation::core::{BezPath, Rgba8, Viewport};
use crate::render::plan::{DrawOp, FramePlan};

/// Host-provided 2D drawing surface. The engine only ever fills and strokes
/// paths; everything else (windowing, presentation) belongs to the host.
pub trait DrawSurface {
    fn begin_frame(&mut self, viewport: Viewport);
    fn fill_path(&mut self, path: &BezPath, color: Rgba8, alpha: f32);
    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64, alpha: f32);
    fn end_frame(&mut self);
}

/// Walks a compiled plan into a surface, in op order.
pub fn execute_plan(plan: &FramePlan, surface: &mut dyn DrawSurface) {
    surface.begin_frame(plan.viewport);
    for op in &plan.ops {
        match op {
            DrawOp::FillPath { path, color, alpha } => surface.fill_path(path, *color, *alpha),
            DrawOp::StrokePath {
                path,
                color,
                width,
                alpha,
            } => surface.stroke_path(path, *color, *width, *alpha),
        }
    }
    surface.end_frame();
}

/// Recorded draw call, kept cheap for assertions.
#[derive(Clone, Debug)]
pub enum RecordedOp {
    Fill {
        path: BezPath,
        color: Rgba8,
        alpha: f32,
    },
    Stroke {
        path: BezPath,
        color: Rgba8,
        width: f64,
        alpha: f32,
    },
}

/// One recorded frame.
#[derive(Clone, Debug)]
pub struct RecordedFrame {
    pub viewport: Viewport,
    pub ops: Vec<RecordedOp>,
}

/// In-memory surface for tests and headless hosts. Frames are appended in
/// completion order; an unmatched `begin_frame` replaces the open frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<RecordedFrame>,
    open: Option<RecordedFrame>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_frame(&mut self, viewport: Viewport) {
        self.open = Some(RecordedFrame {
            viewport,
            ops: Vec::new(),
        });
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8, alpha: f32) {
        if let Some(frame) = self.open.as_mut() {
            frame.ops.push(RecordedOp::Fill {
                path: path.clone(),
                color,
                alpha,
            });
        }
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64, alpha: f32) {
        if let Some(frame) = self.open.as_mut() {
            frame.ops.push(RecordedOp::Stroke {
                path: path.clone(),
                color,
                width,
                alpha,
            });
        }
    }

    fn end_frame(&mut self) {
        if let Some(frame) = self.open.take() {
            self.frames.push(frame);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
