//! Per-frame draw-op compilation.
//!
//! A frame is compiled into a backend-agnostic [`FramePlan`], an ordered
//! list of fill/stroke operations, and executed against whatever
//! [`crate::render::surface::DrawSurface`] the host provides.

use crate::foundation::core::{BezPath, Ring, Rgba8, Viewport};
use crate::geometry::prepare::PreparedCounty;

/// Fixed map style. Not data-dependent: one fill, one stroke, one width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapStyle {
    pub fill: Rgba8,
    pub stroke: Rgba8,
    pub stroke_width: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            fill: Rgba8::from_rgb(204, 204, 204),
            stroke: Rgba8::from_rgb(51, 51, 51),
            stroke_width: 0.75,
        }
    }
}

/// Draw operation emitted by the frame compiler.
#[derive(Clone, Debug)]
pub enum DrawOp {
    FillPath {
        path: BezPath,
        color: Rgba8,
        alpha: f32,
    },
    StrokePath {
        path: BezPath,
        color: Rgba8,
        width: f64,
        alpha: f32,
    },
}

/// One compiled frame: the sampled `t` and the ordered draw operations.
#[derive(Clone, Debug)]
pub struct FramePlan {
    pub viewport: Viewport,
    pub t: f64,
    pub ops: Vec<DrawOp>,
}

/// Compiles a frame at time `t` over the prepared set (already in draw
/// order).
///
/// - `t <= 0`: the raw map, every projected ring, tiny included.
/// - `t >= 1`: each county's circle only.
/// - otherwise: tiny rings fading out over the first half of the leg
///   (`alpha = max(1 - 2t, 0)`), plus the interpolator output at full
///   opacity.
pub fn compile_frame(
    counties: &[PreparedCounty],
    t: f64,
    viewport: Viewport,
    style: &MapStyle,
) -> FramePlan {
    let mut ops = Vec::new();
    for county in counties {
        if t <= 0.0 {
            push_shape(&mut ops, county.rings.iter(), style, 1.0);
        } else if t >= 1.0 {
            push_shape(&mut ops, std::iter::once(&county.circle), style, 1.0);
        } else {
            if t < 0.5 {
                let alpha = (1.0 - 2.0 * t).max(0.0) as f32;
                if alpha > 0.0 && !county.tiny.is_empty() {
                    push_shape(&mut ops, county.tiny_rings(), style, alpha);
                }
            }
            let rings = county.morph.sample(t);
            push_shape(&mut ops, rings.iter(), style, 1.0);
        }
    }
    FramePlan { viewport, t, ops }
}

/// One filled + stroked multi-subpath shape.
fn push_shape<'a>(
    ops: &mut Vec<DrawOp>,
    rings: impl Iterator<Item = &'a Ring>,
    style: &MapStyle,
    alpha: f32,
) {
    let path = rings_to_path(rings);
    if path.elements().is_empty() {
        return;
    }
    ops.push(DrawOp::FillPath {
        path: path.clone(),
        color: style.fill,
        alpha,
    });
    ops.push(DrawOp::StrokePath {
        path,
        color: style.stroke,
        width: style.stroke_width,
        alpha,
    });
}

/// Builds one path with a closed subpath per ring. Non-finite points are
/// skipped defensively (a second net beyond the preprocessor's filtering).
fn rings_to_path<'a>(rings: impl Iterator<Item = &'a Ring>) -> BezPath {
    let mut path = BezPath::new();
    for ring in rings {
        let mut started = false;
        for point in ring.points() {
            if !point.x.is_finite() || !point.y.is_finite() {
                continue;
            }
            if started {
                path.line_to(*point);
            } else {
                path.move_to(*point);
                started = true;
            }
        }
        if started {
            path.close_path();
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
