//! Cartomorph renders a continuously looping animation that morphs a county
//! choropleth into a population cartogram (one circle per county) and back.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: `CountyFeature + PopulationTable + MapProjection ->
//!    PreparedCounty` (projected rings, dominant/tiny analysis, centroid,
//!    radius, target circle, morph interpolator), built once and read-only
//!    afterwards.
//! 2. **Sample**: the `Clock` turns injected wall-clock seconds into an
//!    oscillating `t` in `[0, 1]` (delayed, eased, yoyo, infinite).
//! 3. **Compile**: `PreparedCounty set + t -> FramePlan` (backend-agnostic
//!    fill/stroke ops).
//! 4. **Draw**: `execute_plan` walks the ops into the host's `DrawSurface`.
//!
//! The `MorphSession` wires the stages together and reacts to viewport
//! resizes by rebuilding the prepared set wholesale.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: preparation and morph construction are
//!   pure and stable for a given input; point correspondences are fixed at
//!   construction, never recomputed per frame.
//! - **No IO**: features and population rows come from an external loader;
//!   frames go to an external drawing surface; time is injected.
#![forbid(unsafe_code)]

mod anim;
mod data;
mod foundation;
mod geometry;
mod morph;
mod render;
mod session;

pub use anim::clock::{Clock, CycleConfig, LoopMode};
pub use anim::ease::Ease;
pub use data::model::{CountyFeature, CountyGeometry, GeoRing, PopulationTable};
pub use foundation::core::{
    BezPath, CountyId, Point, Rgba8, Ring, StateId, VIEWPORT_ASPECT, Vec2, Viewport,
};
pub use foundation::error::{CartoError, CartoResult};
pub use geometry::circle::{circle_ring, segment_count};
pub use geometry::prepare::{
    PrepareStats, PreparedCounty, TINY_RING_AREA, prepare_counties,
};
pub use geometry::projection::MapProjection;
pub use morph::builder::{MorphBuild, MorphInterpolator, build_morph};
pub use render::plan::{DrawOp, FramePlan, MapStyle, compile_frame};
pub use render::surface::{
    DrawSurface, RecordedFrame, RecordedOp, RecordingSurface, execute_plan,
};
pub use session::orchestrator::{FrameRequest, MorphSession, SessionConfig};
