//! Session orchestration.
//!
//! A [`MorphSession`] owns its projection, prepared-county set, and clock:
//! plain owned state, no singletons, so independent sessions can coexist.
//! The host's frame-presentation primitive drives it: request a frame,
//! then call [`MorphSession::tick`] with the request and the current time.
//! A resize invalidates outstanding requests, rebuilds everything
//! synchronously, and re-arms the clock.

use crate::anim::clock::{Clock, CycleConfig};
use crate::data::model::{CountyFeature, PopulationTable};
use crate::foundation::core::Viewport;
use crate::foundation::error::{CartoError, CartoResult};
use crate::geometry::prepare::{PrepareStats, PreparedCounty, prepare_counties};
use crate::geometry::projection::MapProjection;
use crate::render::plan::{FramePlan, MapStyle, compile_frame};

/// Session options.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SessionConfig {
    /// Viewport width; height is derived via the fixed aspect ratio.
    pub width: f64,
    /// Circle radius at the maximum population.
    pub max_radius: f64,
    pub cycle: CycleConfig,
    pub style: MapStyle,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            max_radius: 30.0,
            cycle: CycleConfig::default(),
            style: MapStyle::default(),
        }
    }
}

/// Token for one scheduled frame. A resize invalidates all outstanding
/// tokens, so a callback scheduled before the resize cannot fire after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest {
    generation: u64,
}

/// One animation session: projection + prepared counties + clock.
pub struct MorphSession {
    config: SessionConfig,
    features: Vec<CountyFeature>,
    population: PopulationTable,
    projection: MapProjection,
    counties: Vec<PreparedCounty>,
    stats: PrepareStats,
    clock: Clock,
    generation: u64,
}

impl MorphSession {
    /// Builds the projection and the full prepared set synchronously. The
    /// clock is armed but not started; call [`MorphSession::start`] when the
    /// host begins presenting frames.
    pub fn new(
        features: Vec<CountyFeature>,
        population: PopulationTable,
        config: SessionConfig,
    ) -> CartoResult<Self> {
        if !config.cycle.forward_secs.is_finite() || config.cycle.forward_secs <= 0.0 {
            return Err(CartoError::animation("cycle forward duration must be > 0"));
        }
        if !(config.max_radius >= 0.0) {
            return Err(CartoError::validation("max_radius must be >= 0"));
        }
        let viewport = Viewport::from_width(config.width)?;
        let projection = MapProjection::fit_viewport(viewport);
        let (counties, stats) =
            prepare_counties(&features, &population, &projection, config.max_radius);
        Ok(Self {
            clock: Clock::new(config.cycle),
            config,
            features,
            population,
            projection,
            counties,
            stats,
            generation: 0,
        })
    }

    /// (Re)starts the clock from its initial delayed state.
    pub fn start(&mut self, now_secs: f64) {
        self.clock.start(now_secs);
    }

    /// Cancels the clock and invalidates outstanding frame requests
    /// (teardown path).
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.clock.cancel();
    }

    /// Token to pass back through [`MorphSession::tick`] from the host's
    /// next frame callback.
    pub fn request_frame(&self) -> FrameRequest {
        FrameRequest {
            generation: self.generation,
        }
    }

    /// One frame: sample the clock, compile the draw ops. Returns `None`
    /// when the request predates a resize or cancel.
    pub fn tick(&self, request: FrameRequest, now_secs: f64) -> Option<FramePlan> {
        if request.generation != self.generation {
            return None;
        }
        let t = self.clock.value(now_secs);
        Some(compile_frame(
            &self.counties,
            t,
            self.projection.viewport(),
            &self.config.style,
        ))
    }

    /// Full-state invalidation: cancels any pending frame, rebuilds the
    /// projection and prepared set against the new width, and restarts the
    /// clock if it was running.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, width: f64, now_secs: f64) -> CartoResult<()> {
        let viewport = Viewport::from_width(width)?;
        self.generation += 1;
        let was_running = self.clock.is_running();
        self.clock.cancel();

        self.config.width = width;
        self.projection = MapProjection::fit_viewport(viewport);
        let (counties, stats) = prepare_counties(
            &self.features,
            &self.population,
            &self.projection,
            self.config.max_radius,
        );
        self.counties = counties;
        self.stats = stats;

        if was_running {
            self.clock.start(now_secs);
        }
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.projection.viewport()
    }

    pub fn projection(&self) -> &MapProjection {
        &self.projection
    }

    pub fn counties(&self) -> &[PreparedCounty] {
        &self.counties
    }

    pub fn stats(&self) -> PrepareStats {
        self.stats
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/orchestrator.rs"]
mod tests;
