//! Oscillating animation clock.
//!
//! The clock never reads a wall clock: hosts inject the current time in
//! seconds, so a deterministic test clock is just a sequence of `now`
//! values fed to [`Clock::value`].

use crate::anim::ease::Ease;
use crate::foundation::error::{CartoError, CartoResult};

/// Loop behavior after the first forward leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    /// Sawtooth: restart each leg from 0.
    Repeat,
    /// Yoyo: autoreverse 1 -> 0, then repeat. The default.
    PingPong,
}

/// Cycle parameters: one eased forward leg 0 -> 1 over `forward_secs`,
/// preceded by an initial hold of `delay_secs`, then looping per `mode`
/// indefinitely.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CycleConfig {
    pub forward_secs: f64,
    pub delay_secs: f64,
    pub ease: Ease,
    pub mode: LoopMode,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            forward_secs: 5.0,
            delay_secs: 2.5,
            ease: Ease::smooth(),
            mode: LoopMode::PingPong,
        }
    }
}

impl CycleConfig {
    /// Config with the given forward duration and the standard start delay
    /// of half a forward leg.
    pub fn with_forward(forward_secs: f64) -> CartoResult<Self> {
        if !forward_secs.is_finite() || forward_secs <= 0.0 {
            return Err(CartoError::animation("forward duration must be > 0"));
        }
        Ok(Self {
            forward_secs,
            delay_secs: forward_secs / 2.0,
            ..Self::default()
        })
    }

    /// Eased oscillating value at `elapsed_secs` since the clock started.
    pub fn value_at(&self, elapsed_secs: f64) -> f64 {
        if !elapsed_secs.is_finite() || elapsed_secs < self.delay_secs {
            return 0.0;
        }
        let d = self.forward_secs;
        if d <= 0.0 {
            return 0.0;
        }
        let e = elapsed_secs - self.delay_secs;
        let linear = match self.mode {
            LoopMode::Repeat => (e / d).fract(),
            LoopMode::PingPong => {
                let cycle = 2.0 * d;
                let phase = e % cycle;
                if phase <= d { phase / d } else { (cycle - phase) / d }
            }
        };
        self.ease.apply(linear)
    }
}

/// Oscillating clock over injected wall-clock seconds. Holds only the start
/// timestamp; `cancel`/`start` fully reset state.
#[derive(Clone, Debug)]
pub struct Clock {
    config: CycleConfig,
    started_at: Option<f64>,
}

impl Clock {
    pub fn new(config: CycleConfig) -> Self {
        Self {
            config,
            started_at: None,
        }
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// (Re)begins the cycle from the initial delayed state.
    pub fn start(&mut self, now_secs: f64) {
        self.started_at = Some(now_secs);
    }

    /// Stops deterministically; a stopped clock reads 0.
    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current `t` in `[0, 1]` on demand.
    pub fn value(&self, now_secs: f64) -> f64 {
        match self.started_at {
            Some(started) => self.config.value_at((now_secs - started).max(0.0)),
            None => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/clock.rs"]
mod tests;
