//! Simulated live emission telemetry.
//!
//! A rolling window of emission samples driven by a bounded random walk,
//! for dashboards that want a live-looking feed without a real sensor.
//! The caller owns the RNG, so a seeded generator makes the feed fully
//! reproducible.

use std::collections::VecDeque;

use rand::Rng;

/// Number of samples kept in the window.
pub const FEED_WINDOW: usize = 20;

/// Target emission level in tonnes CO₂e.
pub const TARGET_LEVEL: f64 = 48.0;

const FLOOR: f64 = 35.0;
const CEILING: f64 = 65.0;

/// Qualitative level of the latest sample relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Good,
    Medium,
    High,
}

/// Rolling window of simulated emission samples.
#[derive(Debug, Clone)]
pub struct EmissionFeed {
    samples: VecDeque<f64>,
}

impl EmissionFeed {
    /// Creates a feed pre-filled with `FEED_WINDOW` samples in [40, 60).
    pub fn new(rng: &mut impl Rng) -> Self {
        let samples = (0..FEED_WINDOW)
            .map(|_| rng.gen_range(40.0..60.0))
            .collect();
        Self { samples }
    }

    /// Advances the walk by one step and returns the new sample.
    ///
    /// The next value is the previous one plus a small trend and a larger
    /// random variation, clamped to [35, 65]. The oldest sample drops out
    /// once the window is full.
    pub fn advance(&mut self, rng: &mut impl Rng) -> f64 {
        let last = self.samples.back().copied().unwrap_or(50.0);
        let trend = (rng.gen_range(0.0..1.0) - 0.5) * 0.4;
        let variation = (rng.gen_range(0.0..1.0) - 0.5) * 3.0;
        let next = (last + trend + variation).clamp(FLOOR, CEILING);

        self.samples.push_back(next);
        if self.samples.len() > FEED_WINDOW {
            self.samples.pop_front();
        }
        next
    }

    /// Most recent sample.
    pub fn latest(&self) -> f64 {
        self.samples.back().copied().unwrap_or(50.0)
    }

    /// Samples from oldest to newest.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Target level for display alongside the samples.
    pub fn target(&self) -> f64 {
        TARGET_LEVEL
    }

    /// Status of the latest sample: above 52 is high, above 48 medium.
    pub fn status(&self) -> FeedStatus {
        let value = self.latest();
        if value > 52.0 {
            FeedStatus::High
        } else if value > TARGET_LEVEL {
            FeedStatus::Medium
        } else {
            FeedStatus::Good
        }
    }
}
