//! Subscriber trait and the two shipped observers
//!
//! Subscribers are stateless apart from their trigger threshold. They are
//! handed a [`Progress`] snapshot after every successful step and write any
//! notice straight to the source's output sink.

use std::io::{self, Write};

use tracing::debug;

use crate::direction::Direction;

/// Default tens digit that [`HalfwayNotice`] reacts to (50-59%)
pub const DEFAULT_HALFWAY_BAND: u8 = 5;

/// Default percentage at which [`AlmostDone`] starts firing
pub const DEFAULT_ALMOST_DONE_THRESHOLD: u8 = 90;

/// Read-only view of a traversal's progress, passed to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Whole-percent completion, truncated (0-100)
    pub percent: u8,
    /// Items yielded so far
    pub visited: usize,
    /// Items in the collection
    pub total: usize,
    pub direction: Direction,
}

impl Progress {
    /// Completion for `visited` out of `total` items, truncated toward zero
    ///
    /// `visited` is clamped to `total`, so the percent never exceeds 100.
    /// An empty collection reports 0.
    pub fn compute(visited: usize, total: usize, direction: Direction) -> Self {
        let visited = visited.min(total);
        let percent = if total == 0 {
            0
        } else {
            u8::try_from(visited * 100 / total).unwrap_or(100)
        };
        Self {
            percent,
            visited,
            total,
            direction,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }
}

/// Something that reacts to progress updates from a traversal
pub trait Subscriber {
    /// Short label used in logs and errors
    fn name(&self) -> &str;

    /// React to a new progress value
    ///
    /// Called synchronously, in attachment order, after every successful step.
    fn update(&self, progress: &Progress, out: &mut dyn Write) -> io::Result<()>;
}

/// Announces the halfway mark whenever progress sits in a given tens band
#[derive(Debug, Clone)]
pub struct HalfwayNotice {
    band: u8,
}

impl HalfwayNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire when `percent / 10 == band`
    pub fn with_band(band: u8) -> Self {
        debug!(%band, "HalfwayNotice::with_band: called");
        Self { band }
    }

    pub fn band(&self) -> u8 {
        self.band
    }

    pub fn triggers(&self, progress: &Progress) -> bool {
        progress.percent / 10 == self.band
    }
}

impl Default for HalfwayNotice {
    fn default() -> Self {
        Self::with_band(DEFAULT_HALFWAY_BAND)
    }
}

impl Subscriber for HalfwayNotice {
    fn name(&self) -> &str {
        "halfway"
    }

    fn update(&self, progress: &Progress, out: &mut dyn Write) -> io::Result<()> {
        debug!(percent = progress.percent, band = self.band, "HalfwayNotice::update: called");
        if self.triggers(progress) {
            debug!("HalfwayNotice::update: in band, announcing");
            writeln!(out, "Phew, halfway there!")?;
        }
        Ok(())
    }
}

/// Cheers the walker on once progress reaches a threshold
///
/// Fires on every update at or above the threshold, so short collections
/// can hear it more than once.
#[derive(Debug, Clone)]
pub struct AlmostDone {
    threshold: u8,
}

impl AlmostDone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: u8) -> Self {
        debug!(%threshold, "AlmostDone::with_threshold: called");
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn triggers(&self, progress: &Progress) -> bool {
        progress.percent >= self.threshold
    }
}

impl Default for AlmostDone {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_ALMOST_DONE_THRESHOLD)
    }
}

impl Subscriber for AlmostDone {
    fn name(&self) -> &str {
        "almost-done"
    }

    fn update(&self, progress: &Progress, out: &mut dyn Write) -> io::Result<()> {
        debug!(
            percent = progress.percent,
            threshold = self.threshold,
            "AlmostDone::update: called"
        );
        if self.triggers(progress) {
            debug!("AlmostDone::update: threshold reached, announcing");
            writeln!(out, "Come on, just a little more!!!")?;
        }
        Ok(())
    }
}
