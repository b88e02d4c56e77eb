//! Time management utilities

use crate::render::RenderError;
use std::time::{Duration, Instant};

/// Sleep-based frame pacer
///
/// Each call to [`sync`](Self::sync) blocks until at least one frame period has
/// passed since the previous call returned. Frames that overran the period are
/// not compensated for; the next frame simply starts late.
#[derive(Debug)]
pub struct FrameSynchronizer {
    period: Duration,
    previous_frame: Instant,
    frame_count: u64,
    overrun_count: u64,
}

impl FrameSynchronizer {
    /// Create a synchronizer targeting `fps` frames per second
    ///
    /// # Panics
    /// Panics if `fps` is not a finite positive number.
    pub fn new(fps: f64) -> Self {
        assert!(fps.is_finite() && fps > 0.0, "frame rate must be positive, got {fps}");
        Self::with_period(Duration::from_nanos((1e9 / fps) as u64))
    }

    /// Fallible variant of [`new`](Self::new)
    pub fn try_new(fps: f64) -> Result<Self, RenderError> {
        if fps.is_finite() && fps > 0.0 {
            Ok(Self::new(fps))
        } else {
            Err(RenderError::InvalidFrameRate(fps))
        }
    }

    fn with_period(period: Duration) -> Self {
        Self {
            period,
            previous_frame: Instant::now(),
            frame_count: 0,
            overrun_count: 0,
        }
    }

    /// Block until one frame period has passed since the previous sync
    ///
    /// The first call measures from construction time.
    pub fn sync(&mut self) {
        let elapsed = self.previous_frame.elapsed();

        if let Some(remaining) = self.period.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        } else {
            self.overrun_count += 1;
            log::debug!(
                "Frame {} overran its period: {:.2} ms > {:.2} ms",
                self.frame_count,
                elapsed.as_secs_f64() * 1000.0,
                self.period.as_secs_f64() * 1000.0
            );
        }

        self.previous_frame = Instant::now();
        self.frame_count += 1;
    }

    /// Target frame period
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Number of completed sync calls
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of frames that took longer than the period
    pub const fn overrun_count(&self) -> u64 {
        self.overrun_count
    }
}
