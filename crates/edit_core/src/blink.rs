//! Caret blink timer.

use std::time::Duration;

/// Time between two caret visibility flips.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug)]
pub(crate) struct CaretBlink {
    elapsed: Duration,
    visible: bool,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            visible: true,
        }
    }
}

impl CaretBlink {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show the caret and restart the interval.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.visible = true;
    }

    /// Advance by `dt`. Returns `true` when the visibility flipped.
    ///
    /// At most one flip happens per call, however long `dt` is.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed < BLINK_INTERVAL {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.visible = !self.visible;
        true
    }
}
