//! Half-open hour intervals on a single calendar day.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The hours `[start, end)` occupied by a booking.
///
/// A booking of hours `{14, 15, 16}` occupies `[14, 17)`; two windows that
/// merely touch (`[14, 16)` and `[16, 18)`) do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: i32,
    pub end: i32,
}

impl HourWindow {
    /// Window starting at `start` and lasting `duration` hours.
    pub fn new(start: i32, duration: i32) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Number of hours covered.
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Half-open interval intersection test.
    pub fn overlaps(&self, other: &HourWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, hour: i32) -> bool {
        self.start <= hour && hour < self.end
    }

    /// The individual hours in the window.
    pub fn hours(&self) -> std::ops::Range<i32> {
        self.start..self.end
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}
