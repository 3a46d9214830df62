//! Time slot and weekly time grid.
//!
//! A [`TimeSlot`] is a `(day, hour)` pair drawn from a configurable grid of
//! `D` working days and `H` hours per day. The grid is totally ordered by
//! `day * hours_per_day + hour`, which lets slots be sorted and compared
//! without carrying the grid shape on every value.

use serde::{Deserialize, Serialize};

/// A single cell of the weekly scheduling grid: a zero-based day index and a
/// one-based hour-of-day index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Zero-based index into [`TimeGrid::days`].
    pub day: u32,
    /// One-based hour of day, in `1..=hours_per_day`.
    pub hour: u32,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: u32, hour: u32) -> Self {
        Self { day, hour }
    }

    /// Ordinal position within a grid of the given width, for total ordering.
    pub fn ordinal(&self, hours_per_day: u32) -> u32 {
        self.day * hours_per_day + self.hour
    }
}

/// The shape of the weekly scheduling grid: named working days and a
/// uniform number of teaching hours per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeGrid {
    /// Working day names, e.g. `["Mon", "Tue", ...]`. Index is `day`.
    pub days: Vec<String>,
    /// Teaching hours per day (hour indices run `1..=hours_per_day`).
    pub hours_per_day: u32,
}

impl TimeGrid {
    /// Creates a grid from day names and an hours-per-day count.
    pub fn new(days: Vec<String>, hours_per_day: u32) -> Self {
        Self { days, hours_per_day }
    }

    /// Default Mon-Fri, 6 hours/day grid (matches [`crate::Config::default`]).
    pub fn default_week() -> Self {
        Self {
            days: ["Mon", "Tue", "Wed", "Thu", "Fri"]
                .into_iter()
                .map(String::from)
                .collect(),
            hours_per_day: 6,
        }
    }

    /// Number of working days.
    pub fn day_count(&self) -> u32 {
        self.days.len() as u32
    }

    /// All time slots in grid order: day-major, hour-minor.
    pub fn all_slots(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::with_capacity(self.day_count() as usize * self.hours_per_day as usize);
        for day in 0..self.day_count() {
            for hour in 1..=self.hours_per_day {
                slots.push(TimeSlot::new(day, hour));
            }
        }
        slots
    }

    /// Total ordinal position of a slot in this grid.
    pub fn ordinal(&self, slot: TimeSlot) -> u32 {
        slot.ordinal(self.hours_per_day)
    }
}
