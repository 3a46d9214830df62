//! Fitness Evaluator: a pure function from a [`Schedule`] to a score in
//! `(0, 1]`.
//!
//! # Reference
//! Grounded on `services/ga_engine.py`'s `_fitness`. Preserves the source's
//! gap-penalty quirk verbatim (see the doc comment on [`gap_penalty`]):
//! `penalty += 15 * gap` where `gap = next_hour - hour - 1`, applied only
//! when `gap > 1`, so a single empty hour is free but two cost `2 * 15`.

use std::collections::HashMap;

use crate::config::Config;
use crate::models::Schedule;

/// `1 / (1 + total_penalty)`, or `0` for an empty schedule.
///
/// Pure: depends only on the (unordered) multiset of Assignments and the
/// supplied configuration.
pub fn fitness(schedule: &Schedule, config: &Config) -> f64 {
    if schedule.is_empty() {
        return 0.0;
    }

    let penalty = double_booking_penalty(schedule)
        + gap_penalty(schedule, &config.grid)
        + consecutive_penalty(schedule, &config.grid, config.max_consecutive)
        + instructor_imbalance_penalty(schedule, &config.grid);

    1.0 / (1.0 + penalty)
}

fn double_booking_penalty(schedule: &Schedule) -> f64 {
    let mut instructor_slots = Vec::new();
    let mut cohort_slots = Vec::new();
    let mut room_slots = Vec::new();

    for a in &schedule.assignments {
        instructor_slots.push((a.instructor_id.as_str(), a.time_slot));
        cohort_slots.push((a.cohort_id.as_str(), a.time_slot));
        room_slots.push((a.room_id.as_str(), a.time_slot));
    }

    let dup_count = |v: &[(&str, crate::models::TimeSlot)]| {
        let unique: std::collections::HashSet<_> = v.iter().cloned().collect();
        (v.len() - unique.len()) as f64
    };

    1000.0 * (dup_count(&instructor_slots) + dup_count(&cohort_slots) + dup_count(&room_slots))
}

/// Per (cohort, day), for adjacent used hours `h_i < h_{i+1}`, penalise
/// `max(0, h_{i+1} - h_i - 2)` — i.e. `gap = h_{i+1} - h_i - 1` only counts
/// once it exceeds 1 (a single free hour is not penalised).
fn gap_penalty(schedule: &Schedule, grid: &crate::models::TimeGrid) -> f64 {
    let hours_by_cohort_day = hours_by_cohort_day(schedule, grid);
    let mut penalty = 0.0;
    for mut hours in hours_by_cohort_day.into_values() {
        hours.sort_unstable();
        for pair in hours.windows(2) {
            let gap = pair[1] as i64 - pair[0] as i64 - 1;
            if gap > 1 {
                penalty += 15.0 * gap as f64;
            }
        }
    }
    penalty
}

/// Per (cohort, day), penalise the longest run of consecutive hours beyond
/// `max_consecutive` by `25 * (run - max_consecutive)`.
fn consecutive_penalty(schedule: &Schedule, grid: &crate::models::TimeGrid, max_consecutive: u32) -> f64 {
    let hours_by_cohort_day = hours_by_cohort_day(schedule, grid);
    let mut penalty = 0.0;
    for mut hours in hours_by_cohort_day.into_values() {
        hours.sort_unstable();
        hours.dedup();
        let mut longest = 0u32;
        let mut current = 0u32;
        let mut prev: Option<u32> = None;
        for h in hours {
            current = match prev {
                Some(p) if h == p + 1 => current + 1,
                _ => 1,
            };
            longest = longest.max(current);
            prev = Some(h);
        }
        if longest > max_consecutive {
            penalty += 25.0 * (longest - max_consecutive) as f64;
        }
    }
    penalty
}

/// `50 * variance(hours-per-day)` for each instructor across the week.
fn instructor_imbalance_penalty(schedule: &Schedule, grid: &crate::models::TimeGrid) -> f64 {
    let mut hours_per_instructor_day: HashMap<&str, Vec<u32>> = HashMap::new();
    for a in &schedule.assignments {
        let counts = hours_per_instructor_day
            .entry(a.instructor_id.as_str())
            .or_insert_with(|| vec![0; grid.day_count() as usize]);
        counts[a.time_slot.day as usize] += 1;
    }

    let mut penalty = 0.0;
    for counts in hours_per_instructor_day.values() {
        penalty += 50.0 * variance(counts);
    }
    penalty
}

fn variance(counts: &[u32]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
    counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / n
}

fn hours_by_cohort_day<'a>(
    schedule: &'a Schedule,
    _grid: &crate::models::TimeGrid,
) -> HashMap<(&'a str, u32), Vec<u32>> {
    let mut map: HashMap<(&str, u32), Vec<u32>> = HashMap::new();
    for a in &schedule.assignments {
        map.entry((a.cohort_id.as_str(), a.time_slot.day))
            .or_default()
            .push(a.time_slot.hour);
    }
    map
}
