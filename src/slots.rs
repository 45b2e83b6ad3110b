//! Occurrence expansion and slot accumulation.
//!
//! Slot counts are gathered per fortnight, so a weekly meeting takes up
//! two slots in its cell and an alternating (biweekly) meeting only one.
//! A full cell is one holding `2 * channels` occurrences.

use chrono::{Datelike, Utc, Weekday};

use crate::error::MeetingError;
use crate::types::{Meeting, ScheduleEntry, SlotConfig};

/// One (weekday, hour) grid cell occupied by a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub day: Weekday,
    pub hour: u8,
    /// Occurrences contributed to the cell per fortnight.
    pub weight: u32,
}

/// Expand a schedule entry into the grid cells it occupies.
///
/// Produces nothing for unmonitored channels and zero-weight (ad hoc)
/// frequencies. A meeting whose duration crosses the hour boundary also
/// occupies the following hour; the hour wraps mod 24 without moving to
/// the next weekday. Meetings longer than an hour still only spill into
/// the immediately following slot, a deliberate undercount.
pub fn expand_entry(entry: &ScheduleEntry, config: &SlotConfig) -> Vec<Occurrence> {
    if !config.is_monitored(&entry.channel) {
        return Vec::new();
    }

    let weight = entry.frequency.fortnight_weight();
    if weight == 0 {
        return Vec::new();
    }

    let mut occurrences = vec![Occurrence {
        day: entry.weekday,
        hour: entry.time.hour,
        weight,
    }];
    if u32::from(entry.time.minute) + entry.duration_minutes > 60 {
        occurrences.push(Occurrence {
            day: entry.weekday,
            hour: (entry.time.hour + 1) % 24,
            weight,
        });
    }
    occurrences
}

/// A 7x24 grid of contribution labels, indexed by (weekday, hour).
///
/// Every cell starts empty; each fortnight occurrence of a meeting
/// appends one copy of its contribution label.
#[derive(Debug, Clone, Default)]
pub struct CapacityGrid {
    cells: [[Vec<String>; 24]; 7],
}

impl CapacityGrid {
    pub fn new() -> Self {
        CapacityGrid::default()
    }

    fn day_index(day: Weekday) -> usize {
        day.num_days_from_monday() as usize
    }

    pub fn push(&mut self, day: Weekday, hour: u8, label: String) {
        self.cells[Self::day_index(day)][usize::from(hour)].push(label);
    }

    /// Contribution labels in the cell, duplicates included.
    pub fn cell(&self, day: Weekday, hour: u8) -> &[String] {
        &self.cells[Self::day_index(day)][usize::from(hour)]
    }

    /// Occurrences in the cell per fortnight, duplicates included.
    pub fn occupancy(&self, day: Weekday, hour: u8) -> usize {
        self.cell(day, hour).len()
    }
}

/// The finished grid plus the number of schedule entries skipped as
/// malformed.
#[derive(Debug)]
pub struct SlotUsage {
    pub grid: CapacityGrid,
    pub skipped: usize,
}

/// Fold every meeting's schedules into a capacity grid.
///
/// Malformed entries (missing fields, bad weekday, bad time) are logged
/// with their payload and skipped. An unknown frequency code aborts the
/// run: silently assigning it a weight would corrupt the counts.
pub fn accumulate(meetings: &[Meeting], config: &SlotConfig) -> Result<SlotUsage, MeetingError> {
    accumulate_for_year(meetings, config, Utc::now().year())
}

/// Same as [`accumulate`], with the archive-label year pinned for
/// deterministic output.
pub fn accumulate_for_year(
    meetings: &[Meeting],
    config: &SlotConfig,
    year: i32,
) -> Result<SlotUsage, MeetingError> {
    let mut grid = CapacityGrid::new();
    let mut skipped = 0;

    for meeting in meetings {
        let label = meeting.info_label(year);
        for schedule in &meeting.schedule {
            let entry = match ScheduleEntry::try_from(schedule) {
                Ok(entry) => entry,
                Err(e) if e.is_recoverable() => {
                    log::warn!(
                        "{}: skipping schedule entry: {} (entry: {:?})",
                        meeting.filefrom.display(),
                        e,
                        schedule
                    );
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if entry.duration_minutes > 60 {
                log::warn!(
                    "{}: meeting longer than 60 minutes only counts against the \
                     following hour (entry: {:?})",
                    meeting.filefrom.display(),
                    schedule
                );
            }

            let occurrences = expand_entry(&entry, config);
            if occurrences.is_empty() {
                continue;
            }

            let info = contribution_label(&entry, &label);
            for occurrence in occurrences {
                for _ in 0..occurrence.weight {
                    grid.push(occurrence.day, occurrence.hour, info.clone());
                }
            }
        }
    }

    Ok(SlotUsage { grid, skipped })
}

/// Line identifying a meeting inside a cell listing.
fn contribution_label(entry: &ScheduleEntry, meeting_label: &str) -> String {
    format!(
        "{:<13} - {} - {:<21} - {}",
        entry.frequency.code(),
        entry.time_spec,
        entry.channel,
        meeting_label
    )
}
