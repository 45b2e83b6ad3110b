//! Rendering of the slot-usage report and the CSV occupancy matrix.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::MeetingError;
use crate::slots::CapacityGrid;
use crate::types::{day_name, SlotConfig, WEEKDAYS};

/// Write the near-capacity report for every reportable slot.
///
/// A slot is reportable when its per-fortnight occupancy reaches
/// `2 * channels - sensitivity`. The occupancy test counts duplicate
/// contributions from multi-week weighting; the listing under each slot
/// is deduplicated and sorted.
pub fn render_text_report<W: Write>(
    out: &mut W,
    grid: &CapacityGrid,
    config: &SlotConfig,
    sensitivity: usize,
) -> io::Result<()> {
    let available_slots = config.total_slots();
    let full_time_slot = available_slots.saturating_sub(sensitivity);

    writeln!(out, "Day\tUTC Hour")?;
    for day in WEEKDAYS {
        for hour in 0..24u8 {
            let slot_usage = grid.occupancy(day, hour);
            if slot_usage < full_time_slot {
                continue;
            }
            writeln!(
                out,
                "{:<10} {:02}:00{:>4} out of {} slots full",
                day_name(day),
                hour,
                slot_usage,
                available_slots
            )?;
            let mut labels: Vec<&str> = grid.cell(day, hour).iter().map(String::as_str).collect();
            labels.sort_unstable();
            labels.dedup();
            for label in labels {
                writeln!(out, "    {}", label)?;
            }
        }
    }
    Ok(())
}

/// Write the raw occupancy matrix as CSV: one row per hour, one column
/// per weekday in canonical order, duplicate contributions included.
///
/// Returns the resolved destination path.
pub fn write_csv(path: &Path, grid: &CapacityGrid) -> Result<PathBuf, MeetingError> {
    let path = expand_user(path);
    let mut writer = csv::Writer::from_path(&path).map_err(|e| MeetingError::CsvWrite {
        path: path.clone(),
        source: e,
    })?;

    let mut header = vec!["Hour".to_string()];
    header.extend(WEEKDAYS.iter().map(|&day| day_name(day).to_string()));
    write_row(&mut writer, &path, &header)?;

    for hour in 0..24u8 {
        let mut row = vec![hour.to_string()];
        row.extend(WEEKDAYS.iter().map(|&day| grid.occupancy(day, hour).to_string()));
        write_row(&mut writer, &path, &row)?;
    }

    writer.flush().map_err(|e| MeetingError::CsvWrite {
        path: path.clone(),
        source: e.into(),
    })?;
    Ok(path)
}

fn write_row(writer: &mut csv::Writer<std::fs::File>, path: &Path, row: &[String]) -> Result<(), MeetingError> {
    writer.write_record(row).map_err(|e| MeetingError::CsvWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Expand a leading `~` to the user's home directory.
fn expand_user(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
