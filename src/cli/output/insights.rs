use std::io::{self, Write};

use ansi_term::Colour;

use crate::{tracker::state::DailyState, utils::format::format_number};

use super::bar;

/// Largest bar value. Longer activities are still drawn at this size.
const BAR_CAP: f64 = 250.;
/// Bar units per terminal cell.
const UNITS_PER_CELL: f64 = 10.;
const BAR_WIDTH: usize = (BAR_CAP / UNITS_PER_CELL) as usize;

fn cells(units: f64) -> usize {
    (units.clamp(0., BAR_CAP) / UNITS_PER_CELL).round() as usize
}

/// Draws per-activity bars for duration (3 units per minute) and burned calories (1 unit per 2
/// calories).
pub fn write_insights(out: &mut impl Write, state: &DailyState, color: bool) -> io::Result<()> {
    if state.activities.is_empty() {
        writeln!(out, "No activity data for today's charts.")?;
        return Ok(());
    }

    let name_width = state
        .activities
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(out, "Activity duration")?;
    for activity in &state.activities {
        writeln!(
            out,
            "  {:<name_width$}  {}  {} min",
            activity.name,
            bar(
                cells(activity.duration_minutes * 3.),
                BAR_WIDTH,
                Colour::Green.normal(),
                color
            ),
            format_number(activity.duration_minutes)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Calories burned")?;
    for activity in &state.activities {
        writeln!(
            out,
            "  {:<name_width$}  {}  {} cal",
            activity.name,
            bar(
                cells(activity.calories / 2.),
                BAR_WIDTH,
                Colour::Red.normal(),
                color
            ),
            format_number(activity.calories)
        )?;
    }
    Ok(())
}
