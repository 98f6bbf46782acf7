use std::fmt::Write;

use chrono::NaiveDate;

use crate::utils::{
    format::{format_liters, format_number, format_thousands},
    time::short_date,
};

use super::{entities::MealCategory, state::DailyState};

/// Builds the human-readable report of the day. It's output only and isn't meant to be parsed
/// back.
pub fn daily_summary(state: &DailyState, date: NaiveDate) -> String {
    let mut summary = String::new();
    // Writing into a String can't fail.
    let _ = write_summary(&mut summary, state, date);
    summary
}

fn write_summary(out: &mut String, state: &DailyState, date: NaiveDate) -> std::fmt::Result {
    let wellness = &state.wellness;
    writeln!(out, "FitTrack Pro Summary - {}", short_date(date))?;
    writeln!(out, "========================================")?;
    writeln!(out)?;

    writeln!(out, "--- WELLNESS OVERVIEW ---")?;
    writeln!(out, "Steps Taken: {}", format_thousands(wellness.steps))?;
    writeln!(
        out,
        "Calories Burned: {}",
        format_number(wellness.calories_burned)
    )?;
    writeln!(
        out,
        "Calories Consumed: {}",
        format_number(wellness.calories_consumed)
    )?;
    writeln!(out, "Water Intake: {}", format_liters(wellness.water_intake))?;
    writeln!(out)?;

    writeln!(out, "--- LOGGED ACTIVITIES ---")?;
    if state.activities.is_empty() {
        writeln!(out, "(No activities logged for today)")?;
    }
    for activity in &state.activities {
        write!(
            out,
            "- {}: {} ({} mins, {} cals",
            activity.time_of_day,
            activity.name,
            format_number(activity.duration_minutes),
            format_number(activity.calories)
        )?;
        if activity.steps > 0 {
            write!(out, ", {} steps", format_thousands(activity.steps))?;
        }
        writeln!(out, ")")?;
    }
    writeln!(out)?;

    writeln!(out, "--- MEAL PLANNER ---")?;
    for category in MealCategory::ALL {
        writeln!(out, "  - {}:", category.title())?;
        let items = state.meals.items(category);
        if items.is_empty() {
            writeln!(out, "    (No items logged)")?;
        }
        for item in items {
            writeln!(
                out,
                "    - {} ({} calories)",
                item.name,
                format_number(item.calories)
            )?;
        }
    }
    Ok(())
}
