use std::io::{self, Write};

use ansi_term::{Colour, Style};
use chrono::{DateTime, Local};

use crate::{
    tracker::state::DailyState,
    utils::{
        format::{format_liters, format_number, format_thousands},
        percentage::{Percentage, goal_percentage},
        time::long_date,
    },
};

use super::{bar, paint};

const PROGRESS_WIDTH: usize = 20;

/// Daily targets the dashboard measures progress against.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Goals {
    #[arg(long = "steps-goal", default_value_t = 10_000, help = "Daily steps goal")]
    pub steps: u64,
    #[arg(
        long = "calories-goal",
        default_value_t = 800.,
        help = "Daily goal for burned calories"
    )]
    pub calories_burned: f64,
    #[arg(long = "water-goal", default_value_t = 3., help = "Daily water goal in liters")]
    pub water_liters: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            steps: 10_000,
            calories_burned: 800.,
            water_liters: 3.,
        }
    }
}

pub fn write_dashboard(
    out: &mut impl Write,
    state: &DailyState,
    goals: &Goals,
    now: DateTime<Local>,
    color: bool,
) -> io::Result<()> {
    let wellness = &state.wellness;
    writeln!(
        out,
        "{}  {}",
        paint(Style::new().bold(), &long_date(now.date_naive()), color),
        now.format("%-I:%M:%S %p")
    )?;
    writeln!(out)?;

    write_progress(
        out,
        "Steps",
        format!(
            "{} / {}",
            format_thousands(wellness.steps),
            format_thousands(goals.steps)
        ),
        goal_percentage(wellness.steps as f64, goals.steps as f64),
        Colour::Cyan,
        color,
    )?;
    write_progress(
        out,
        "Calories burned",
        format!(
            "{} / {}",
            format_number(wellness.calories_burned),
            format_number(goals.calories_burned)
        ),
        goal_percentage(wellness.calories_burned, goals.calories_burned),
        Colour::Red,
        color,
    )?;
    write_progress(
        out,
        "Water",
        format!(
            "{} / {}",
            format_liters(wellness.water_intake),
            format_liters(goals.water_liters)
        ),
        goal_percentage(wellness.water_intake, goals.water_liters),
        Colour::Blue,
        color,
    )?;
    writeln!(
        out,
        "{:<18}{:>20}",
        "Calories consumed",
        format_number(wellness.calories_consumed)
    )?;
    out.flush()
}

fn write_progress(
    out: &mut impl Write,
    label: &str,
    amount: String,
    percentage: Percentage,
    colour: Colour,
    color: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{label:<18}{amount:>20}  [{}] {percentage}",
        bar(
            percentage.filled_cells(PROGRESS_WIDTH),
            PROGRESS_WIDTH,
            colour.normal(),
            color
        ),
    )
}
