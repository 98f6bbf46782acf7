use std::io::Write;

use anyhow::Result;
use clap::Subcommand;

use crate::tracker::{
    entities::TimeOfDay,
    error::TrackerError,
    storage::KeyValueStorage,
    store::DailyStore,
};

use super::output::listing::{write_activities, write_activity};

#[derive(Subcommand, Debug)]
pub enum ActivityCommand {
    #[command(about = "Log an activity")]
    Add {
        name: String,
        #[arg(short, long, help = "Duration in minutes")]
        duration: f64,
        #[arg(short, long, help = "Burned calories")]
        calories: f64,
        #[arg(
            short,
            long,
            allow_negative_numbers = true,
            help = "Steps taken during the activity. Anything but a positive number counts as 0"
        )]
        steps: Option<i64>,
        #[arg(short, long, value_enum, default_value_t = TimeOfDay::Morning)]
        time: TimeOfDay,
    },
    #[command(about = "Delete an activity by its id or a unique prefix of it")]
    Delete { id: String },
    #[command(about = "List today's activities")]
    List {
        #[arg(short, long, value_enum, help = "Only show activities of this time of day")]
        time: Option<TimeOfDay>,
    },
}

pub async fn process_activity_command(
    store: &mut DailyStore<impl KeyValueStorage>,
    command: ActivityCommand,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ActivityCommand::Add {
            name,
            duration,
            calories,
            steps,
            time,
        } => {
            let steps = steps.map(|steps| u64::try_from(steps).unwrap_or(0));
            let id = store
                .add_activity(&name, duration, calories, steps, time)
                .await
                .map_err(|e| match e {
                    TrackerError::Validation(_) => anyhow::Error::new(e)
                        .context("Please enter valid activity data (name, duration, calories)"),
                    e => e.into(),
                })?;
            writeln!(out, "Activity added successfully! ({})", id.short())?;
        }
        ActivityCommand::Delete { id } => {
            let id = store.state().resolve_activity(&id)?;
            let removed = store.delete_activity(id).await?;
            write!(out, "Activity deleted: ")?;
            write_activity(out, &removed)?;
        }
        ActivityCommand::List { time } => write_activities(out, store.state(), time)?,
    }
    Ok(())
}
