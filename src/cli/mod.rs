pub mod activity;
pub mod meal;
pub mod output;
pub mod watch;

use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use activity::{ActivityCommand, process_activity_command};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meal::{MealCommand, process_meal_command};
use output::{
    dashboard::{Goals, write_dashboard},
    insights::write_insights,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, level_filters::LevelFilter};
use watch::watch;

use crate::{
    tracker::{
        error::{TrackerError, TrackerResult},
        storage::{KeyValueStorage, file::FileStorage},
        store::DailyStore,
    },
    utils::{
        clock::{Clock, DefaultClock},
        dir::{create_application_default_path, ensure_dir},
        format::format_liters,
        logging::{CLI_PREFIX, enable_logging},
        shutdown::detect_shutdown,
    },
};

#[derive(Parser, Debug)]
#[command(name = "fittrack", version, long_about = None)]
#[command(about = "Track steps, calories, water, activities and meals for the day", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, global = true, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        global = true,
        env = "FITTRACK_DIR",
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Show today's progress")]
    Status {
        #[command(flatten)]
        goals: Goals,
        #[arg(long, help = "Disable colours")]
        no_color: bool,
    },
    #[command(about = "Log, delete and list activities")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommand,
    },
    #[command(about = "Plan breakfast, lunch and dinner")]
    Meal {
        #[command(subcommand)]
        command: MealCommand,
    },
    #[command(about = "Add water intake in liters. Negative amounts correct mistakes")]
    Water {
        #[arg(allow_negative_numbers = true)]
        liters: f64,
    },
    #[command(about = "Compare today's activities by duration and burned calories")]
    Insights {
        #[arg(long, help = "Disable colours")]
        no_color: bool,
    },
    #[command(about = "End the day early and clear today's logs")]
    EndDay {
        #[arg(short, long, help = "Don't ask for confirmation")]
        yes: bool,
    },
    #[command(about = "Remove all stored data")]
    Reset {
        #[arg(short, long, help = "Don't ask for confirmation")]
        yes: bool,
    },
    #[command(about = "Export a plain-text summary of the day")]
    Export {
        #[arg(
            short,
            long,
            default_value = "FitTrack_Summary.txt",
            help = "Output file. Use - to print to stdout"
        )]
        output: PathBuf,
    },
    #[command(about = "Live dashboard refreshed every second. Stop with Ctrl-C")]
    Watch {
        #[command(flatten)]
        goals: Goals,
        #[arg(long, help = "Disable colours")]
        no_color: bool,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let app_dir = match args.dir {
        Some(dir) => ensure_dir(dir)?,
        None => create_application_default_path()?,
    };

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    let storage = FileStorage::new(app_dir.join("storage"))?;
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let mut store = open_store(&args.commands, storage, clock).await?;

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();

    match args.commands {
        Commands::Status { goals, no_color } => {
            write_dashboard(
                &mut out,
                store.state(),
                &goals,
                store.clock().time(),
                color && !no_color,
            )?;
        }
        Commands::Activity { command } => {
            process_activity_command(&mut store, command, &mut out).await?
        }
        Commands::Meal { command } => process_meal_command(&mut store, command, &mut out).await?,
        Commands::Water { liters } => {
            let total = store.add_water(liters).await.map_err(|e| match e {
                TrackerError::Validation(_) => {
                    anyhow::Error::new(e).context("Please enter a valid amount of water")
                }
                e => e.into(),
            })?;
            writeln!(out, "Water intake: {}", format_liters(total))?;
        }
        Commands::Insights { no_color } => {
            write_insights(&mut out, store.state(), color && !no_color)?
        }
        Commands::EndDay { yes } => {
            let question = "End this day and start a new one? All of today's logs will be cleared.";
            if yes || confirm(question, &mut io::stdin().lock(), &mut out)? {
                store.end_day().await?;
                writeln!(out, "Day ended. Starting fresh.")?;
            }
        }
        Commands::Reset { yes } => {
            let question = "Reset ALL data? This will clear everything permanently.";
            if yes || confirm(question, &mut io::stdin().lock(), &mut out)? {
                store.reset_all().await?;
                writeln!(out, "All data removed.")?;
            }
        }
        Commands::Export { output } => export_summary(&store, &output, &mut out).await?,
        Commands::Watch { goals, no_color } => {
            let shutdown = CancellationToken::new();
            let (_, result) = tokio::join!(detect_shutdown(shutdown.clone()), async {
                let result = watch(
                    &mut store,
                    goals,
                    color && !no_color,
                    shutdown.clone(),
                    &mut out,
                )
                .await;
                shutdown.cancel();
                result
            });
            result?;
        }
    }
    Ok(())
}

/// Clearing commands skip reading the daily records, so they still work when one is corrupted.
async fn open_store<S: KeyValueStorage>(
    command: &Commands,
    storage: S,
    clock: Arc<dyn Clock>,
) -> TrackerResult<DailyStore<S>> {
    match command {
        Commands::EndDay { .. } | Commands::Reset { .. } => {
            DailyStore::open_for_reset(storage, clock).await
        }
        _ => DailyStore::open(storage, clock).await,
    }
}

/// Asks a yes/no question. Anything but an explicit yes is a no.
fn confirm(question: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

async fn export_summary(
    store: &DailyStore<impl KeyValueStorage>,
    output: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let summary = store.summary();
    if output == Path::new("-") {
        write!(out, "{summary}")?;
        return Ok(());
    }
    tokio::fs::write(output, summary)
        .await
        .with_context(|| format!("Failed to write summary into {output:?}"))?;
    info!("Exported summary into {output:?}");
    writeln!(out, "Summary saved to {}", output.display())?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use anyhow::Result;
    use chrono::{Local, TimeZone};

    use crate::{
        tracker::{storage::memory::MemoryStorage, store::DailyStore},
        utils::clock::MockClock,
    };

    /// Store backed by memory with the clock fixed at 2026-10-18 09:00.
    pub async fn memory_store() -> Result<DailyStore<MemoryStorage>> {
        let mut clock = MockClock::new();
        clock
            .expect_time()
            .returning(|| Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap());
        Ok(DailyStore::open(MemoryStorage::new(), Arc::new(clock)).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Arc};

    use anyhow::Result;
    use chrono::{Local, TimeZone};
    use clap::{CommandFactory, Parser};
    use tempfile::tempdir;

    use super::{Args, Commands, confirm, export_summary, open_store, testing::memory_store};
    use crate::{
        tracker::{
            entities::MealCategory,
            error::TrackerError,
            storage::{ACTIVITIES, KeyValueStorage, LAST_VISIT_DATE, memory::MemoryStorage},
        },
        utils::clock::MockClock,
    };

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_water() -> Result<()> {
        let args = Args::try_parse_from(["fittrack", "water", "-0.25"])?;
        assert!(matches!(args.commands, Commands::Water { liters } if liters == -0.25));
        Ok(())
    }

    #[test]
    fn test_parse_meal_add() -> Result<()> {
        let args = Args::try_parse_from([
            "fittrack", "--dir", "/tmp/x", "meal", "add", "breakfast", "Oats", "-c", "250",
        ])?;
        assert_eq!(args.dir.as_deref(), Some(std::path::Path::new("/tmp/x")));
        let Commands::Meal {
            command:
                super::MealCommand::Add {
                    category,
                    name,
                    calories,
                },
        } = args.commands
        else {
            panic!("expected meal add");
        };
        assert_eq!(category, MealCategory::Breakfast);
        assert_eq!(name, "Oats");
        assert_eq!(calories, 250.);
        Ok(())
    }

    #[test]
    fn test_confirm() -> Result<()> {
        let mut out = Vec::new();
        assert!(confirm("Sure?", &mut Cursor::new("y\n"), &mut out)?);
        assert!(confirm("Sure?", &mut Cursor::new(" YES \n"), &mut Vec::new())?);
        assert!(!confirm("Sure?", &mut Cursor::new("\n"), &mut Vec::new())?);
        assert!(!confirm("Sure?", &mut Cursor::new(""), &mut Vec::new())?);
        assert_eq!(String::from_utf8(out)?, "Sure? [y/N] ");
        Ok(())
    }

    #[tokio::test]
    async fn test_export_summary_to_file() -> Result<()> {
        let mut store = memory_store().await?;
        store.add_meal(MealCategory::Lunch, "Salad", 400.).await?;
        let dir = tempdir()?;
        let path = dir.path().join("summary.txt");

        let mut out = Vec::new();
        export_summary(&store, &path, &mut out).await?;

        let written = std::fs::read_to_string(&path)?;
        assert!(written.starts_with("FitTrack Pro Summary - 10/18/2026\n"));
        assert!(written.contains("Calories Consumed: 400\n"));
        assert!(String::from_utf8(out)?.starts_with("Summary saved to "));
        Ok(())
    }

    #[tokio::test]
    async fn test_export_summary_to_stdout() -> Result<()> {
        let store = memory_store().await?;
        let mut out = Vec::new();
        export_summary(&store, std::path::Path::new("-"), &mut out).await?;
        assert_eq!(String::from_utf8(out)?, store.summary());
        Ok(())
    }

    #[test]
    fn test_parse_negative_steps() -> Result<()> {
        let args = Args::try_parse_from([
            "fittrack", "activity", "add", "Run", "-d", "30", "-c", "300", "--steps", "-5",
        ])?;
        assert!(matches!(
            args.commands,
            Commands::Activity {
                command: super::ActivityCommand::Add {
                    steps: Some(-5),
                    ..
                }
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_clearing_commands_open_corrupted_storage() -> Result<()> {
        let mut clock = MockClock::new();
        clock
            .expect_time()
            .returning(|| Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap());
        let clock = Arc::new(clock);
        let storage = Arc::new(MemoryStorage::new());
        storage.set(LAST_VISIT_DATE, "2026-10-18".into()).await?;
        storage.set(ACTIVITIES, "[{\"name\":".into()).await?;

        let status = Args::try_parse_from(["fittrack", "status"])?;
        assert!(matches!(
            open_store(&status.commands, storage.clone(), clock.clone()).await,
            Err(TrackerError::Corrupted { .. })
        ));

        let reset = Args::try_parse_from(["fittrack", "reset", "--yes"])?;
        let mut store = open_store(&reset.commands, storage.clone(), clock.clone()).await?;
        store.reset_all().await?;
        assert!(storage.keys()?.is_empty());

        open_store(&status.commands, storage, clock).await?;
        Ok(())
    }
}
