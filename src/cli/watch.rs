use std::{io::Write, time::Duration};

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::tracker::{storage::KeyValueStorage, store::DailyStore};

use super::output::dashboard::{Goals, write_dashboard};

const TICK: Duration = Duration::from_secs(1);

/// Clears the terminal and moves the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Re-renders the dashboard once per tick until `shutdown` is cancelled. Each tick re-runs the date
/// gate, so a dashboard left open over midnight starts the new day on its own. Stops quietly once
/// the output can't be written to anymore.
pub async fn watch(
    store: &mut DailyStore<impl KeyValueStorage>,
    goals: Goals,
    color: bool,
    shutdown: CancellationToken,
    out: &mut impl Write,
) -> Result<()> {
    let clock = store.clock();
    let mut next_tick = clock.instant();
    loop {
        next_tick += TICK;

        match store.refresh().await {
            Ok(true) => info!("Day changed while watching"),
            Ok(false) => (),
            Err(e) => error!("Failed to refresh daily records {e:?}"),
        }

        let rendered = match write!(out, "{CLEAR_SCREEN}") {
            Ok(()) => write_dashboard(&mut *out, store.state(), &goals, clock.time(), color),
            Err(e) => Err(e),
        };
        if let Err(e) = rendered {
            info!("Output is gone, stopping watch: {e}");
            return Ok(());
        }

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                return Ok(())
            }
            _ = clock.sleep_until(next_tick) => ()
        }
    }
}
