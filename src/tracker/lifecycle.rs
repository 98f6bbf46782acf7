//! Moving the daily records between storage and memory, and deciding when they expire.

use chrono::NaiveDate;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument};

use crate::utils::time::date_to_marker;

use super::{
    error::{TrackerError, TrackerResult},
    state::DailyState,
    storage::{
        ACTIVITIES, ALL_KEYS, DAILY_KEYS, KeyValueStorage, LAST_VISIT_DATE, MEALS, WELLNESS_DATA,
    },
};

/// Wipes the daily records when the stored day marker isn't `today`, then moves the marker to
/// `today`. Returns whether a reset happened. Nothing is written when the marker is already
/// current, so calling it repeatedly within a day is harmless.
#[instrument(skip(storage))]
pub async fn check_and_reset_for_new_day(
    storage: &impl KeyValueStorage,
    today: NaiveDate,
) -> TrackerResult<bool> {
    let today = date_to_marker(today);
    let last_visit = storage.get(LAST_VISIT_DATE).await?;

    if last_visit.as_deref().map(str::trim) == Some(today.as_str()) {
        debug!("Day marker is current");
        return Ok(false);
    }

    info!("New day detected (last visit {last_visit:?}), resetting daily records");
    clear_daily_records(storage).await?;
    storage.set(LAST_VISIT_DATE, today).await?;
    Ok(true)
}

/// Reads the daily records. Missing records are replaced with empty defaults, totals are
/// recalculated from the logs.
pub async fn load_data(storage: &impl KeyValueStorage) -> TrackerResult<DailyState> {
    let mut state = DailyState {
        wellness: load_record(storage, WELLNESS_DATA).await?,
        activities: load_record(storage, ACTIVITIES).await?,
        meals: load_record(storage, MEALS).await?,
    };
    state.recalculate_totals();
    Ok(state)
}

/// Writes all daily records and refreshes the day marker.
pub async fn save_data(
    storage: &impl KeyValueStorage,
    state: &DailyState,
    today: NaiveDate,
) -> TrackerResult<()> {
    save_record(storage, WELLNESS_DATA, &state.wellness).await?;
    save_record(storage, ACTIVITIES, &state.activities).await?;
    save_record(storage, MEALS, &state.meals).await?;
    storage.set(LAST_VISIT_DATE, date_to_marker(today)).await?;
    Ok(())
}

/// Removes the daily records but keeps the day marker.
pub async fn clear_daily_records(storage: &impl KeyValueStorage) -> TrackerResult<()> {
    for key in DAILY_KEYS {
        storage.remove(key).await?;
    }
    Ok(())
}

/// Removes every key, the day marker included.
pub async fn clear_all(storage: &impl KeyValueStorage) -> TrackerResult<()> {
    for key in ALL_KEYS {
        storage.remove(key).await?;
    }
    Ok(())
}

async fn load_record<T: DeserializeOwned + Default>(
    storage: &impl KeyValueStorage,
    key: &'static str,
) -> TrackerResult<T> {
    match storage.get(key).await? {
        Some(value) => {
            serde_json::from_str(&value).map_err(|source| TrackerError::Corrupted { key, source })
        }
        None => Ok(T::default()),
    }
}

async fn save_record<T: Serialize>(
    storage: &impl KeyValueStorage,
    key: &'static str,
    value: &T,
) -> TrackerResult<()> {
    let value =
        serde_json::to_string(value).map_err(|source| TrackerError::Corrupted { key, source })?;
    storage.set(key, value).await?;
    Ok(())
}
