use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::utils::clock::{Clock, today};

use super::{
    entities::{Activity, EntryId, MealCategory, MealItem, TimeOfDay},
    error::TrackerResult,
    lifecycle::{check_and_reset_for_new_day, clear_all, clear_daily_records, load_data, save_data},
    state::DailyState,
    storage::KeyValueStorage,
    summary::daily_summary,
};

/// Owned handle to the day being tracked. Every change is validated, applied to a copy of the
/// state, persisted, and only then made visible. A failed write leaves the handle untouched.
pub struct DailyStore<S: KeyValueStorage> {
    storage: S,
    clock: Arc<dyn Clock>,
    state: DailyState,
    /// Day the state was loaded for.
    day: NaiveDate,
}

impl<S: KeyValueStorage> DailyStore<S> {
    /// Runs the date gate and loads today's records.
    pub async fn open(storage: S, clock: Arc<dyn Clock>) -> TrackerResult<Self> {
        let day = today(clock.as_ref());
        check_and_reset_for_new_day(&storage, day).await?;
        let state = load_data(&storage).await?;
        Ok(Self {
            storage,
            clock,
            state,
            day,
        })
    }

    /// Runs the date gate but doesn't read the daily records, so a corrupted record can still be
    /// cleared with [DailyStore::end_day] or [DailyStore::reset_all]. The state starts empty.
    pub async fn open_for_reset(storage: S, clock: Arc<dyn Clock>) -> TrackerResult<Self> {
        let day = today(clock.as_ref());
        check_and_reset_for_new_day(&storage, day).await?;
        Ok(Self {
            storage,
            clock,
            state: DailyState::default(),
            day,
        })
    }

    pub fn state(&self) -> &DailyState {
        &self.state
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    pub fn today(&self) -> NaiveDate {
        today(self.clock.as_ref())
    }

    /// Picks up a day change and anything written by another process since the last load.
    /// Returns whether the day was reset.
    pub async fn refresh(&mut self) -> TrackerResult<bool> {
        let day = self.today();
        let reset = check_and_reset_for_new_day(&self.storage, day).await?;
        self.state = load_data(&self.storage).await?;
        self.day = day;
        Ok(reset)
    }

    #[instrument(skip(self))]
    pub async fn add_activity(
        &mut self,
        name: &str,
        duration_minutes: f64,
        calories: f64,
        steps: Option<u64>,
        time_of_day: TimeOfDay,
    ) -> TrackerResult<EntryId> {
        self.roll_over().await?;
        let mut next = self.state.clone();
        let id = next.add_activity(name, duration_minutes, calories, steps, time_of_day)?;
        self.commit(next).await?;
        info!("Logged activity {id}");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn delete_activity(&mut self, id: EntryId) -> TrackerResult<Activity> {
        self.roll_over().await?;
        let mut next = self.state.clone();
        let removed = next.delete_activity(id)?;
        self.commit(next).await?;
        info!("Deleted activity {}", removed.name);
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub async fn add_meal(
        &mut self,
        category: MealCategory,
        name: &str,
        calories: f64,
    ) -> TrackerResult<EntryId> {
        self.roll_over().await?;
        let mut next = self.state.clone();
        let id = next.add_meal(category, name, calories)?;
        self.commit(next).await?;
        info!("Logged {category} item {id}");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn remove_meal(
        &mut self,
        category: MealCategory,
        id: EntryId,
    ) -> TrackerResult<MealItem> {
        self.roll_over().await?;
        let mut next = self.state.clone();
        let removed = next.remove_meal(category, id)?;
        self.commit(next).await?;
        info!("Removed {category} item {}", removed.name);
        Ok(removed)
    }

    /// Returns the water intake after the change.
    #[instrument(skip(self))]
    pub async fn add_water(&mut self, liters: f64) -> TrackerResult<f64> {
        self.roll_over().await?;
        let mut next = self.state.clone();
        let total = next.add_water(liters)?;
        self.commit(next).await?;
        Ok(total)
    }

    /// Brings the cached totals back in line with the logs and persists them if they drifted.
    pub async fn recalculate_totals(&mut self) -> TrackerResult<f64> {
        self.roll_over().await?;
        let mut next = self.state.clone();
        next.recalculate_totals();
        if next != self.state {
            warn!("Cached totals drifted from the logs, rewriting them");
            self.commit(next).await?;
        }
        Ok(self.state.wellness.calories_consumed)
    }

    /// Ends the day early. The day marker stays, so the date gate won't fire again today.
    #[instrument(skip(self))]
    pub async fn end_day(&mut self) -> TrackerResult<()> {
        clear_daily_records(&self.storage).await?;
        self.state = DailyState::default();
        info!("Day ended manually");
        Ok(())
    }

    /// Forgets everything, the day marker included.
    #[instrument(skip(self))]
    pub async fn reset_all(&mut self) -> TrackerResult<()> {
        clear_all(&self.storage).await?;
        self.state = DailyState::default();
        info!("All data removed");
        Ok(())
    }

    /// Plain-text report of the day.
    pub fn summary(&self) -> String {
        daily_summary(&self.state, self.day)
    }

    /// Starts the new day first when midnight passed since the state was loaded. Changes made
    /// afterwards belong to the new day.
    async fn roll_over(&mut self) -> TrackerResult<()> {
        if self.today() != self.day {
            info!("Day changed since {}, reloading", self.day);
            self.refresh().await?;
        }
        Ok(())
    }

    async fn commit(&mut self, next: DailyState) -> TrackerResult<()> {
        save_data(&self.storage, &next, self.day).await?;
        self.state = next;
        Ok(())
    }
}
