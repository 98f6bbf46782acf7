//! Durable key/value storage for the daily records.
//!
//! Values are JSON strings stored under fixed keys:
//!  - [LAST_VISIT_DATE] holds the day marker, `YYYY-MM-DD`.
//!  - [WELLNESS_DATA], [ACTIVITIES] and [MEALS] hold the daily records and are always wiped
//!    together.

pub mod file;
pub mod memory;

use std::{future::Future, ops::Deref};

use anyhow::Result;

pub const LAST_VISIT_DATE: &str = "lastVisitDate";
pub const WELLNESS_DATA: &str = "wellnessData";
pub const ACTIVITIES: &str = "activities";
pub const MEALS: &str = "meals";

/// Keys that belong to a single day.
pub const DAILY_KEYS: [&str; 3] = [WELLNESS_DATA, ACTIVITIES, MEALS];

/// Every key the tracker writes.
pub const ALL_KEYS: [&str; 4] = [LAST_VISIT_DATE, WELLNESS_DATA, ACTIVITIES, MEALS];

/// Interface for abstracting the storage backend.
pub trait KeyValueStorage {
    /// Returns the stored value, or `None` when the key was never written or has been removed.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>>;

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<()>>;

    /// Removing a missing key succeeds.
    fn remove(&self, key: &str) -> impl Future<Output = Result<()>>;
}

impl<T: Deref> KeyValueStorage for T
where
    T::Target: KeyValueStorage,
{
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> {
        self.deref().get(key)
    }

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<()>> {
        self.deref().set(key, value)
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> {
        self.deref().remove(key)
    }
}
