use thiserror::Error;

use super::entities::MealCategory;

/// Input that can't be logged. The day stays exactly as it was.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("duration must be a positive number of minutes, got {0}")]
    NonPositiveDuration(f64),
    #[error("calories must be a positive number, got {0}")]
    NonPositiveCalories(f64),
    #[error("water amount must be a finite number of liters, got {0}")]
    NonFiniteWater(f64),
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no activity matches {0:?}")]
    ActivityNotFound(String),
    #[error("no {category} item matches {id:?}")]
    MealNotFound { category: MealCategory, id: String },
    #[error("{0:?} matches more than one entry, use a longer id")]
    AmbiguousId(String),
    #[error("stored record {key:?} is corrupted")]
    Corrupted {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
