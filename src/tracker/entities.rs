use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a logged activity or meal item. Deletion goes through it instead of the
/// position inside a list, which changes whenever something before it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 hex digits. Enough to tell the entries of a single day apart.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_owned()
    }

    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_ascii_lowercase().replace('-', "");
        !prefix.is_empty() && self.0.simple().to_string().starts_with(&prefix)
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cached totals of the day. Calories and steps are recalculated from the logs, water intake is
/// only tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WellnessSnapshot {
    pub steps: u64,
    pub calories_burned: f64,
    pub water_intake: f64,
    pub calories_consumed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOfDay::Morning => write!(f, "Morning"),
            TimeOfDay::Afternoon => write!(f, "Afternoon"),
            TimeOfDay::Evening => write!(f, "Evening"),
            TimeOfDay::Night => write!(f, "Night"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: EntryId,
    pub name: String,
    #[serde(rename = "duration")]
    pub duration_minutes: f64,
    pub calories: f64,
    #[serde(default)]
    pub steps: u64,
    #[serde(rename = "time")]
    pub time_of_day: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    #[serde(default)]
    pub id: EntryId,
    pub name: String,
    pub calories: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealCategory {
    pub const ALL: [MealCategory; 3] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
        }
    }
}

impl Display for MealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealCategory::Breakfast => write!(f, "breakfast"),
            MealCategory::Lunch => write!(f, "lunch"),
            MealCategory::Dinner => write!(f, "dinner"),
        }
    }
}

/// Meals of the day, one ordered list per category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealLog {
    pub breakfast: Vec<MealItem>,
    pub lunch: Vec<MealItem>,
    pub dinner: Vec<MealItem>,
}

impl MealLog {
    pub fn items(&self, category: MealCategory) -> &[MealItem] {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Dinner => &self.dinner,
        }
    }

    pub(crate) fn items_mut(&mut self, category: MealCategory) -> &mut Vec<MealItem> {
        match category {
            MealCategory::Breakfast => &mut self.breakfast,
            MealCategory::Lunch => &mut self.lunch,
            MealCategory::Dinner => &mut self.dinner,
        }
    }

    /// Every item together with its category, breakfast first.
    pub fn iter(&self) -> impl Iterator<Item = (MealCategory, &MealItem)> {
        MealCategory::ALL
            .into_iter()
            .flat_map(move |category| self.items(category).iter().map(move |item| (category, item)))
    }

    pub fn total_calories(&self) -> f64 {
        self.iter().map(|(_, item)| item.calories).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
