use super::{
    entities::{Activity, EntryId, MealCategory, MealItem, MealLog, TimeOfDay, WellnessSnapshot},
    error::{TrackerError, TrackerResult, ValidationError},
};

/// Everything recorded for the current day. Fields are public for reading, changes go through
/// the methods below so the totals always follow the logs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyState {
    pub wellness: WellnessSnapshot,
    pub activities: Vec<Activity>,
    pub meals: MealLog,
}

impl DailyState {
    /// Recomputes calories burned, calories consumed and steps from the logs. Water has no log
    /// and is left alone. Steps saturate instead of overflowing.
    pub fn recalculate_totals(&mut self) -> &WellnessSnapshot {
        self.wellness.calories_burned = self.activities.iter().map(|a| a.calories).sum();
        self.wellness.steps = self
            .activities
            .iter()
            .map(|a| a.steps)
            .fold(0, u64::saturating_add);
        self.wellness.calories_consumed = self.meals.total_calories();
        &self.wellness
    }

    pub fn add_activity(
        &mut self,
        name: &str,
        duration_minutes: f64,
        calories: f64,
        steps: Option<u64>,
        time_of_day: TimeOfDay,
    ) -> Result<EntryId, ValidationError> {
        let name = validate_name(name)?;
        if !(duration_minutes.is_finite() && duration_minutes > 0.) {
            return Err(ValidationError::NonPositiveDuration(duration_minutes));
        }
        validate_calories(calories)?;

        let id = EntryId::new();
        self.activities.push(Activity {
            id,
            name,
            duration_minutes,
            calories,
            steps: steps.unwrap_or(0),
            time_of_day,
        });
        self.recalculate_totals();
        Ok(id)
    }

    pub fn delete_activity(&mut self, id: EntryId) -> TrackerResult<Activity> {
        let position = self
            .activities
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| TrackerError::ActivityNotFound(id.to_string()))?;
        let removed = self.activities.remove(position);
        self.recalculate_totals();
        Ok(removed)
    }

    pub fn add_meal(
        &mut self,
        category: MealCategory,
        name: &str,
        calories: f64,
    ) -> Result<EntryId, ValidationError> {
        let name = validate_name(name)?;
        validate_calories(calories)?;

        let id = EntryId::new();
        self.meals
            .items_mut(category)
            .push(MealItem { id, name, calories });
        self.recalculate_totals();
        Ok(id)
    }

    pub fn remove_meal(&mut self, category: MealCategory, id: EntryId) -> TrackerResult<MealItem> {
        let items = self.meals.items_mut(category);
        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| TrackerError::MealNotFound {
                category,
                id: id.to_string(),
            })?;
        let removed = items.remove(position);
        self.recalculate_totals();
        Ok(removed)
    }

    /// Any sign is accepted, a negative amount corrects an earlier mistake.
    pub fn add_water(&mut self, liters: f64) -> Result<f64, ValidationError> {
        if !liters.is_finite() {
            return Err(ValidationError::NonFiniteWater(liters));
        }
        self.wellness.water_intake += liters;
        Ok(self.wellness.water_intake)
    }

    /// Finds the activity whose id starts with `prefix`.
    pub fn resolve_activity(&self, prefix: &str) -> TrackerResult<EntryId> {
        unique_match(
            self.activities.iter().map(|a| a.id),
            prefix,
            || TrackerError::ActivityNotFound(prefix.to_owned()),
        )
    }

    /// Finds the meal item of `category` whose id starts with `prefix`.
    pub fn resolve_meal(&self, category: MealCategory, prefix: &str) -> TrackerResult<EntryId> {
        unique_match(
            self.meals.items(category).iter().map(|item| item.id),
            prefix,
            || TrackerError::MealNotFound {
                category,
                id: prefix.to_owned(),
            },
        )
    }

    pub fn activities_at(&self, time_of_day: Option<TimeOfDay>) -> impl Iterator<Item = &Activity> {
        self.activities
            .iter()
            .filter(move |a| time_of_day.map_or(true, |t| a.time_of_day == t))
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(name.to_owned())
    }
}

fn validate_calories(calories: f64) -> Result<(), ValidationError> {
    if calories.is_finite() && calories > 0. {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveCalories(calories))
    }
}

fn unique_match(
    ids: impl Iterator<Item = EntryId>,
    prefix: &str,
    not_found: impl FnOnce() -> TrackerError,
) -> TrackerResult<EntryId> {
    let mut matches = ids.filter(|id| id.matches_prefix(prefix));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (Some(_), Some(_)) => Err(TrackerError::AmbiguousId(prefix.to_owned())),
        (None, _) => Err(not_found()),
    }
}
