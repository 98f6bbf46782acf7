use std::io::{self, Write};

use crate::{
    tracker::{
        entities::{Activity, MealCategory, TimeOfDay},
        state::DailyState,
    },
    utils::format::{format_number, format_thousands},
};

pub fn write_activity(out: &mut impl Write, activity: &Activity) -> io::Result<()> {
    write!(
        out,
        "{}  {} - {} ({} min, {} cal",
        activity.id.short(),
        activity.time_of_day,
        activity.name,
        format_number(activity.duration_minutes),
        format_number(activity.calories)
    )?;
    if activity.steps > 0 {
        write!(out, ", {} steps", format_thousands(activity.steps))?;
    }
    writeln!(out, ")")
}

pub fn write_activities(
    out: &mut impl Write,
    state: &DailyState,
    time_of_day: Option<TimeOfDay>,
) -> io::Result<()> {
    let mut empty = true;
    for activity in state.activities_at(time_of_day) {
        empty = false;
        write_activity(out, activity)?;
    }
    if empty {
        writeln!(out, "No activities logged for today.")?;
    }
    Ok(())
}

pub fn write_meals(out: &mut impl Write, state: &DailyState) -> io::Result<()> {
    for category in MealCategory::ALL {
        writeln!(out, "{}", category.title())?;
        let items = state.meals.items(category);
        if items.is_empty() {
            writeln!(out, "  (nothing yet)")?;
        }
        for item in items {
            writeln!(
                out,
                "  {}  {} ({} cal)",
                item.id.short(),
                item.name,
                format_number(item.calories)
            )?;
        }
    }
    writeln!(
        out,
        "Total Today: {} Calories",
        format_number(state.wellness.calories_consumed)
    )
}

#[cfg(test)]
mod tests {
    use crate::tracker::{
        entities::{MealCategory, TimeOfDay},
        state::DailyState,
    };

    use super::{write_activities, write_meals};

    #[test]
    fn test_activity_listing() -> anyhow::Result<()> {
        let mut state = DailyState::default();
        let run = state.add_activity("Run", 30., 300., Some(4000), TimeOfDay::Morning)?;
        state.add_activity("Yoga", 20., 80., None, TimeOfDay::Evening)?;

        let mut out = Vec::new();
        write_activities(&mut out, &state, Some(TimeOfDay::Morning))?;
        assert_eq!(
            String::from_utf8(out)?,
            format!("{}  Morning - Run (30 min, 300 cal, 4,000 steps)\n", run.short())
        );

        let mut out = Vec::new();
        write_activities(&mut out, &state, Some(TimeOfDay::Night))?;
        assert_eq!(String::from_utf8(out)?, "No activities logged for today.\n");
        Ok(())
    }

    #[test]
    fn test_meal_listing() -> anyhow::Result<()> {
        let mut state = DailyState::default();
        let oats = state.add_meal(MealCategory::Breakfast, "Oats", 250.)?;
        let salad = state.add_meal(MealCategory::Lunch, "Salad", 400.)?;

        let mut out = Vec::new();
        write_meals(&mut out, &state)?;
        assert_eq!(
            String::from_utf8(out)?,
            format!(
                "Breakfast\n  {}  Oats (250 cal)\nLunch\n  {}  Salad (400 cal)\nDinner\n  (nothing yet)\nTotal Today: 650 Calories\n",
                oats.short(),
                salad.short()
            )
        );
        Ok(())
    }
}
