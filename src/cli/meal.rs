use std::io::Write;

use anyhow::Result;
use clap::Subcommand;

use crate::tracker::{
    entities::MealCategory, error::TrackerError, storage::KeyValueStorage, store::DailyStore,
};

use super::output::listing::write_meals;

#[derive(Subcommand, Debug)]
pub enum MealCommand {
    #[command(about = "Add an item to a meal")]
    Add {
        #[arg(value_enum)]
        category: MealCategory,
        name: String,
        #[arg(short, long)]
        calories: f64,
    },
    #[command(about = "Remove a meal item by its id or a unique prefix of it")]
    Remove {
        #[arg(value_enum)]
        category: MealCategory,
        id: String,
    },
    #[command(about = "Show today's meal plan")]
    List,
}

pub async fn process_meal_command(
    store: &mut DailyStore<impl KeyValueStorage>,
    command: MealCommand,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        MealCommand::Add {
            category,
            name,
            calories,
        } => {
            let id = store
                .add_meal(category, &name, calories)
                .await
                .map_err(|e| match e {
                    TrackerError::Validation(_) => {
                        anyhow::Error::new(e).context("Please enter valid meal data")
                    }
                    e => e.into(),
                })?;
            writeln!(out, "Meal added! ({})", id.short())?;
        }
        MealCommand::Remove { category, id } => {
            let id = store.state().resolve_meal(category, &id)?;
            let removed = store.remove_meal(category, id).await?;
            writeln!(out, "Removed {} from {category}", removed.name)?;
        }
        MealCommand::List => write_meals(out, store.state())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::{cli::testing::memory_store, tracker::entities::MealCategory};

    use super::{MealCommand, process_meal_command};

    #[tokio::test]
    async fn test_add_and_remove_meal() -> Result<()> {
        let mut store = memory_store().await?;

        for (category, name, calories) in [
            (MealCategory::Breakfast, "Oats", 250.),
            (MealCategory::Lunch, "Salad", 400.),
        ] {
            process_meal_command(
                &mut store,
                MealCommand::Add {
                    category,
                    name: name.into(),
                    calories,
                },
                &mut Vec::new(),
            )
            .await?;
        }
        assert_eq!(store.state().wellness.calories_consumed, 650.);

        let oats = store.state().meals.breakfast[0].id;
        let mut out = Vec::new();
        process_meal_command(
            &mut store,
            MealCommand::Remove {
                category: MealCategory::Breakfast,
                id: oats.short(),
            },
            &mut out,
        )
        .await?;
        assert_eq!(String::from_utf8(out)?, "Removed Oats from breakfast\n");
        assert_eq!(store.state().wellness.calories_consumed, 400.);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_wrong_category() -> Result<()> {
        let mut store = memory_store().await?;
        process_meal_command(
            &mut store,
            MealCommand::Add {
                category: MealCategory::Dinner,
                name: "Soup".into(),
                calories: 300.,
            },
            &mut Vec::new(),
        )
        .await?;
        let soup = store.state().meals.dinner[0].id;

        let result = process_meal_command(
            &mut store,
            MealCommand::Remove {
                category: MealCategory::Lunch,
                id: soup.short(),
            },
            &mut Vec::new(),
        )
        .await;
        assert!(result.is_err());
        assert_eq!(store.state().wellness.calories_consumed, 300.);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_meal_is_explained() -> Result<()> {
        let mut store = memory_store().await?;
        let error = process_meal_command(
            &mut store,
            MealCommand::Add {
                category: MealCategory::Lunch,
                name: "".into(),
                calories: 400.,
            },
            &mut Vec::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(error.to_string(), "Please enter valid meal data");
        Ok(())
    }
}
