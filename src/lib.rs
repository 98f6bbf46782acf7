//! Daily wellness tracker for the terminal. Steps, calories, water, activities and meals are
//! recorded for the current day and cleared automatically once the day is over.
//!

pub mod cli;
pub mod fs;
pub mod tracker;
pub mod utils;
