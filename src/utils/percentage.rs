use std::{fmt::Display, ops::Deref};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

impl Percentage {
    pub fn new_opt(value: f64) -> Option<Percentage> {
        if value < 0. || !value.is_finite() {
            None
        } else {
            Some(Percentage(value))
        }
    }

    /// Share of the value that fits into a bar of `width` cells. Anything past 100% fills the bar.
    pub fn filled_cells(&self, width: usize) -> usize {
        let cells = (self.0.min(100.) / 100. * width as f64).round() as usize;
        cells.min(width)
    }
}

impl Deref for Percentage {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Progress of `value` towards `goal`. Goals can be exceeded, so the result isn't capped at 100.
/// Negative progress and empty goals are shown as 0%.
pub fn goal_percentage(value: f64, goal: f64) -> Percentage {
    if goal <= 0. {
        return Percentage(0.);
    }
    Percentage::new_opt(value / goal * 100.).unwrap_or(Percentage(0.))
}

#[cfg(test)]
mod tests {
    use super::{Percentage, goal_percentage};

    #[test]
    fn test_goal_percentage() {
        assert_eq!(*goal_percentage(4000., 10000.), 40.);
        assert_eq!(*goal_percentage(1200., 800.), 150.);
        assert_eq!(*goal_percentage(-0.5, 3.), 0.);
        assert_eq!(*goal_percentage(10., 0.), 0.);
        assert_eq!(goal_percentage(1., 3.).to_string(), "33%");
    }

    #[test]
    fn test_filled_cells() {
        assert_eq!(Percentage::new_opt(40.).unwrap().filled_cells(10), 4);
        assert_eq!(Percentage::new_opt(250.).unwrap().filled_cells(10), 10);
        assert_eq!(Percentage::new_opt(0.).unwrap().filled_cells(10), 0);
        assert!(Percentage::new_opt(-1.).is_none());
    }
}
