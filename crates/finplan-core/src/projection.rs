//! Linear extrapolation of the monthly balance over a number of years.

use std::{fmt, ops::RangeInclusive};

use crate::CoreError;

/// Horizon accepted from user input.
pub const PROJECTION_YEARS_RANGE: RangeInclusive<u32> = 1..=100;

/// Result of extrapolating a monthly balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub years: f64,
    pub projected_total: f64,
    /// Zero counts as positive, matching [`crate::Balance::is_surplus`].
    pub is_positive: bool,
}

/// Projects `monthly_balance` over `years` with no compounding and no
/// inflation adjustment.
///
/// `years` is not clamped here; range checks belong to [`ProjectionYears`].
pub fn project_accumulation(monthly_balance: f64, years: f64) -> Projection {
    let projected_total = monthly_balance * 12.0 * years;
    Projection {
        years,
        projected_total,
        is_positive: projected_total >= 0.0,
    }
}

/// A projection horizon validated against [`PROJECTION_YEARS_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProjectionYears(u32);

impl ProjectionYears {
    pub fn new(years: u32) -> Result<Self, CoreError> {
        if PROJECTION_YEARS_RANGE.contains(&years) {
            Ok(Self(years))
        } else {
            Err(CoreError::Validation(format!(
                "projection horizon must be between {} and {} years, got {}",
                PROJECTION_YEARS_RANGE.start(),
                PROJECTION_YEARS_RANGE.end(),
                years
            )))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn project(self, monthly_balance: f64) -> Projection {
        project_accumulation(monthly_balance, f64::from(self.0))
    }
}

impl Default for ProjectionYears {
    fn default() -> Self {
        Self(*PROJECTION_YEARS_RANGE.start())
    }
}

impl fmt::Display for ProjectionYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            f.write_str("1 year")
        } else {
            write!(f, "{} years", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_balance_projects_to_zero() {
        for years in [1.0, 5.0, 100.0] {
            let projection = project_accumulation(0.0, years);
            assert_eq!(projection.projected_total, 0.0);
            assert!(projection.is_positive);
        }
    }

    #[test]
    fn deficit_projects_linearly() {
        let projection = project_accumulation(-8000.0, 2.0);
        assert_eq!(projection.projected_total, -192000.0);
        assert!(!projection.is_positive);
    }

    #[test]
    fn formula_accepts_fractional_years_without_clamping() {
        assert_eq!(project_accumulation(1000.0, 0.5).projected_total, 6000.0);
        assert_eq!(project_accumulation(1000.0, 250.0).projected_total, 3_000_000.0);
    }

    #[test]
    fn projection_years_enforces_input_range() {
        assert!(ProjectionYears::new(0).is_err());
        assert!(ProjectionYears::new(101).is_err());
        assert_eq!(ProjectionYears::new(100).unwrap().get(), 100);
        assert_eq!(ProjectionYears::default().get(), 1);
        assert_eq!(
            ProjectionYears::new(3).unwrap().project(100.0).projected_total,
            3600.0
        );
    }
}
