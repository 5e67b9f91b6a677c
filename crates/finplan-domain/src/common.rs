//! Cadence of recurring entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cadence at which an entry's raw amount recurs.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Day,
    Week,
    #[default]
    Month,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Day, Frequency::Week, Frequency::Month];

    /// Factor converting one occurrence into its monthly equivalent.
    ///
    /// These are fixed approximations (a 30-day month and a 4-week month),
    /// not calendar-exact conversions.
    pub fn monthly_multiplier(self) -> f64 {
        match self {
            Frequency::Day => 30.0,
            Frequency::Week => 4.0,
            Frequency::Month => 1.0,
        }
    }

    /// Serialized name, also accepted by [`Frequency::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Day => "day",
            Frequency::Week => "week",
            Frequency::Month => "month",
        }
    }

    /// Short suffix used next to raw amounts, e.g. `120 $/week`.
    pub fn suffix(self) -> &'static str {
        match self {
            Frequency::Day => "/day",
            Frequency::Week => "/week",
            Frequency::Month => "/month",
        }
    }

    /// Parses user input; accepts the serialized names and a few aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" | "d" => Some(Frequency::Day),
            "week" | "weekly" | "w" => Some(Frequency::Week),
            "month" | "monthly" | "m" => Some(Frequency::Month),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Day => "Daily",
            Frequency::Week => "Weekly",
            Frequency::Month => "Monthly",
        };
        f.write_str(label)
    }
}
