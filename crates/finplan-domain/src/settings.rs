//! Household-wide settings consumed by the monthly calculations.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};
use tracing::warn;

/// Display unit for amounts. Has no effect on the arithmetic.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    #[serde(rename = "₴")]
    Hryvnia,
    #[serde(rename = "$")]
    Dollar,
    #[serde(rename = "€")]
    Euro,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Hryvnia, Currency::Dollar, Currency::Euro];

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Hryvnia => "₴",
            Currency::Dollar => "$",
            Currency::Euro => "€",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "₴" | "uah" | "hryvnia" => Some(Currency::Hryvnia),
            "$" | "usd" | "dollar" => Some(Currency::Dollar),
            "€" | "eur" | "euro" => Some(Currency::Euro),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|v| Theme::parse(&v)).unwrap_or_default())
    }
}

/// Snapshot of the household configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSettings {
    #[serde(default)]
    pub currency: Currency,
    #[serde(
        default = "HouseholdSettings::default_family_members",
        deserialize_with = "deserialize_family_members"
    )]
    pub family_members: u32,
    #[serde(default = "HouseholdSettings::default_has_job")]
    pub has_job: bool,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for HouseholdSettings {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            family_members: Self::default_family_members(),
            has_job: Self::default_has_job(),
            theme: Theme::default(),
        }
    }
}

impl HouseholdSettings {
    pub const MIN_FAMILY_MEMBERS: u32 = 1;

    pub fn default_family_members() -> u32 {
        Self::MIN_FAMILY_MEMBERS
    }

    pub fn default_has_job() -> bool {
        true
    }

    /// Household size as a multiplier.
    pub fn household_size(&self) -> f64 {
        f64::from(self.family_members)
    }
}

/// Brings an arbitrary persisted number into the valid household range:
/// fractions are floored and anything below one becomes one.
pub fn sanitize_family_members(raw: f64) -> u32 {
    if !raw.is_finite() || raw < f64::from(HouseholdSettings::MIN_FAMILY_MEMBERS) {
        return HouseholdSettings::MIN_FAMILY_MEMBERS;
    }
    let floored = raw.floor();
    if floored >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        floored as u32
    }
}

fn deserialize_family_members<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    let members = sanitize_family_members(raw);
    if f64::from(members) != raw {
        warn!(raw, members, "familyMembers out of range; clamped");
    }
    Ok(members)
}
