use finplan_domain::{Currency, HouseholdSettings};

use crate::CoreError;

pub struct SettingsService;

impl SettingsService {
    /// Rejects a household smaller than one person instead of letting the
    /// per-person multiplier degenerate.
    pub fn set_family_members(
        settings: &mut HouseholdSettings,
        family_members: u32,
    ) -> Result<(), CoreError> {
        if family_members < HouseholdSettings::MIN_FAMILY_MEMBERS {
            return Err(CoreError::Validation(format!(
                "household must have at least {} member",
                HouseholdSettings::MIN_FAMILY_MEMBERS
            )));
        }
        settings.family_members = family_members;
        Ok(())
    }

    pub fn set_currency(settings: &mut HouseholdSettings, currency: Currency) {
        settings.currency = currency;
    }

    pub fn set_has_job(settings: &mut HouseholdSettings, has_job: bool) {
        settings.has_job = has_job;
    }
}
