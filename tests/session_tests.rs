mod common;

use finplan::{FinanceSession, FinplanError};
use finplan_core::{
    storage::{InMemoryEntryStore, InMemorySettingsStore},
    EntryDraft, ProjectionYears, SettingsService,
};
use finplan_domain::{
    starter_entries, Currency, EntryId, EntryType, Frequency, HouseholdSettings,
};
use finplan_storage_json::{JsonEntryStore, JsonSettingsStore, StoragePaths};

use common::test_home;

fn in_memory_session(family_members: u32) -> FinanceSession {
    let settings = HouseholdSettings {
        family_members,
        ..HouseholdSettings::default()
    };
    FinanceSession::open(
        Box::new(InMemoryEntryStore::new(starter_entries())),
        Box::new(InMemorySettingsStore::new(settings)),
    )
}

fn json_session(paths: &StoragePaths) -> FinanceSession {
    FinanceSession::open(
        Box::new(JsonEntryStore::new(paths.entries_file.clone()).with_fallback(starter_entries())),
        Box::new(JsonSettingsStore::new(paths.settings_file.clone())),
    )
}

#[test]
fn starter_household_of_two_is_in_deficit() {
    let session = in_memory_session(2);
    let summary = session.summary();

    assert_eq!(summary.total_assets, 20000.0);
    assert_eq!(summary.total_liabilities, 28000.0);
    assert_eq!(summary.balance.balance, -8000.0);
    assert!(!summary.is_surplus());

    let projection = session.project(ProjectionYears::new(2).expect("valid horizon"));
    assert_eq!(projection.projected_total, -192000.0);
    assert!(!projection.is_positive);
}

#[test]
fn settings_change_is_reflected_on_next_read() {
    let mut session = in_memory_session(1);
    assert!(session.summary().is_surplus());

    session
        .update_settings(|settings| SettingsService::set_family_members(settings, 3))
        .expect("update settings");

    let summary = session.summary();
    assert_eq!(summary.total_liabilities, 300.0 * 30.0 * 3.0 + 10000.0);
    assert!(!summary.is_surplus());
}

#[test]
fn rejected_settings_change_leaves_snapshot_untouched() {
    let mut session = in_memory_session(2);

    let err = session
        .update_settings(|settings| SettingsService::set_family_members(settings, 0))
        .expect_err("zero members rejected");

    assert!(matches!(err, FinplanError::InvalidInput(_)));
    assert_eq!(session.settings().family_members, 2);
}

#[test]
fn entry_lifecycle_updates_totals() {
    let mut session = in_memory_session(1);

    let id = session
        .add_entry(EntryDraft::new("Freelance", 500.0, Frequency::Week, EntryType::Asset))
        .expect("add entry");
    assert_eq!(session.summary().total_assets, 22000.0);
    assert_eq!(session.entries_of(EntryType::Asset).len(), 2);

    session
        .update_entry(
            &id,
            EntryDraft::new("Freelance", 100.0, Frequency::Day, EntryType::Asset),
        )
        .expect("update entry");
    assert_eq!(session.summary().total_assets, 23000.0);

    let removed = session.remove_entry(&id).expect("remove entry");
    assert_eq!(removed.name, "Freelance");
    assert_eq!(session.summary().total_assets, 20000.0);
}

#[test]
fn missing_entry_is_reported() {
    let mut session = in_memory_session(1);
    let err = session
        .remove_entry(&EntryId::from("nope"))
        .expect_err("unknown id");
    assert!(matches!(err, FinplanError::EntryNotFound(id) if id == "nope"));
    assert_eq!(session.entries().len(), 3);
}

#[test]
fn json_backed_session_persists_changes() {
    let home = test_home();
    let paths = StoragePaths::under(&home);

    let mut session = json_session(&paths);
    assert_eq!(session.entries().len(), 3);
    session
        .add_entry(
            EntryDraft::new("Kindergarten", 50.0, Frequency::Day, EntryType::Liability)
                .per_person(true),
        )
        .expect("add entry");
    session
        .update_settings(|settings| {
            SettingsService::set_currency(settings, Currency::Euro);
            SettingsService::set_family_members(settings, 2)
        })
        .expect("update settings");

    let reopened = json_session(&paths);
    assert_eq!(reopened.entries().len(), 4);
    assert_eq!(reopened.settings().currency, Currency::Euro);
    assert_eq!(reopened.settings().family_members, 2);
    assert_eq!(
        reopened.summary().total_liabilities,
        300.0 * 30.0 * 2.0 + 10000.0 + 50.0 * 30.0 * 2.0
    );
}

#[test]
fn reload_picks_up_external_writes() {
    let home = test_home();
    let paths = StoragePaths::under(&home);

    let mut first = json_session(&paths);
    let mut second = json_session(&paths);
    let id = second
        .add_entry(EntryDraft::new("Bonus", 1200.0, Frequency::Month, EntryType::Asset))
        .expect("add entry");

    assert!(first.entries().iter().all(|entry| entry.id != id));
    first.reload();
    assert!(first.entries().iter().any(|entry| entry.id == id));
}
