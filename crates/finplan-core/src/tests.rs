use crate::{
    aggregate::{entries_of, monthly_amount, total_for},
    entry_service::{EntryDraft, EntryService},
    settings_service::SettingsService,
    storage::{EntryStore, InMemoryEntryStore, InMemorySettingsStore, SettingsStore},
    summary_service::SummaryService,
    CoreError,
};
use finplan_domain::{EntryId, EntryType, FinancialEntry, Frequency, HouseholdSettings};

fn household(members: u32) -> HouseholdSettings {
    HouseholdSettings {
        family_members: members,
        ..HouseholdSettings::default()
    }
}

#[test]
fn total_of_empty_collection_is_zero() {
    for members in [1, 3] {
        assert_eq!(total_for(&[], EntryType::Asset, &household(members)), 0.0);
        assert_eq!(total_for(&[], EntryType::Liability, &household(members)), 0.0);
    }
}

#[test]
fn total_ignores_entries_of_other_type() {
    let entries = vec![
        FinancialEntry::new("Salary", 1000.0, Frequency::Month, EntryType::Asset),
        FinancialEntry::new("Coffee", 5.0, Frequency::Day, EntryType::Liability),
    ];
    let settings = household(1);
    assert_eq!(total_for(&entries, EntryType::Asset, &settings), 1000.0);
    assert_eq!(total_for(&entries, EntryType::Liability, &settings), 150.0);
}

#[test]
fn total_is_invariant_under_reordering() {
    let entries = vec![
        FinancialEntry::new("A", 300.0, Frequency::Day, EntryType::Liability).per_person(true),
        FinancialEntry::new("B", 10000.0, Frequency::Month, EntryType::Liability),
        FinancialEntry::new("C", 250.0, Frequency::Week, EntryType::Liability),
    ];
    let settings = household(3);
    let forward = total_for(&entries, EntryType::Liability, &settings);
    let mut reversed = entries.clone();
    reversed.reverse();
    let mut rotated = entries.clone();
    rotated.rotate_left(1);
    assert_eq!(forward, total_for(&reversed, EntryType::Liability, &settings));
    assert_eq!(forward, total_for(&rotated, EntryType::Liability, &settings));
    assert_eq!(forward, 27000.0 + 10000.0 + 1000.0);
}

#[test]
fn per_person_asset_is_not_scaled() {
    let entry =
        FinancialEntry::new("Allowance", 100.0, Frequency::Week, EntryType::Asset).per_person(true);
    assert_eq!(monthly_amount(&entry, &household(5)), 400.0);
}

#[test]
fn entries_of_preserves_collection_order() {
    let entries = vec![
        FinancialEntry::new("x", 1.0, Frequency::Month, EntryType::Liability).with_id("a"),
        FinancialEntry::new("y", 1.0, Frequency::Month, EntryType::Asset).with_id("b"),
        FinancialEntry::new("z", 1.0, Frequency::Month, EntryType::Liability).with_id("c"),
    ];
    let ids: Vec<&str> = entries_of(&entries, EntryType::Liability)
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn dashboard_breakdown_skips_empty_slices() {
    let entries = vec![FinancialEntry::new("Salary", 3000.0, Frequency::Month, EntryType::Asset)];
    let summary = SummaryService::dashboard(&entries, &household(1));
    let slices = summary.breakdown();
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].entry_type, EntryType::Asset);
    assert_eq!(slices[0].share, 1.0);

    let empty = SummaryService::dashboard(&[], &household(1));
    assert!(empty.breakdown().is_empty());
    assert!(empty.is_surplus());
}

#[test]
fn dashboard_breakdown_is_empty_when_totals_overflow() {
    let entries = vec![
        FinancialEntry::new("Huge", f64::MAX, Frequency::Month, EntryType::Asset),
        FinancialEntry::new("Huger", f64::MAX, Frequency::Month, EntryType::Asset),
        FinancialEntry::new("Rent", 100.0, Frequency::Month, EntryType::Liability),
    ];
    let summary = SummaryService::dashboard(&entries, &household(1));
    assert!(summary.total_assets.is_infinite());
    assert!(summary.breakdown().is_empty());
}

#[test]
fn draft_from_entry_keeps_every_field() {
    let entry = FinancialEntry::new("Groceries", 300.0, Frequency::Day, EntryType::Liability)
        .with_icon("ShoppingBasket")
        .per_person(true);
    let draft = EntryDraft::from(&entry);
    assert_eq!(draft.name, "Groceries");
    assert_eq!(draft.amount, 300.0);
    assert_eq!(draft.frequency, Frequency::Day);
    assert_eq!(draft.entry_type, EntryType::Liability);
    assert_eq!(draft.icon, "ShoppingBasket");
    assert!(draft.is_per_person);
}

#[test]
fn entry_service_adds_and_assigns_ids() {
    let mut entries = Vec::new();
    let draft = EntryDraft::new("  Freelance ", 500.0, Frequency::Week, EntryType::Asset)
        .with_icon("Briefcase")
        .per_person(true);
    let id = EntryService::add(&mut entries, draft).expect("add entry");

    let stored = EntryService::find(&entries, &id).expect("entry exists");
    assert_eq!(stored.name, "Freelance");
    assert_eq!(stored.icon, "Briefcase");
    assert!(!stored.is_per_person, "assets never carry the per-person flag");
}

#[test]
fn entry_service_rejects_invalid_drafts() {
    let mut entries = Vec::new();
    let blank = EntryDraft::new("   ", 10.0, Frequency::Month, EntryType::Asset);
    assert!(matches!(
        EntryService::add(&mut entries, blank),
        Err(CoreError::Validation(_))
    ));
    let negative = EntryDraft::new("Debt", -1.0, Frequency::Month, EntryType::Liability);
    assert!(matches!(
        EntryService::add(&mut entries, negative),
        Err(CoreError::Validation(_))
    ));
    let nan = EntryDraft::new("Broken", f64::NAN, Frequency::Month, EntryType::Liability);
    assert!(EntryService::add(&mut entries, nan).is_err());
    assert!(entries.is_empty());
}

#[test]
fn entry_service_updates_in_place_and_removes() {
    let mut entries = vec![
        FinancialEntry::new("Rent", 10000.0, Frequency::Month, EntryType::Liability).with_id("r"),
        FinancialEntry::new("Food", 300.0, Frequency::Day, EntryType::Liability).with_id("f"),
    ];
    let rent = EntryId::from("r");
    EntryService::update(
        &mut entries,
        &rent,
        EntryDraft::new("Rent", 12000.0, Frequency::Month, EntryType::Liability),
    )
    .expect("update entry");
    assert_eq!(entries[0].id, rent);
    assert_eq!(entries[0].amount, 12000.0);

    let removed = EntryService::remove(&mut entries, &EntryId::from("f")).expect("remove entry");
    assert_eq!(removed.name, "Food");
    assert_eq!(entries.len(), 1);

    let missing = EntryId::from("nope");
    assert!(matches!(
        EntryService::remove(&mut entries, &missing),
        Err(CoreError::EntryNotFound(_))
    ));
    assert!(EntryService::update(
        &mut entries,
        &missing,
        EntryDraft::new("x", 1.0, Frequency::Day, EntryType::Asset)
    )
    .is_err());
}

#[test]
fn settings_service_rejects_empty_household() {
    let mut settings = HouseholdSettings::default();
    assert!(SettingsService::set_family_members(&mut settings, 0).is_err());
    assert_eq!(settings.family_members, 1);
    SettingsService::set_family_members(&mut settings, 4).expect("set members");
    assert_eq!(settings.family_members, 4);
}

#[test]
fn in_memory_stores_round_trip() {
    let entry_store = InMemoryEntryStore::default();
    assert!(entry_store.load_entries().is_empty());
    let entries = finplan_domain::starter_entries();
    entry_store.save_entries(&entries).expect("save entries");
    assert_eq!(entry_store.load_entries(), entries);

    let settings_store = InMemorySettingsStore::default();
    let mut settings = settings_store.load_settings();
    settings.family_members = 2;
    settings_store.save_settings(&settings).expect("save settings");
    assert_eq!(settings_store.load_settings().family_members, 2);
}
