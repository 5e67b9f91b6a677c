use finplan_storage_json::ENTRIES_SCHEMA_VERSION;

/// Package version baked in at compile time.
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static facts about this build printed by `version`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub entries_schema: u32,
    pub profile: &'static str,
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: CLI_VERSION,
        entries_schema: ENTRIES_SCHEMA_VERSION,
        profile: if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
    }
}
