use std::collections::BTreeMap;

/// Connection variables scrubbed from the child's environment. dbt resolves
/// these via `env_var()` in profiles.yml; leftovers from the caller's shell
/// would mask whether the profile stands on its own.
pub const SCRUBBED_VARS: [&str; 6] = [
    "DBT_HOST",
    "DBT_USER",
    "DBT_PASSWORD",
    "DBT_DATABASE",
    "DBT_PORT",
    "DBT_SCHEMA",
];

/// Profiles directory handed to the child, overwriting any inherited value.
pub const PROFILES_DIR: &str = ".";

/// Snapshot the ambient process environment as an owned map.
///
/// Variables whose name or value is not valid UTF-8 are skipped; dbt only
/// reads text-valued variables anyway.
pub fn ambient_environment() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// Derive the child's environment from an ambient snapshot.
///
/// Pure removal/override over the input map: the six connection variables are
/// dropped and `DBT_PROFILES_DIR` is set to `.`. The caller's own environment
/// is never mutated; the returned map is passed to the child wholesale.
pub fn scrub_environment(ambient: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut env = ambient.clone();
    for var in SCRUBBED_VARS {
        env.remove(var);
    }
    env.insert("DBT_PROFILES_DIR".to_string(), PROFILES_DIR.to_string());
    env
}
