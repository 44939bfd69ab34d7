use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

use super::*;

#[test]
fn default_collection_url_joins_base_and_cohort() {
    let url = Settings::default().collection_url().expect("url");
    assert_eq!(
        url.as_str(),
        "https://fsa-puppy-bowl.herokuapp.com/api/2510-Jerrad"
    );
}

#[test]
fn collection_url_tolerates_stray_slashes() {
    let settings = Settings {
        api_base: "http://localhost:3000/api/".into(),
        cohort: "/demo/".into(),
        ..Settings::default()
    };
    assert_eq!(
        settings.collection_url().expect("url").as_str(),
        "http://localhost:3000/api/demo"
    );
}

#[test]
fn collection_url_rejects_garbage() {
    let settings = Settings {
        api_base: "not a url".into(),
        ..Settings::default()
    };
    assert!(settings.collection_url().is_err());

    let settings = Settings {
        cohort: "  ".into(),
        ..Settings::default()
    };
    assert!(settings.collection_url().is_err());
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    settings
        .apply_file("cohort = \"2601-test\"\nrequest_timeout_secs = 3\n")
        .expect("parse");
    assert_eq!(settings.cohort, "2601-test");
    assert_eq!(settings.request_timeout_secs, 3);
    assert_eq!(settings.api_base, Settings::default().api_base);
}

#[test]
fn app_prefixed_env_wins_over_roster_prefix() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ROSTER_COHORT", "from-roster"),
        ("APP__COHORT", "from-app"),
        ("ROSTER_API_BASE", "http://example.test/api"),
        ("APP__REQUEST_TIMEOUT_SECS", "not-a-number"),
    ]);
    let mut settings = Settings::default();
    settings.apply_env(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(settings.cohort, "from-app");
    assert_eq!(settings.api_base, "http://example.test/api");
    assert_eq!(settings.request_timeout_secs, 10);
}

#[test]
fn zero_timeout_is_clamped() {
    let settings = Settings {
        request_timeout_secs: 0,
        ..Settings::default()
    };
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
}

#[test]
fn malformed_file_is_reported() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("roster_cli_config_test_{suffix}.toml"));
    fs::write(&path, "cohort = [").expect("write");

    let err = load_settings(&path).expect_err("must fail");
    assert!(err.to_string().contains("failed to parse config"));

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = env::temp_dir().join("roster_cli_config_test_does_not_exist.toml");
    let settings = load_settings(&path).expect("defaults");
    assert_eq!(settings.request_timeout_secs, Settings::default().request_timeout_secs);
}
