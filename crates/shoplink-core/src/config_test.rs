use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("BOT_TOKEN", "test-token");
    m
}

#[test]
fn build_app_config_fails_without_bot_token() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "BOT_TOKEN"),
        "expected MissingEnvVar(BOT_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_token_as_missing() {
    let mut map = HashMap::new();
    map.insert("BOT_TOKEN", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "BOT_TOKEN"),
        "expected MissingEnvVar(BOT_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.discord_token, "test-token");
    assert_eq!(cfg.command_prefix, "!");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.http.request_timeout_secs, 30);
    assert_eq!(cfg.http.user_agent, "shoplink/0.1 (storefront-lookup)");
    assert_eq!(cfg.selection_timeout_secs, 30);
    assert_eq!(cfg.collection_display_limit, 25);
    assert!(cfg.embed_footer.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = full_env();
    map.insert("SHOPLINK_COMMAND_PREFIX", "?");
    map.insert("SHOPLINK_LOG_LEVEL", "debug");
    map.insert("SHOPLINK_REQUEST_TIMEOUT_SECS", "5");
    map.insert("SHOPLINK_USER_AGENT", "custom-agent/2.0");
    map.insert("SHOPLINK_SELECTION_TIMEOUT_SECS", "60");
    map.insert("SHOPLINK_COLLECTION_DISPLAY_LIMIT", "10");
    map.insert("SHOPLINK_EMBED_FOOTER", "shoplink");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.command_prefix, "?");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.http.request_timeout_secs, 5);
    assert_eq!(cfg.http.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.selection_timeout_secs, 60);
    assert_eq!(cfg.collection_display_limit, 10);
    assert_eq!(cfg.embed_footer.as_deref(), Some("shoplink"));
}

#[test]
fn build_app_config_rejects_empty_prefix() {
    let mut map = full_env();
    map.insert("SHOPLINK_COMMAND_PREFIX", "");
    let result = build_app_config(lookup_from_map(&map));
    match result {
        Err(ConfigError::InvalidEnvVar { var, .. }) => assert_eq!(var, "SHOPLINK_COMMAND_PREFIX"),
        other => panic!("expected InvalidEnvVar, got: {other:?}"),
    }
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = full_env();
    map.insert("SHOPLINK_SELECTION_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    match result {
        Err(ConfigError::InvalidEnvVar { var, .. }) => {
            assert_eq!(var, "SHOPLINK_SELECTION_TIMEOUT_SECS");
        }
        other => panic!("expected InvalidEnvVar, got: {other:?}"),
    }
}

#[test]
fn build_app_config_rejects_display_limit_above_card_ceiling() {
    let mut map = full_env();
    map.insert("SHOPLINK_COLLECTION_DISPLAY_LIMIT", "26");
    let result = build_app_config(lookup_from_map(&map));
    match result {
        Err(ConfigError::InvalidEnvVar { var, .. }) => {
            assert_eq!(var, "SHOPLINK_COLLECTION_DISPLAY_LIMIT");
        }
        other => panic!("expected InvalidEnvVar, got: {other:?}"),
    }
}

#[test]
fn build_app_config_rejects_zero_display_limit() {
    let mut map = full_env();
    map.insert("SHOPLINK_COLLECTION_DISPLAY_LIMIT", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn build_http_config_does_not_need_token() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_http_config(&lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn app_config_debug_redacts_token() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-token"));
    assert!(rendered.contains("[redacted]"));
}
