use forcemap_client::{ClientError, Config};
use pretty_assertions::assert_eq;

fn full_config() -> Config {
    Config::configure(|c| {
        c.oauth_token = "OAUTH_TOKEN".to_string();
        c.refresh_token = "REFRESH_TOKEN".to_string();
        c.instance_url = "https://na1.salesforce.com".to_string();
        c.client_id = "CLIENT_ID".to_string();
        c.client_secret = "CLIENT_SECRET".to_string();
    })
}

// ── Defaults ────────────────────────────────────────────────────

#[test]
fn default_config_has_empty_credentials() {
    let config = Config::default();
    assert!(config.oauth_token.is_empty());
    assert!(config.refresh_token.is_empty());
    assert!(config.instance_url.is_empty());
    assert!(config.client_id.is_empty());
    assert!(config.client_secret.is_empty());
}

#[test]
fn default_config_points_at_production_endpoints() {
    let config = Config::default();
    assert_eq!(config.login_url, "https://login.salesforce.com");
    assert_eq!(config.api_version, "v59.0");
}

#[test]
fn configure_applies_mutations() {
    let config = full_config();
    assert_eq!(config.oauth_token, "OAUTH_TOKEN");
    assert_eq!(config.instance_url, "https://na1.salesforce.com");
    assert_eq!(config.client_secret, "CLIENT_SECRET");
}

// ── valid_environment ───────────────────────────────────────────

#[test]
fn valid_environment_with_all_credentials() {
    assert!(full_config().valid_environment());
}

#[test]
fn invalid_environment_when_any_credential_is_empty() {
    let clear: [fn(&mut Config); 5] = [
        |c| c.oauth_token.clear(),
        |c| c.refresh_token.clear(),
        |c| c.instance_url.clear(),
        |c| c.client_id.clear(),
        |c| c.client_secret.clear(),
    ];

    for clear_one in clear {
        let mut config = full_config();
        clear_one(&mut config);
        assert!(!config.valid_environment());
    }
}

#[test]
fn endpoint_attributes_are_not_required() {
    let mut config = full_config();
    config.login_url.clear();
    config.api_version.clear();
    assert!(config.valid_environment());
}

// ── client construction ─────────────────────────────────────────

#[test]
fn client_fails_on_invalid_environment() {
    let err = Config::default().client().unwrap_err();
    assert!(matches!(err, ClientError::InvalidEnvironment));
}

#[test]
fn client_error_message_names_required_attributes() {
    let err = Config::default().client().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("oauth_token"));
    assert!(message.contains("client_secret"));
}

#[test]
fn client_succeeds_on_valid_environment() {
    assert!(full_config().client().is_ok());
}

// ── Serde ───────────────────────────────────────────────────────

#[test]
fn config_serde_roundtrip() {
    let config = full_config();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.oauth_token, config.oauth_token);
    assert_eq!(parsed.instance_url, config.instance_url);
    assert_eq!(parsed.login_url, config.login_url);
    assert_eq!(parsed.api_version, config.api_version);
}

#[test]
fn config_debug_lists_fields() {
    let debug = format!("{:?}", Config::default());
    assert!(debug.contains("instance_url"));
    assert!(debug.contains("api_version"));
}
