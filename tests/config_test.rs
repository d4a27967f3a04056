use serial_test::serial;
use std::env;

use google_login_api::config::{
    GoogleOAuthConfig, GOOGLE_AUTH_ENDPOINT, GOOGLE_TOKEN_ENDPOINT, GOOGLE_USERINFO_ENDPOINT,
};

fn set_google_env() {
    env::set_var("GOOGLE_CLIENT_ID", "env-client-id");
    env::set_var("GOOGLE_CLIENT_SECRET", "env-client-secret");
    env::set_var("GOOGLE_REDIRECT_URI", "http://localhost:8080/auth/callback");
}

#[test]
#[serial]
fn test_config_from_env_reads_credentials() {
    set_google_env();

    let config = GoogleOAuthConfig::from_env();

    assert_eq!(config.client_id, "env-client-id");
    assert_eq!(config.client_secret, "env-client-secret");
    assert_eq!(config.redirect_uri, "http://localhost:8080/auth/callback");
    assert_eq!(config.auth_endpoint, GOOGLE_AUTH_ENDPOINT);
    assert_eq!(config.token_endpoint, GOOGLE_TOKEN_ENDPOINT);
    assert_eq!(config.userinfo_endpoint, GOOGLE_USERINFO_ENDPOINT);
}

#[test]
#[serial]
#[should_panic(expected = "Missing GOOGLE_CLIENT_SECRET")]
fn test_config_missing_secret_refuses_to_start() {
    set_google_env();
    env::remove_var("GOOGLE_CLIENT_SECRET");

    let _ = GoogleOAuthConfig::from_env();
}

#[test]
#[serial]
#[should_panic(expected = "Missing GOOGLE_REDIRECT_URI")]
fn test_config_empty_redirect_uri_refuses_to_start() {
    set_google_env();
    env::set_var("GOOGLE_REDIRECT_URI", "");

    let _ = GoogleOAuthConfig::from_env();
}
