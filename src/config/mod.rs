use std::env;

pub const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Google OAuth client configuration, loaded once at startup and shared with
/// the handlers through `web::Data`. The endpoint fields default to Google's
/// production URLs; tests construct the struct directly and point them at a
/// stub server.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
}

impl GoogleOAuthConfig {
    /// Reads the Google OAuth credentials from the process environment.
    ///
    /// # Panics
    ///
    /// Panics when `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, or
    /// `GOOGLE_REDIRECT_URI` is unset or empty, so a misconfigured process
    /// never starts serving.
    pub fn from_env() -> Self {
        Self {
            client_id: required_var("GOOGLE_CLIENT_ID"),
            client_secret: required_var("GOOGLE_CLIENT_SECRET"),
            redirect_uri: required_var("GOOGLE_REDIRECT_URI"),
            auth_endpoint: GOOGLE_AUTH_ENDPOINT.to_string(),
            token_endpoint: GOOGLE_TOKEN_ENDPOINT.to_string(),
            userinfo_endpoint: GOOGLE_USERINFO_ENDPOINT.to_string(),
        }
    }
}

fn required_var(name: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => panic!("Missing {} environment variable", name),
    }
}
