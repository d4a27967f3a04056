use serde::{Deserialize, Serialize};

// Query parameters from Google OAuth callback
#[derive(Debug, Deserialize)]
pub struct GoogleAuthCallbackParams {
    pub code: Option<String>,
}

// User info from Google
#[derive(Debug, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    pub id: Option<String>,
    pub email: Option<String>,
    pub verified_email: Option<bool>,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture: Option<String>,
    pub locale: Option<String>,
}
