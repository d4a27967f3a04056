use oauth2::{
    basic::BasicClient, reqwest::async_http_client, AuthType, AuthUrl, AuthorizationCode,
    ClientId, ClientSecret, RedirectUrl, RequestTokenError, TokenResponse, TokenUrl,
};
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::config::GoogleOAuthConfig;
use crate::models::google_auth::GoogleUserInfo;

// Create a new OAuth client for Google
pub fn create_google_oauth_client(config: &GoogleOAuthConfig) -> BasicClient {
    BasicClient::new(
        ClientId::new(config.client_id.clone()),
        Some(ClientSecret::new(config.client_secret.clone())),
        AuthUrl::new(config.auth_endpoint.clone()).expect("Invalid authorization endpoint URL"),
        Some(TokenUrl::new(config.token_endpoint.clone()).expect("Invalid token endpoint URL")),
    )
    .set_redirect_uri(RedirectUrl::new(config.redirect_uri.clone()).expect("Invalid redirect URL"))
    // Client credentials travel in the form body, not a Basic auth header
    .set_auth_type(AuthType::RequestBody)
}

// Build the authorization URL the login route redirects to. Constructed by
// hand rather than through the oauth2 builder: the consent redirect carries
// these six parameters and nothing else.
pub fn build_authorize_url(config: &GoogleOAuthConfig) -> Url {
    Url::parse_with_params(
        &config.auth_endpoint,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", "openid email profile"),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .expect("Invalid authorization endpoint URL")
}

// Exchange an authorization code for an access token. Google refuses a bad
// code (expired, reused, mismatched redirect_uri) with an OAuth error
// response carrying no access token; that case surfaces as Ok(None).
pub async fn exchange_code_for_token(
    config: &GoogleOAuthConfig,
    code: &str,
) -> Result<Option<String>, String> {
    let client = create_google_oauth_client(config);

    match client
        .exchange_code(AuthorizationCode::new(code.to_string()))
        .request_async(async_http_client)
        .await
    {
        Ok(token) => Ok(Some(token.access_token().secret().clone())),
        Err(RequestTokenError::ServerResponse(_)) => Ok(None),
        Err(e) => Err(format!("Failed to exchange authorization code: {}", e)),
    }
}

// Fetch user information using the access token
pub async fn get_google_user_info(
    config: &GoogleOAuthConfig,
    access_token: &str,
) -> Result<GoogleUserInfo, String> {
    let client = ReqwestClient::new();
    let response = client
        .get(&config.userinfo_endpoint)
        .header("Authorization", format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to request user info: {}", e))?;

    if !response.status().is_success() {
        return Err(format!(
            "Google API returned error status: {}",
            response.status()
        ));
    }

    response
        .json::<GoogleUserInfo>()
        .await
        .map_err(|e| format!("Failed to parse user info: {}", e))
}
