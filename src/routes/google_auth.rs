use actix_web::{http::header, web, HttpResponse, Responder};
use url::form_urlencoded;

use crate::config::GoogleOAuthConfig;
use crate::models::google_auth::GoogleAuthCallbackParams;
use crate::services::google_auth_service::{
    build_authorize_url, exchange_code_for_token, get_google_user_info,
};

// Initiate Google OAuth flow
pub async fn google_login(config: web::Data<GoogleOAuthConfig>) -> impl Responder {
    let auth_url = build_authorize_url(&config);
    log::info!("Redirecting to Google consent screen");

    HttpResponse::Found()
        .insert_header((header::LOCATION, auth_url.to_string()))
        .finish()
}

// Handle Google OAuth callback
pub async fn google_auth_callback(
    config: web::Data<GoogleOAuthConfig>,
    query: web::Query<GoogleAuthCallbackParams>,
) -> impl Responder {
    // Google omits `code` when the user denies consent; an empty value is
    // treated the same as a missing one.
    let code = match query.into_inner().code {
        Some(code) if !code.is_empty() => code,
        _ => return HttpResponse::BadRequest().body("Authorization code not found"),
    };

    let access_token = match exchange_code_for_token(&config, &code).await {
        Ok(Some(access_token)) => access_token,
        Ok(None) => return HttpResponse::BadRequest().body("Failed to retrieve access token"),
        Err(e) => {
            eprintln!("Failed to exchange code for token: {}", e);
            return HttpResponse::InternalServerError().body(format!("Token error: {}", e));
        }
    };

    let user_info = match get_google_user_info(&config, &access_token).await {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Failed to get user info: {}", e);
            return HttpResponse::InternalServerError().body(format!("User info error: {}", e));
        }
    };

    // The profile page needs all three claims; a response missing any of
    // them is malformed.
    let (name, email, picture) = match (user_info.name, user_info.email, user_info.picture) {
        (Some(name), Some(email), Some(picture)) => (name, email, picture),
        _ => {
            eprintln!("Userinfo response missing name, email, or picture");
            return HttpResponse::InternalServerError()
                .body("User info error: incomplete profile returned by Google");
        }
    };

    log::info!("Google sign-in completed for {}", email);

    let profile_query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", &name)
        .append_pair("email", &email)
        .append_pair("picture", &picture)
        .finish();

    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/profile?{}", profile_query)))
        .finish()
}
