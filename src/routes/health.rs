use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::config::GoogleOAuthConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(config: web::Data<GoogleOAuthConfig>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health
        .services
        .insert("google_auth".to_string(), check_google_auth(&config));

    HttpResponse::Ok().json(health)
}

fn check_google_auth(config: &GoogleOAuthConfig) -> ServiceStatus {
    // The process refuses to start without credentials, so this only masks
    // and reports what it was configured with.
    let masked_id = if config.client_id.len() > 8 {
        format!(
            "{}...{}",
            &config.client_id[0..6],
            &config.client_id[config.client_id.len() - 4..]
        )
    } else {
        "***".to_string()
    };

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!(
            "Google Auth configured, Client ID: {}, Redirect: {}",
            masked_id, config.redirect_uri
        )),
    }
}
