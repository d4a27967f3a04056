use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use google_login_api::config::GoogleOAuthConfig;
use google_login_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    // Refuses to start when any Google OAuth credential is missing or empty
    let config = GoogleOAuthConfig::from_env();

    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(config.clone()))
            .route("/", web::get().to(routes::home::home))
            .route("/health", web::get().to(routes::health::health_check))
            .route("/login", web::get().to(routes::google_auth::google_login))
            .route(
                "/auth/callback",
                web::get().to(routes::google_auth::google_auth_callback),
            )
            .route("/profile", web::get().to(routes::profile::profile))
    })
    .bind((host, port))?
    .run()
    .await
}
