use actix_web::{middleware::Logger, web, App};

use google_login_api::config::GoogleOAuthConfig;
use google_login_api::routes;

pub struct TestApp {
    pub config: GoogleOAuthConfig,
}

impl TestApp {
    // Fake credentials with every Google endpoint rooted at `google_base`,
    // so a wiremock server can stand in for Google.
    pub fn new(google_base: &str) -> Self {
        Self {
            config: test_config(google_base),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .wrap(Logger::default())
            .route("/", web::get().to(routes::home::home))
            .route("/health", web::get().to(routes::health::health_check))
            .route("/login", web::get().to(routes::google_auth::google_login))
            .route(
                "/auth/callback",
                web::get().to(routes::google_auth::google_auth_callback),
            )
            .route("/profile", web::get().to(routes::profile::profile))
    }
}

pub fn test_config(google_base: &str) -> GoogleOAuthConfig {
    GoogleOAuthConfig {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://localhost:8080/auth/callback".to_string(),
        auth_endpoint: format!("{}/o/oauth2/v2/auth", google_base),
        token_endpoint: format!("{}/token", google_base),
        userinfo_endpoint: format!("{}/oauth2/v2/userinfo", google_base),
    }
}
