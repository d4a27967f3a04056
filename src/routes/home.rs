use actix_web::{HttpResponse, Responder};

const HOME_PAGE: &str = r#"
    <h2>Welcome to Google OAuth2 Login</h2>
    <a href="/login">Login with Google</a>
    "#;

pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(HOME_PAGE)
}
