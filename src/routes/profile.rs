use actix_web::{web, HttpResponse, Responder};

use crate::models::profile::ProfileParams;

// Render the profile page from the query parameters the callback redirect
// carried over. Absent parameters render as empty text.
pub async fn profile(query: web::Query<ProfileParams>) -> impl Responder {
    let params = query.into_inner();
    let name = params.name.unwrap_or_default();
    let email = params.email.unwrap_or_default();
    let picture = params.picture.unwrap_or_default();

    let page = format!(
        r#"<html>
        <head><title>User Profile</title></head>
        <body style='text-align:center; font-family:sans-serif;'>
            <h1>Welcome, {}!</h1>
            <img src="{}" alt="Profile Picture" width="120"/><br>
            <p>Email: {}</p>
        </body>
    </html>"#,
        name, picture, email
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}
