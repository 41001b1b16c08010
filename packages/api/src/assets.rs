// ABOUTME: Static client assets embedded in the binary
// ABOUTME: The enhancement script and stylesheet used by the rendered pages

use axum::{http::header, response::IntoResponse};

const SCRIPT: &str = include_str!("../assets/script.js");
const STYLESHEET: &str = include_str!("../assets/style.css");

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT,
    )
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
