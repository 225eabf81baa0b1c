//! Root greeting, handy as a smoke test that the listener is up.

use actix_web::{HttpResponse, get};

/// Greeting body returned by `GET /`.
pub const GREETING: &str = "Hello World!";

/// Say hello.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tags = ["greeting"],
    operation_id = "greet"
)]
#[get("/")]
pub async fn greet() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(GREETING)
}
