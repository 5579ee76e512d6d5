use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW,
};
use actix_web::http::Method;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, HttpResponseBuilder, Responder};
use serde_json::json;
use std::collections::HashMap;

use crate::controller::aggregate::Aggregator;

const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// Registers `/aggregate` and `/health`. Shared by the binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/aggregate")
            .route(web::get().to(aggregate))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    )
    .route("/health", web::get().to(HttpResponse::Ok));
}

fn with_cors(mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
    builder
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"));
    builder
}

pub async fn aggregate(
    query: web::Query<HashMap<String, String>>,
    aggregator: Data<Aggregator>,
) -> impl Responder {
    let username = query
        .get("username")
        .map(|s| s.trim())
        .unwrap_or_default()
        .to_string();
    if username.is_empty() {
        return with_cors(HttpResponse::BadRequest()).json(json!({"error": "Username is required"}));
    }

    let result = aggregator.aggregate(&username).await;
    with_cors(HttpResponse::Ok()).json(result)
}

pub async fn preflight() -> HttpResponse {
    with_cors(HttpResponse::Ok()).finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    with_cors(HttpResponse::MethodNotAllowed())
        .insert_header((ALLOW, ALLOWED_METHODS))
        .finish()
}
