use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    error::AppError, model::user::User, router::router, service::auth::token::TokenService,
    state::AppState,
};
use test_utils::{builder::TestBuilder, factory};


const SECRET: &str = "controller-test-secret-long-enough-for-hs256";

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone(), TokenService::new(SECRET, 60)))
}

/// Issues a token for an account created by a factory.
fn token_for(model: entity::user::Model) -> Result<String, AppError> {
    TokenService::new(SECRET, 60).issue(&User::from_entity(model)?)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request through the router and decodes the JSON body.
///
/// Non-JSON bodies decode as `Value::Null`.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
