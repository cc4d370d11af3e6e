//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor whose rejections become `AppError::BadRequest`.
///
/// Behaves like `axum::Json` but reports malformed bodies with the
/// application's `ErrorDto` shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameter extractor whose rejections become `AppError::BadRequest`.
///
/// A non-numeric id such as `/api/gyms/abc` gets a JSON `ErrorDto` instead of
/// axum's plain text rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
