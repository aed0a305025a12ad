use axum::extract::FromRequest;
use crate::errors::AppError;

/// `Json` extractor whose rejections become `AppError`, so malformed bodies
/// get the same `{"detail": ...}` response as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
