//! Extractores con rechazo tipado
//!
//! Envuelven los extractores de Axum para que un body JSON o un query
//! string malformado produzcan el `ErrorResponse` JSON de la aplicación
//! (400, código VALIDATION_ERROR) en lugar del rechazo en texto plano
//! de Axum.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::utils::errors::AppError;

/// Json con rechazo convertido a ValidationError
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::ValidationError(rejection.body_text())),
        }
    }
}

/// Query con rechazo convertido a ValidationError
pub struct AppQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(AppQuery(value)),
            Err(rejection) => Err(AppError::ValidationError(rejection.body_text())),
        }
    }
}
