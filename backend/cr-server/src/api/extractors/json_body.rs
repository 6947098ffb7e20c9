//! JSON request bodies that fail with the API error shape

use crate::ApiError;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

/// Drop-in for `axum::Json` on handler arguments.
///
/// A missing content type, a syntax error or a badly typed field comes back
/// as a 400 `{message, code}` instead of axum's plain-text 415/422.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let path = req.uri().path().to_string();

            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => {
                    log::debug!("Rejected body for {}: {}", path, rejection.body_text());
                    Err(ApiError::from(rejection))
                }
            }
        }
    }
}
