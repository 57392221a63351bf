use std::collections::HashSet;
use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::{request::Parts, Uri},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::validation::parse_leading_int;

/// Query extractor that keeps the first value of a repeated key and reports
/// decode failures as JSON BadRequest
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().map(first_occurrences).unwrap_or_default();
        let uri: Uri = format!("/?{}", query)
            .parse()
            .map_err(|_| AppQueryRejection("Failed to parse query string".to_string()))?;

        Query::<T>::try_from_uri(&uri)
            .map(|Query(value)| Self(value))
            .map_err(|rejection| {
                AppQueryRejection(format!("Invalid query string: {}", rejection.body_text()))
            })
    }
}

/// Drop every `key=value` pair whose key already appeared earlier in the query
fn first_occurrences(raw: &str) -> String {
    let mut seen = HashSet::new();
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| seen.insert(pair.split_once('=').map_or(*pair, |(key, _)| key)))
        .collect::<Vec<_>>()
        .join("&")
}

pub struct AppQueryRejection(String);

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        AppError::BadRequest(self.0).into_response()
    }
}

/// Text of the single path parameter of a route.
///
/// `None` when the segment cannot be decoded (for example invalid UTF-8), so the
/// route answers with its own not-found outcome instead of a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathText(pub Option<String>);

impl<S> FromRequestParts<S> for PathText
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|Path(raw)| raw);
        Ok(Self(raw))
    }
}

/// Numeric id taken from the single path parameter of a route.
///
/// The segment is parsed as a leading integer; `None` means it held no digits
/// or could not be decoded, and therefore cannot match any record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub Option<i64>);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let PathText(raw) = PathText::from_request_parts(parts, state).await?;
        Ok(Self(raw.as_deref().and_then(parse_leading_int)))
    }
}
