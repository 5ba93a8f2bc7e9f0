//! Error handling.

use axum::{
    extract::rejection::QueryRejection,
    http::header,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{event, Level};

/// Olympics analytics server error type
///
/// This type encapsulates the various errors that may occur.
/// Each variant may result in a different API error response.
#[derive(Debug, Error)]
pub enum MedalistError {
    /// Error reading a source dataset file. Fatal at startup; the service never starts
    /// partially.
    #[error("failed to read dataset file {}", path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed year parameter on the medal tally query
    #[error("invalid year {year:?}, expected \"Overall\" or an integer year")]
    InvalidYear { year: String },

    /// Error deserialising the query string
    #[error("query string is not valid")]
    QueryStringRejection(#[from] QueryRejection),

    /// Error validating query parameters (single error)
    #[error("query parameters are not valid")]
    QueryValidationSingle(#[from] validator::ValidationError),

    /// Error validating query parameters (multiple errors)
    #[error("query parameters are not valid")]
    QueryValidation(#[from] validator::ValidationErrors),
}

impl IntoResponse for MedalistError {
    /// Convert from a `MedalistError` into an [axum::response::Response].
    fn into_response(self) -> Response {
        ErrorResponse::from(self).into_response()
    }
}

/// Body of error response
///
/// Implements serde (de)serialise.
#[derive(Deserialize, Serialize)]
struct ErrorBody {
    /// Main error message
    message: String,

    /// Optional list of causes
    #[serde(skip_serializing_if = "Option::is_none")]
    caused_by: Option<Vec<String>>,
}

impl ErrorBody {
    /// Return a new ErrorBody
    ///
    /// # Arguments
    ///
    /// * `error`: The error that occurred
    fn new<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        let message = error.to_string();
        let mut caused_by = None;
        let mut current = error.source();
        while let Some(source) = current {
            let mut causes: Vec<String> = caused_by.unwrap_or_default();
            causes.push(source.to_string());
            caused_by = Some(causes);
            current = source.source();
        }
        // Remove duplicate entries.
        if let Some(caused_by) = caused_by.as_mut() {
            caused_by.dedup()
        }
        ErrorBody { message, caused_by }
    }
}

/// A response to send in error cases
///
/// Implements serde (de)serialise.
#[derive(Deserialize, Serialize)]
struct ErrorResponse {
    /// HTTP status of the response
    #[serde(skip)]
    status: StatusCode,

    /// Response body
    error: ErrorBody,
}

impl ErrorResponse {
    /// Return a new ErrorResponse
    ///
    /// # Arguments
    ///
    /// * `status`: HTTP status of the response
    /// * `error`: The error that occurred. This will be formatted into a suitable `ErrorBody`
    fn new<E>(status: StatusCode, error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        ErrorResponse {
            status,
            error: ErrorBody::new(error),
        }
    }

    /// Return a 400 bad request ErrorResponse
    fn bad_request<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// Return a 500 internal server error ErrorResponse
    fn internal_server_error<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}

impl From<MedalistError> for ErrorResponse {
    /// Convert from a `MedalistError` into an `ErrorResponse`.
    fn from(error: MedalistError) -> Self {
        let response = match &error {
            // Bad request
            MedalistError::InvalidYear { year: _ }
            | MedalistError::QueryStringRejection(_)
            | MedalistError::QueryValidationSingle(_)
            | MedalistError::QueryValidation(_) => Self::bad_request(&error),

            // Internal server error. Dataset errors are fatal at startup, so this mapping only
            // applies if one ever crosses the HTTP boundary.
            MedalistError::DatasetRead { path: _, source: _ } => {
                Self::internal_server_error(&error)
            }
        };

        // Log server errors.
        if response.status.is_server_error() {
            event!(Level::ERROR, "{}", error.to_string());
            let mut current = error.source();
            while let Some(source) = current {
                event!(Level::ERROR, "Caused by: {}", source.to_string());
                current = source.source();
            }
        }

        response
    }
}

impl IntoResponse for ErrorResponse {
    /// Convert from an `ErrorResponse` into an `axum::response::Response`.
    ///
    /// Renders the response as JSON.
    fn into_response(self) -> Response {
        let json_body = serde_json::to_string_pretty(&self);
        match json_body {
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialise error response: {}", err),
            )
                .into_response(),
            Ok(json_body) => (
                self.status,
                [(&header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
                json_body,
            )
                .into_response(),
        }
    }
}
