//! Error taxonomy shared by the engine, the store adapters, and the server.

use axum::{Json, http::StatusCode, response::IntoResponse};

pub type ChResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// A referenced entity is absent from the store
	NotFound,
	/// Uniqueness violation on create
	Conflict,
	/// Depth-ordering or required-field violation, carries the user-visible message
	ValidationError(String),
	/// Underlying store failure, fatal to the current operation
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::Conflict => write!(f, "already exists"),
			Error::ValidationError(msg) => write!(f, "{}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let (status, msg) = match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
			Error::Conflict => (StatusCode::BAD_REQUEST, "already exists".to_string()),
			Error::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
			_ => (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string()),
		};
		(status, Json(serde_json::json!({ "error": msg }))).into_response()
	}
}

// vim: ts=4
