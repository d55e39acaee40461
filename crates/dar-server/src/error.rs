// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use dar_common_i18n::I18nError;
use dar_web_map::MapError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Catalog store is broken for a supported locale. Not recoverable per request.
	#[error("Configuration error: {0}")]
	I18n(#[from] I18nError),

	#[error("Map rendering error: {0}")]
	Map(#[from] MapError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::I18n(e) => {
				tracing::error!(error = %e, "aborting render: message catalog unavailable");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse {
						error: "configuration_error".to_string(),
						message: e.to_string(),
					},
				)
			}
			ServerError::Map(e) => {
				tracing::error!(error = %e, "map rendering failed");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse {
						error: "internal_error".to_string(),
						message: "Failed to render map".to_string(),
					},
				)
			}
		};

		(status, Json(error_response)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use dar_common_i18n::Locale;

	#[test]
	fn test_missing_catalog_is_500_naming_locale() {
		let err = ServerError::from(I18nError::MissingCatalog { locale: Locale::Ar });
		assert!(err.to_string().contains("'ar'"));

		let response = err.into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_map_error_is_500() {
		let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let response = ServerError::from(MapError::from(source)).into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
