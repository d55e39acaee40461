// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health check handler.

use axum::{extract::State, Json};
use dar_common_i18n::{available_locales, DEFAULT_LOCALE};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	pub default_locale: &'static str,
	pub locales: Vec<&'static str>,
}

/// GET /health - Liveness check reporting the served locales.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	let locales = available_locales()
		.iter()
		.filter(|info| state.catalogs.get(info.locale).is_some())
		.map(|info| info.code())
		.collect();

	Json(HealthResponse {
		status: "ok",
		version: crate::version::VERSION,
		default_locale: DEFAULT_LOCALE.as_str(),
		locales,
	})
}
