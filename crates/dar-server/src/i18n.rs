// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale helpers for request handlers.

use axum::http::{header::ACCEPT_LANGUAGE, HeaderMap};
use dar_common_i18n::{CatalogStore, Locale, Resolution};

use crate::error::ServerError;

/// Resolve the locale segment of a request path against the catalog store.
///
/// Unsupported segments render in the default locale.
pub fn resolve_request<'a>(
	catalogs: &'a CatalogStore,
	requested: Option<&str>,
) -> Result<Resolution<'a>, ServerError> {
	Ok(dar_common_i18n::resolve(catalogs, requested)?)
}

/// Pick a locale from the `Accept-Language` request header.
pub fn locale_from_headers(headers: &HeaderMap) -> Locale {
	dar_common_i18n::negotiate(
		headers
			.get(ACCEPT_LANGUAGE)
			.and_then(|v| v.to_str().ok()),
	)
}
