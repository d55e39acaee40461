// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Home page, root redirect and the shared error page.

use axum::{
	extract::{Path, State},
	http::{HeaderMap, StatusCode},
	response::{Html, IntoResponse, Redirect, Response},
};
use dar_common_i18n::Resolution;
use dar_web_map::markup::escape_html;

use crate::{
	api::AppState,
	error::ServerError,
	i18n::{locale_from_headers, resolve_request},
	layout::{render_document, LayoutOptions, Page},
};

/// GET / - Redirect to the locale negotiated from `Accept-Language`.
pub async fn root_redirect(headers: HeaderMap) -> Redirect {
	let locale = locale_from_headers(&headers);
	tracing::debug!(%locale, "redirecting to negotiated locale");
	Redirect::temporary(&format!("/{locale}"))
}

/// GET /{locale} - Home page.
pub async fn home(
	State(state): State<AppState>,
	Path(locale): Path<String>,
) -> Result<Html<String>, ServerError> {
	let resolution = resolve_request(&state.catalogs, Some(&locale))?;
	let tag = resolution.locale.as_str();
	let center = state.map.center;

	let body = format!(
		r#"<section class="home">
    <h1>{heading}</h1>
    <p>{intro}</p>
    <p>
        <a class="button" href="/{tag}/listings/new">{cta_new}</a>
        <a class="button" href="/{tag}/listings/location?lat={lat}&amp;lng={lng}">{cta_location}</a>
    </p>
</section>"#,
		heading = escape_html(resolution.t("home.heading")),
		intro = escape_html(resolution.t("home.intro")),
		cta_new = escape_html(resolution.t("home.cta_new")),
		cta_location = escape_html(resolution.t("home.cta_location")),
		lat = center.lat,
		lng = center.lng,
	);

	let page = Page::new("", body);
	Ok(Html(render_document(&resolution, &page, &state.layout)))
}

/// A localized 400 page carrying `message`.
pub(crate) fn bad_request_page(
	resolution: &Resolution<'_>,
	path: &str,
	message: &str,
	layout: &LayoutOptions,
) -> Response {
	let tag = resolution.locale.as_str();
	let body = format!(
		r#"<section class="error">
    <h1>{heading}</h1>
    <p class="alert" role="alert">{message}</p>
    <p><a href="/{tag}">{back}</a></p>
</section>"#,
		heading = escape_html(resolution.t("errors.bad_request")),
		message = escape_html(message),
		back = escape_html(resolution.t("errors.back_home")),
	);

	let page = Page::new(path, body).with_title(resolution.t("errors.bad_request"));
	(
		StatusCode::BAD_REQUEST,
		Html(render_document(resolution, &page, layout)),
	)
		.into_response()
}
