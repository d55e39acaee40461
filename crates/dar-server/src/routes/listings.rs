// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Listing pages: the location picker and the read-only location map.

use axum::{
	extract::{
		rejection::{FormRejection, QueryRejection},
		Path, Query, State,
	},
	http::StatusCode,
	response::{Html, IntoResponse, Response},
	Form,
};
use dar_common_i18n::Resolution;
use dar_web_map::{
	markup::escape_html, InteractiveMap, InteractiveMapProps, LatLng, ReadOnlyMap,
	ReadOnlyMapProps,
};
use serde::Deserialize;

use crate::{
	api::AppState,
	error::ServerError,
	i18n::resolve_request,
	layout::{render_document, LayoutOptions, Page},
	routes::pages::bad_request_page,
};

const PICKER_ID: &str = "listing-picker";
const LOCATION_ID: &str = "listing-location";
const PICKER_PATH: &str = "/listings/new";
const LOCATION_PATH: &str = "/listings/location";

/// A click on the picker, submitted by the map bootstrap script.
#[derive(Debug, Deserialize)]
pub struct ClickForm {
	pub lat: f64,
	pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
	pub lat: Option<f64>,
	pub lng: Option<f64>,
	pub label: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PickerError {
	#[error("coordinate out of range: {0}")]
	OutOfRange(LatLng),
}

/// Position-change callback of the listing picker.
fn check_range(at: LatLng) -> Result<(), PickerError> {
	if at.is_valid() {
		Ok(())
	} else {
		Err(PickerError::OutOfRange(at))
	}
}

fn picker(
	state: &AppState,
	resolution: &Resolution<'_>,
) -> InteractiveMap<fn(LatLng) -> Result<(), PickerError>> {
	InteractiveMap::new(
		PICKER_ID,
		InteractiveMapProps {
			center: state.map.center,
			zoom: state.map.zoom,
			position: None,
			on_position_change: check_range as fn(LatLng) -> Result<(), PickerError>,
		},
		state.map.layers.clone(),
	)
	.with_marker_label(resolution.t("map.selected_marker"))
}

fn render_picker<F>(
	resolution: &Resolution<'_>,
	map: &InteractiveMap<F>,
	error: Option<&str>,
	layout: &LayoutOptions,
) -> Result<String, ServerError> {
	let tag = resolution.locale.as_str();
	let map_html = map.render().to_html()?;

	let (lat, lng) = match map.position() {
		Some(at) => (at.lat.to_string(), at.lng.to_string()),
		None => (String::new(), String::new()),
	};
	let selection = match map.position() {
		Some(at) => {
			let lat = format!("{:.6}", at.lat);
			let lng = format!("{:.6}", at.lng);
			let selected = resolution.t_fmt(
				"listing.new.selected",
				&[("lat", lat.as_str()), ("lng", lng.as_str())],
			);
			format!(
				r#"<p class="selection">{selected}</p>
    <p><a href="/{tag}{PICKER_PATH}">{reset}</a></p>"#,
				selected = escape_html(&selected),
				reset = escape_html(resolution.t("listing.new.reset")),
			)
		}
		None => format!(
			r#"<p class="selection">{}</p>"#,
			escape_html(resolution.t("listing.new.no_selection"))
		),
	};
	let alert = error
		.map(|message| {
			format!(
				r#"<p class="alert" role="alert">{}</p>"#,
				escape_html(message)
			)
		})
		.unwrap_or_default();

	let body = format!(
		r#"<section class="listing-new">
    <h1>{title}</h1>
    <p>{instructions}</p>
    {alert}
    {map_html}
    <form id="{form_id}" method="post" action="/{tag}{PICKER_PATH}">
        <input type="hidden" name="lat" value="{lat}">
        <input type="hidden" name="lng" value="{lng}">
    </form>
    {selection}
</section>"#,
		title = escape_html(resolution.t("listing.new.title")),
		instructions = escape_html(resolution.t("listing.new.instructions")),
		form_id = escape_html(map.click_form_id()),
	);

	let page = Page::new(PICKER_PATH, body)
		.with_title(resolution.t("listing.new.title"))
		.with_map();
	Ok(render_document(resolution, &page, layout))
}

/// GET /{locale}/listings/new - Location picker without a selection.
pub async fn new_listing(
	State(state): State<AppState>,
	Path(locale): Path<String>,
) -> Result<Html<String>, ServerError> {
	let resolution = resolve_request(&state.catalogs, Some(&locale))?;
	let map = picker(&state, &resolution);
	Ok(Html(render_picker(&resolution, &map, None, &state.layout)?))
}

/// POST /{locale}/listings/new - Apply a click on the picker.
///
/// Blank or non-numeric coordinates are rejected like out-of-range ones.
pub async fn pick_location(
	State(state): State<AppState>,
	Path(locale): Path<String>,
	click: Result<Form<ClickForm>, FormRejection>,
) -> Result<Response, ServerError> {
	let resolution = resolve_request(&state.catalogs, Some(&locale))?;
	let mut map = picker(&state, &resolution);

	let click = match click {
		Ok(Form(click)) => click,
		Err(rejection) => {
			tracing::debug!(error = %rejection, "malformed listing location");
			return rejected_picker(&resolution, &map, &state.layout);
		}
	};

	match map.click(LatLng::new(click.lat, click.lng)) {
		Ok(()) => {
			tracing::info!(lat = click.lat, lng = click.lng, "listing location selected");
			let html = render_picker(&resolution, &map, None, &state.layout)?;
			Ok(Html(html).into_response())
		}
		Err(e) => {
			tracing::debug!(error = %e, "rejected listing location");
			rejected_picker(&resolution, &map, &state.layout)
		}
	}
}

fn rejected_picker<F>(
	resolution: &Resolution<'_>,
	map: &InteractiveMap<F>,
	layout: &LayoutOptions,
) -> Result<Response, ServerError> {
	let html = render_picker(
		resolution,
		map,
		Some(resolution.t("listing.new.invalid_coordinate")),
		layout,
	)?;
	Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
}

/// GET /{locale}/listings/location?lat&lng&label - Read-only location map.
pub async fn show_location(
	State(state): State<AppState>,
	Path(locale): Path<String>,
	query: Result<Query<LocationQuery>, QueryRejection>,
) -> Result<Response, ServerError> {
	let resolution = resolve_request(&state.catalogs, Some(&locale))?;

	let query = match query {
		Ok(Query(query)) => query,
		Err(rejection) => {
			tracing::debug!(error = %rejection, "malformed location query");
			return Ok(bad_request_page(
				&resolution,
				LOCATION_PATH,
				resolution.t("listing.new.invalid_coordinate"),
				&state.layout,
			));
		}
	};

	let (Some(lat), Some(lng)) = (query.lat, query.lng) else {
		return Ok(bad_request_page(
			&resolution,
			LOCATION_PATH,
			resolution.t("listing.location.missing_coordinates"),
			&state.layout,
		));
	};
	let center = LatLng::new(lat, lng);
	if !center.is_valid() {
		return Ok(bad_request_page(
			&resolution,
			LOCATION_PATH,
			resolution.t("listing.new.invalid_coordinate"),
			&state.layout,
		));
	}

	let label = query
		.label
		.as_deref()
		.map(str::trim)
		.filter(|label| !label.is_empty())
		.unwrap_or_else(|| resolution.t("listing.location.default_label"));

	let map = ReadOnlyMap::new(
		LOCATION_ID,
		ReadOnlyMapProps {
			center,
			zoom: state.map.zoom,
			label: label.to_string(),
		},
		state.map.layers.clone(),
	);

	let body = format!(
		r#"<section class="listing-location">
    <h1>{title}</h1>
    <p>{label} · {center}</p>
    {map_html}
</section>"#,
		title = escape_html(resolution.t("listing.location.title")),
		label = escape_html(label),
		map_html = map.render().to_html()?,
	);

	let mut query_string = url::form_urlencoded::Serializer::new(String::new());
	query_string
		.append_pair("lat", &lat.to_string())
		.append_pair("lng", &lng.to_string());
	if let Some(label) = &query.label {
		query_string.append_pair("label", label);
	}
	let path = format!("{LOCATION_PATH}?{}", query_string.finish());

	let page = Page::new(path, body)
		.with_title(resolution.t("listing.location.title"))
		.with_map();
	Ok(Html(render_document(&resolution, &page, &state.layout)).into_response())
}
