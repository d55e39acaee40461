// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for the localized pages.
//!
//! Tests cover:
//! - Document `lang`/`dir` for supported and unsupported locale segments
//! - Root redirect from `Accept-Language`
//! - Location picker clicks, accepted and rejected
//! - Read-only location page

use axum::{
	body::Body,
	http::{header, Request, StatusCode},
	response::Response,
};
use dar_server::api::{create_app_state, create_router};
use dar_server::ServerConfig;
use proptest::prelude::*;
use tower::ServiceExt;

fn setup_test_app() -> axum::Router {
	let state = create_app_state(&ServerConfig::default()).unwrap();
	create_router(state)
}

async fn get(uri: &str) -> Response {
	setup_test_app()
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap()
}

async fn post_click(uri: &str, form: &str) -> Response {
	setup_test_app()
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(uri)
				.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
				.body(Body::from(form.to_string()))
				.unwrap(),
		)
		.await
		.unwrap()
}

async fn body_text(response: Response) -> String {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================================
// Locale Resolution
// ============================================================================

#[tokio::test]
async fn test_arabic_home_is_rtl() {
	let response = get("/ar").await;
	assert_eq!(response.status(), StatusCode::OK);

	let html = body_text(response).await;
	assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
	assert!(html.contains("Noto+Kufi+Arabic"));
}

#[tokio::test]
async fn test_english_home_is_ltr() {
	let html = body_text(get("/en").await).await;
	assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
	assert!(html.contains("Find the place that fits you"));
}

#[tokio::test]
async fn test_unsupported_locale_renders_french() {
	let response = get("/xx").await;
	assert_eq!(response.status(), StatusCode::OK);

	let html = body_text(response).await;
	assert!(html.contains(r#"<html lang="fr" dir="ltr">"#));
	assert!(html.contains("Trouvez le bien qui vous ressemble"));
}

#[tokio::test]
async fn test_root_redirects_to_negotiated_locale() {
	let response = setup_test_app()
		.oneshot(
			Request::builder()
				.uri("/")
				.header(header::ACCEPT_LANGUAGE, "ar-MA,ar;q=0.9,fr;q=0.8")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/ar");
}

#[tokio::test]
async fn test_root_without_accept_language_redirects_to_french() {
	let response = get("/").await;
	assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/fr");
}

// ============================================================================
// Location Picker
// ============================================================================

#[tokio::test]
async fn test_picker_starts_without_marker() {
	let response = get("/en/listings/new").await;
	assert_eq!(response.status(), StatusCode::OK);

	let html = body_text(response).await;
	assert!(html.contains(r#"id="listing-picker""#));
	assert!(html.contains("dar-map--interactive"));
	assert!(html.contains("&quot;markers&quot;:[]"));
	assert!(html.contains("No location selected."));
	assert!(html.contains(r#"<form id="listing-picker-form" method="post" action="/en/listings/new">"#));
}

#[tokio::test]
async fn test_picker_click_places_marker() {
	let response = post_click("/en/listings/new", "lat=33.5&lng=-7.6").await;
	assert_eq!(response.status(), StatusCode::OK);

	let html = body_text(response).await;
	assert!(html.contains("Selected location: 33.500000, -7.600000"));
	assert!(html.contains("&quot;position&quot;:{&quot;lat&quot;:33.5,&quot;lng&quot;:-7.6}"));
	assert!(html.contains(r#"<input type="hidden" name="lat" value="33.5">"#));
}

#[tokio::test]
async fn test_picker_rejects_out_of_range_click() {
	let response = post_click("/ar/listings/new", "lat=120&lng=0").await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let html = body_text(response).await;
	assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
	assert!(html.contains(r#"role="alert""#));
	assert!(html.contains("&quot;markers&quot;:[]"));
}

#[tokio::test]
async fn test_picker_blank_click_renders_localized_400() {
	let response = post_click("/ar/listings/new", "lat=&lng=").await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
	assert!(content_type.to_str().unwrap().starts_with("text/html"));

	let html = body_text(response).await;
	assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
	assert!(html.contains(r#"role="alert""#));
	assert!(html.contains("&quot;markers&quot;:[]"));
}

#[tokio::test]
async fn test_picker_non_numeric_click_renders_localized_400() {
	let response = post_click("/en/listings/new", "lat=north&lng=-7.6").await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let html = body_text(response).await;
	assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
	assert!(html.contains("Invalid coordinates"));
}

// ============================================================================
// Read-only Location
// ============================================================================

#[tokio::test]
async fn test_location_page_shows_labelled_marker() {
	let response = get("/fr/listings/location?lat=31.6295&lng=-7.9811&label=Riad%20%3Cb%3E").await;
	assert_eq!(response.status(), StatusCode::OK);

	let html = body_text(response).await;
	assert!(html.contains(r#"id="listing-location""#));
	assert!(!html.contains("Riad <b>"));
	assert!(html.contains("Riad &lt;b&gt;"));
	assert!(html.contains("&quot;openPopup&quot;:true"));
	assert!(html.contains(r#"href="/ar/listings/location?lat=31.6295&amp;lng=-7.9811&amp;label=Riad+%3Cb%3E""#));
}

#[tokio::test]
async fn test_location_page_uses_default_label() {
	let html = body_text(get("/en/listings/location?lat=33.5&lng=-7.6").await).await;
	assert!(html.contains("Property · 33.500000, -7.600000"));
}

#[tokio::test]
async fn test_location_page_requires_coordinates() {
	let response = get("/en/listings/location?lng=-7.6").await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let html = body_text(response).await;
	assert!(html.contains("The lat and lng parameters are required."));
	assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
}

#[tokio::test]
async fn test_location_page_non_numeric_renders_localized_400() {
	let response = get("/ar/listings/location?lat=abc&lng=1").await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
	assert!(content_type.to_str().unwrap().starts_with("text/html"));

	let html = body_text(response).await;
	assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
	assert!(html.contains(r#"role="alert""#));
}

#[tokio::test]
async fn test_location_page_rejects_out_of_range() {
	let response = get("/fr/listings/location?lat=95&lng=0").await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn prop_any_locale_segment_renders(tag in "[a-z]{1,5}") {
		let response = tokio_test::block_on(get(&format!("/{tag}")));
		prop_assert_eq!(response.status(), StatusCode::OK);

		let html = tokio_test::block_on(body_text(response));
		let expected = match tag.as_str() {
			"ar" => r#"<html lang="ar" dir="rtl">"#,
			"en" => r#"<html lang="en" dir="ltr">"#,
			_ => r#"<html lang="fr" dir="ltr">"#,
		};
		prop_assert!(html.contains(expected));
	}
}
