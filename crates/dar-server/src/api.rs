// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;

use axum::{routing::get, Router};
use dar_common_i18n::{available_locales, CatalogStore, I18nError};
use dar_server_config::{MapConfig, ServerConfig};
use dar_web_map::{LatLng, MapLayers, MarkerIcon, TileLayer};

use crate::layout::LayoutOptions;
use crate::routes;

/// Map defaults shared by every page that embeds a map.
#[derive(Debug, Clone)]
pub struct MapSettings {
	pub layers: MapLayers,
	pub center: LatLng,
	pub zoom: u8,
}

impl MapSettings {
	pub fn from_config(config: &MapConfig) -> Self {
		Self {
			layers: MapLayers {
				tiles: TileLayer {
					url_template: config.tile_url_template.clone(),
					attribution: config.attribution.clone(),
					max_zoom: config.max_zoom,
				},
				icon: MarkerIcon::new(&config.marker_icon_url, &config.marker_shadow_url),
			},
			center: LatLng::new(config.center_lat, config.center_lng),
			zoom: config.default_zoom,
		}
	}
}

impl Default for MapSettings {
	fn default() -> Self {
		Self::from_config(&MapConfig::default())
	}
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
	pub catalogs: Arc<CatalogStore>,
	pub map: Arc<MapSettings>,
	pub layout: LayoutOptions,
}

impl AppState {
	pub fn new(catalogs: CatalogStore, map: MapSettings, layout: LayoutOptions) -> Self {
		Self {
			catalogs: Arc::new(catalogs),
			map: Arc::new(map),
			layout,
		}
	}
}

/// Build application state from configuration.
///
/// Loads the message catalogs once; a missing catalog for any supported locale
/// aborts startup.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, I18nError> {
	let catalogs = match &config.i18n.messages_dir {
		Some(dir) => CatalogStore::from_dir(dir)?,
		None => CatalogStore::bundled()?,
	};

	for info in available_locales() {
		let missing = catalogs.missing_keys(info.locale);
		if !missing.is_empty() {
			tracing::warn!(
				locale = %info.locale,
				count = missing.len(),
				keys = ?missing,
				"message catalog is missing keys"
			);
		}
	}

	Ok(AppState::new(
		catalogs,
		MapSettings::from_config(&config.map),
		LayoutOptions {
			chatbot_enabled: config.chatbot.enabled,
		},
	))
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(routes::pages::root_redirect))
		.route("/health", get(routes::health::health_check))
		.route("/{locale}", get(routes::pages::home))
		.route(
			"/{locale}/listings/new",
			get(routes::listings::new_listing).post(routes::listings::pick_location),
		)
		.route(
			"/{locale}/listings/location",
			get(routes::listings::show_location),
		)
		.with_state(state)
}
