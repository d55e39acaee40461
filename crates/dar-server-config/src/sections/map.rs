// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Map widget configuration: tile provider, marker assets and default view.

use serde::{Deserialize, Serialize};

use dar_web_map::{
	LEAFLET_MARKER_ICON_URL, LEAFLET_MARKER_SHADOW_URL, OSM_ATTRIBUTION, OSM_MAX_ZOOM,
	OSM_TILE_URL,
};

// Casablanca
const DEFAULT_CENTER_LAT: f64 = 33.5731;
const DEFAULT_CENTER_LNG: f64 = -7.5898;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MapConfigLayer {
	pub tile_url_template: Option<String>,
	pub attribution: Option<String>,
	pub max_zoom: Option<u8>,
	pub default_zoom: Option<u8>,
	pub center_lat: Option<f64>,
	pub center_lng: Option<f64>,
	pub marker_icon_url: Option<String>,
	pub marker_shadow_url: Option<String>,
}

impl MapConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.tile_url_template.is_some() {
			self.tile_url_template = other.tile_url_template;
		}
		if other.attribution.is_some() {
			self.attribution = other.attribution;
		}
		if other.max_zoom.is_some() {
			self.max_zoom = other.max_zoom;
		}
		if other.default_zoom.is_some() {
			self.default_zoom = other.default_zoom;
		}
		if other.center_lat.is_some() {
			self.center_lat = other.center_lat;
		}
		if other.center_lng.is_some() {
			self.center_lng = other.center_lng;
		}
		if other.marker_icon_url.is_some() {
			self.marker_icon_url = other.marker_icon_url;
		}
		if other.marker_shadow_url.is_some() {
			self.marker_shadow_url = other.marker_shadow_url;
		}
	}

	pub fn finalize(self) -> MapConfig {
		let defaults = MapConfig::default();
		MapConfig {
			tile_url_template: self.tile_url_template.unwrap_or(defaults.tile_url_template),
			attribution: self.attribution.unwrap_or(defaults.attribution),
			max_zoom: self.max_zoom.unwrap_or(defaults.max_zoom),
			default_zoom: self.default_zoom.unwrap_or(defaults.default_zoom),
			center_lat: self.center_lat.unwrap_or(defaults.center_lat),
			center_lng: self.center_lng.unwrap_or(defaults.center_lng),
			marker_icon_url: self.marker_icon_url.unwrap_or(defaults.marker_icon_url),
			marker_shadow_url: self.marker_shadow_url.unwrap_or(defaults.marker_shadow_url),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
	pub tile_url_template: String,
	pub attribution: String,
	pub max_zoom: u8,
	pub default_zoom: u8,
	pub center_lat: f64,
	pub center_lng: f64,
	pub marker_icon_url: String,
	pub marker_shadow_url: String,
}

impl Default for MapConfig {
	fn default() -> Self {
		Self {
			tile_url_template: OSM_TILE_URL.to_string(),
			attribution: OSM_ATTRIBUTION.to_string(),
			max_zoom: OSM_MAX_ZOOM,
			default_zoom: 13,
			center_lat: DEFAULT_CENTER_LAT,
			center_lng: DEFAULT_CENTER_LNG,
			marker_icon_url: LEAFLET_MARKER_ICON_URL.to_string(),
			marker_shadow_url: LEAFLET_MARKER_SHADOW_URL.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_layer_finalizes_to_defaults() {
		assert_eq!(MapConfigLayer::default().finalize(), MapConfig::default());
	}

	#[test]
	fn test_defaults_match_widget_layers() {
		let config = MapConfig::default();
		let tiles = dar_web_map::TileLayer::default();
		let icon = dar_web_map::MarkerIcon::default();

		assert_eq!(config.tile_url_template, tiles.url_template);
		assert_eq!(config.attribution, tiles.attribution);
		assert_eq!(config.max_zoom, tiles.max_zoom);
		assert_eq!(config.marker_icon_url, icon.icon_url);
		assert_eq!(config.marker_shadow_url, icon.shadow_url);
	}

	#[test]
	fn test_default_center_is_casablanca() {
		let config = MapConfig::default();
		assert!((config.center_lat - 33.5731).abs() < f64::EPSILON);
		assert!((config.center_lng + 7.5898).abs() < f64::EPSILON);
	}

	#[test]
	fn test_merge_overwrites_only_set_fields() {
		let mut base = MapConfigLayer {
			max_zoom: Some(18),
			default_zoom: Some(12),
			..Default::default()
		};
		base.merge(MapConfigLayer {
			default_zoom: Some(15),
			tile_url_template: Some("https://tiles.example.ma/{z}/{x}/{y}.png".to_string()),
			..Default::default()
		});

		let config = base.finalize();
		assert_eq!(config.max_zoom, 18);
		assert_eq!(config.default_zoom, 15);
		assert_eq!(
			config.tile_url_template,
			"https://tiles.example.ma/{z}/{x}/{y}.png"
		);
		assert_eq!(config.attribution, OSM_ATTRIBUTION);
	}

	#[test]
	fn test_deserialize_partial() {
		let toml_str = r#"
default_zoom = 11
center_lat = 31.6295
center_lng = -7.9811
"#;
		let config = toml::from_str::<MapConfigLayer>(toml_str)
			.unwrap()
			.finalize();
		assert_eq!(config.default_zoom, 11);
		assert!((config.center_lat - 31.6295).abs() < f64::EPSILON);
		assert_eq!(config.max_zoom, 19);
	}
}
