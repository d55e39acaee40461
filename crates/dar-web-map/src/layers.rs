// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tile layer and marker icon settings handed to Leaflet.

use serde::Serialize;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
	"&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const OSM_MAX_ZOOM: u8 = 19;
pub const LEAFLET_MARKER_ICON_URL: &str =
	"https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";
pub const LEAFLET_MARKER_SHADOW_URL: &str =
	"https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png";

/// A raster tile layer built from a `{z}/{x}/{y}` URL template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
	pub url_template: String,
	/// Raw HTML shown in the attribution control.
	pub attribution: String,
	pub max_zoom: u8,
}

impl Default for TileLayer {
	fn default() -> Self {
		Self {
			url_template: OSM_TILE_URL.to_string(),
			attribution: OSM_ATTRIBUTION.to_string(),
			max_zoom: OSM_MAX_ZOOM,
		}
	}
}

/// Marker icon assets and geometry, mirroring `L.Icon` options.
///
/// Always passed explicitly: Leaflet's default icon only resolves its images
/// next to the bundled stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
	pub icon_url: String,
	pub shadow_url: String,
	pub icon_size: [u16; 2],
	pub icon_anchor: [i16; 2],
	pub popup_anchor: [i16; 2],
	pub shadow_size: [u16; 2],
}

impl MarkerIcon {
	pub fn new(icon_url: impl Into<String>, shadow_url: impl Into<String>) -> Self {
		Self {
			icon_url: icon_url.into(),
			shadow_url: shadow_url.into(),
			icon_size: [25, 41],
			icon_anchor: [12, 41],
			popup_anchor: [1, -34],
			shadow_size: [41, 41],
		}
	}
}

impl Default for MarkerIcon {
	fn default() -> Self {
		Self::new(LEAFLET_MARKER_ICON_URL, LEAFLET_MARKER_SHADOW_URL)
	}
}

/// Everything a widget needs from the tile provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapLayers {
	pub tiles: TileLayer,
	pub icon: MarkerIcon,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_icon_geometry_matches_leaflet_defaults() {
		let icon = MarkerIcon::new("/icon.png", "/shadow.png");
		assert_eq!(icon.icon_size, [25, 41]);
		assert_eq!(icon.icon_anchor, [12, 41]);
		assert_eq!(icon.popup_anchor, [1, -34]);
		assert_eq!(icon.shadow_size, [41, 41]);
	}

	#[test]
	fn test_serializes_with_leaflet_option_names() {
		let json = serde_json::to_value(MarkerIcon::new("/i.png", "/s.png")).unwrap();
		assert_eq!(json["iconUrl"], "/i.png");
		assert_eq!(json["shadowUrl"], "/s.png");
		assert_eq!(json["iconAnchor"][1], 41);

		let json = serde_json::to_value(TileLayer::default()).unwrap();
		assert_eq!(json["urlTemplate"], OSM_TILE_URL);
		assert_eq!(json["maxZoom"], 19);
	}
}
