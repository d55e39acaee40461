// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rendered map description and its HTML form.
//!
//! A [`MapView`] is serialized to JSON into the `data-map` attribute of a
//! container element. [`BOOTSTRAP_JS`] finds those containers and builds the
//! Leaflet map, tile layer and markers from the description.

use serde::Serialize;

use crate::geo::LatLng;
use crate::layers::{MarkerIcon, TileLayer};
use crate::markup::escape_html;

pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Client-side bootstrap. Expects Leaflet (`L`) to be loaded first.
pub const BOOTSTRAP_JS: &str = r#"(function () {
  document.querySelectorAll("[data-map]").forEach(function (el) {
    var view = JSON.parse(el.getAttribute("data-map"));
    var map = L.map(el).setView(view.center, view.zoom);
    L.tileLayer(view.tiles.urlTemplate, {
      attribution: view.tiles.attribution,
      maxZoom: view.tiles.maxZoom
    }).addTo(map);
    var icon = L.icon(view.icon);
    view.markers.forEach(function (m) {
      var marker = L.marker(m.position, { icon: icon }).addTo(map);
      if (m.label) {
        marker.bindPopup(document.createTextNode(m.label));
        if (m.openPopup) { marker.openPopup(); }
      }
    });
    if (view.clickForm) {
      var form = document.getElementById(view.clickForm);
      map.on("click", function (e) {
        form.elements.lat.value = e.latlng.lat;
        form.elements.lng.value = e.latlng.lng;
        form.submit();
      });
    }
  });
})();"#;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
	#[error("failed to serialize map view: {0}")]
	Serialize(#[from] serde_json::Error),
}

/// A marker placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
	pub position: LatLng,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	pub open_popup: bool,
}

/// Everything needed to draw one map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
	#[serde(skip)]
	pub element_id: String,
	pub center: LatLng,
	pub zoom: u8,
	pub tiles: TileLayer,
	pub icon: MarkerIcon,
	pub markers: Vec<Marker>,
	/// Id of the form that receives clicks (`lat`/`lng` inputs). `None` for read-only maps.
	pub click_form: Option<String>,
}

impl MapView {
	pub fn is_interactive(&self) -> bool {
		self.click_form.is_some()
	}

	/// Render the container element. Include [`BOOTSTRAP_JS`] once per page.
	pub fn to_html(&self) -> Result<String, MapError> {
		let json = serde_json::to_string(self)?;
		let class = if self.is_interactive() {
			"dar-map dar-map--interactive"
		} else {
			"dar-map"
		};

		Ok(format!(
			r#"<div id="{id}" class="{class}" data-map="{data}"></div>"#,
			id = escape_html(&self.element_id),
			data = escape_html(&json),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn view() -> MapView {
		MapView {
			element_id: "listing-map".to_string(),
			center: LatLng::new(33.5, -7.6),
			zoom: 13,
			tiles: TileLayer::default(),
			icon: MarkerIcon::default(),
			markers: vec![Marker {
				position: LatLng::new(33.5, -7.6),
				label: Some(r#"Riad "Yasmine" <3>"#.to_string()),
				open_popup: true,
			}],
			click_form: None,
		}
	}

	#[test]
	fn test_html_container() {
		let html = view().to_html().unwrap();
		assert!(html.starts_with(r#"<div id="listing-map" class="dar-map" data-map=""#));
		assert!(html.ends_with("></div>"));
	}

	#[test]
	fn test_label_is_escaped_in_attribute() {
		let html = view().to_html().unwrap();
		assert!(!html.contains("<3>"));
		assert!(html.contains("&lt;3&gt;"));
		assert!(html.contains("&quot;label&quot;"));
	}

	#[test]
	fn test_json_shape() {
		let json = serde_json::to_value(view()).unwrap();
		assert_eq!(json["center"]["lat"], 33.5);
		assert_eq!(json["zoom"], 13);
		assert_eq!(json["markers"][0]["openPopup"], true);
		assert!(json["clickForm"].is_null());
		assert!(json.get("elementId").is_none());
	}

	#[test]
	fn test_interactive_class() {
		let mut view = view();
		view.click_form = Some("picker".to_string());
		assert!(view.to_html().unwrap().contains("dar-map--interactive"));
	}
}
