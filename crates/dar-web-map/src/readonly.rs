// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fixed-location map with a captioned marker.

use crate::geo::LatLng;
use crate::layers::MapLayers;
use crate::view::{MapView, Marker};

/// Inputs of a [`ReadOnlyMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOnlyMapProps {
	pub center: LatLng,
	pub zoom: u8,
	/// Caption attached to the marker.
	pub label: String,
}

#[derive(Debug, Clone)]
pub struct ReadOnlyMap {
	element_id: String,
	props: ReadOnlyMapProps,
	layers: MapLayers,
}

impl ReadOnlyMap {
	pub fn new(element_id: impl Into<String>, props: ReadOnlyMapProps, layers: MapLayers) -> Self {
		Self {
			element_id: element_id.into(),
			props,
			layers,
		}
	}

	pub fn render(&self) -> MapView {
		MapView {
			element_id: self.element_id.clone(),
			center: self.props.center,
			zoom: self.props.zoom,
			tiles: self.layers.tiles.clone(),
			icon: self.layers.icon.clone(),
			markers: vec![Marker {
				position: self.props.center,
				label: Some(self.props.label.clone()),
				open_popup: true,
			}],
			click_form: None,
		}
	}
}
