// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Click-to-place location picker.

use crate::geo::{LatLng, MapPosition};
use crate::layers::MapLayers;
use crate::view::{MapView, Marker};

/// Inputs of an [`InteractiveMap`].
pub struct InteractiveMapProps<F> {
	/// Initial view center.
	pub center: LatLng,
	pub zoom: u8,
	/// Current selection, `None` until the user clicks.
	pub position: MapPosition,
	/// Invoked with the clicked coordinate on every click.
	pub on_position_change: F,
}

/// A map that places a marker where the user clicks.
///
/// The widget performs no validation or debouncing: every click is forwarded
/// to `on_position_change`. An error from the callback is returned to the
/// caller as-is and leaves the current position unchanged.
pub struct InteractiveMap<F> {
	element_id: String,
	center: LatLng,
	zoom: u8,
	position: MapPosition,
	on_position_change: F,
	layers: MapLayers,
	marker_label: Option<String>,
	click_form: String,
}

impl<F> InteractiveMap<F> {
	pub fn new(
		element_id: impl Into<String>,
		props: InteractiveMapProps<F>,
		layers: MapLayers,
	) -> Self {
		let element_id = element_id.into();
		Self {
			click_form: format!("{element_id}-form"),
			element_id,
			center: props.center,
			zoom: props.zoom,
			position: props.position,
			on_position_change: props.on_position_change,
			layers,
			marker_label: None,
		}
	}

	/// Caption shown on the selection marker.
	pub fn with_marker_label(mut self, label: impl Into<String>) -> Self {
		self.marker_label = Some(label.into());
		self
	}

	pub fn position(&self) -> MapPosition {
		self.position
	}

	/// Id of the form the client submits clicks through.
	pub fn click_form_id(&self) -> &str {
		&self.click_form
	}

	pub fn render(&self) -> MapView {
		let markers = self
			.position
			.map(|position| Marker {
				position,
				label: self.marker_label.clone(),
				open_popup: false,
			})
			.into_iter()
			.collect();

		MapView {
			element_id: self.element_id.clone(),
			center: self.center,
			zoom: self.zoom,
			tiles: self.layers.tiles.clone(),
			icon: self.layers.icon.clone(),
			markers,
			click_form: Some(self.click_form.clone()),
		}
	}
}

impl<F, E> InteractiveMap<F>
where
	F: FnMut(LatLng) -> Result<(), E>,
{
	/// Handle a click on the map surface at `at`.
	pub fn click(&mut self, at: LatLng) -> Result<(), E> {
		tracing::trace!(lat = at.lat, lng = at.lng, element = %self.element_id, "map click");
		(self.on_position_change)(at)?;
		self.position = Some(at);
		Ok(())
	}
}
