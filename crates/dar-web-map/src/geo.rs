// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Serializes as `{"lat": .., "lng": ..}`, which Leaflet accepts wherever a
/// `LatLng` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
	pub lat: f64,
	pub lng: f64,
}

impl LatLng {
	pub const fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// Latitude in [-90, 90] and longitude in [-180, 180].
	pub fn is_valid(&self) -> bool {
		(-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
	}
}

impl From<(f64, f64)> for LatLng {
	fn from((lat, lng): (f64, f64)) -> Self {
		Self { lat, lng }
	}
}

impl fmt::Display for LatLng {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.6}, {:.6}", self.lat, self.lng)
	}
}

/// The selected location of a map widget, absent until the user picks one.
pub type MapPosition = Option<LatLng>;
