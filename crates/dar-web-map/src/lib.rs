// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Map widgets for Dar pages.
//!
//! Two widgets describe a Leaflet map; all tile fetching, projection and
//! panning is left to Leaflet in the browser.
//!
//! - [`InteractiveMap`]: places a marker where the user clicks and reports the
//!   coordinate to a callback.
//! - [`ReadOnlyMap`]: shows a single captioned marker.
//!
//! # Example
//!
//! ```
//! use dar_web_map::{InteractiveMap, InteractiveMapProps, LatLng, MapLayers};
//!
//! let mut selected = None;
//! let mut map = InteractiveMap::new(
//!     "picker",
//!     InteractiveMapProps {
//!         center: LatLng::new(33.5731, -7.5898),
//!         zoom: 13,
//!         position: None,
//!         on_position_change: |at| {
//!             selected = Some(at);
//!             Ok::<_, std::convert::Infallible>(())
//!         },
//!     },
//!     MapLayers::default(),
//! );
//!
//! map.click(LatLng::new(33.5, -7.6)).unwrap();
//! assert_eq!(map.render().markers.len(), 1);
//! drop(map);
//! assert_eq!(selected, Some(LatLng::new(33.5, -7.6)));
//! ```

mod geo;
mod interactive;
mod layers;
pub mod markup;
mod readonly;
mod view;

pub use geo::{LatLng, MapPosition};
pub use interactive::{InteractiveMap, InteractiveMapProps};
pub use layers::{
	MapLayers, MarkerIcon, TileLayer, LEAFLET_MARKER_ICON_URL, LEAFLET_MARKER_SHADOW_URL,
	OSM_ATTRIBUTION, OSM_MAX_ZOOM, OSM_TILE_URL,
};
pub use readonly::{ReadOnlyMap, ReadOnlyMapProps};
pub use view::{MapError, MapView, Marker, BOOTSTRAP_JS, LEAFLET_CSS_URL, LEAFLET_JS_URL};
