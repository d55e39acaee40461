// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Dar listings web server.
//!
//! Renders the localized listing pages (French, Arabic, English) with their
//! embedded Leaflet maps.

pub mod api;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_router, AppState, MapSettings};
pub use dar_server_config::ServerConfig;
pub use error::ServerError;
pub use layout::{render_document, LayoutOptions, Page};
