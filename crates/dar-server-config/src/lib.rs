// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for Dar server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`DAR_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use dar_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub logging: LoggingConfig,
	pub i18n: I18nConfig,
	pub map: MapConfig,
	pub chatbot: ChatbotConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`DAR_SERVER_*`)
/// 2. Config file (`/etc/dar/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let map = layer.map.unwrap_or_default().finalize();
	let chatbot = layer.chatbot.unwrap_or_default().finalize();

	validate_config(&map)?;

	info!(
		host = %http.host,
		port = http.port,
		messages_dir = i18n.messages_dir.as_deref().unwrap_or("<bundled>"),
		tile_url = %map.tile_url_template,
		chatbot_enabled = chatbot.enabled,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		logging,
		i18n,
		map,
		chatbot,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(map: &MapConfig) -> Result<(), ConfigError> {
	if map.default_zoom > map.max_zoom {
		return Err(ConfigError::Validation(format!(
			"map default_zoom ({}) exceeds max_zoom ({})",
			map.default_zoom, map.max_zoom
		)));
	}

	if !(-90.0..=90.0).contains(&map.center_lat) || !(-180.0..=180.0).contains(&map.center_lng) {
		return Err(ConfigError::Validation(format!(
			"map center ({}, {}) is outside latitude [-90, 90] / longitude [-180, 180]",
			map.center_lat, map.center_lng
		)));
	}

	Ok(())
}
