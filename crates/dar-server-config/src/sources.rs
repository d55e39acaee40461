// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	ChatbotConfigLayer, HttpConfigLayer, I18nConfigLayer, LoggingConfigLayer, MapConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/dar/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: DAR_SERVER_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			logging: Some(load_logging_from_env()),
			i18n: Some(load_i18n_from_env()),
			map: Some(load_map_from_env()?),
			chatbot: Some(load_chatbot_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
	env_var(name).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn env_parse<T: FromStr>(name: &str, type_name: &str) -> Result<Option<T>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid {type_name} value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("DAR_SERVER_HOST"),
		port: env_parse("DAR_SERVER_PORT", "u16")?,
		base_url: env_var("DAR_SERVER_BASE_URL"),
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("DAR_SERVER_LOG_LEVEL"),
	}
}

fn load_i18n_from_env() -> I18nConfigLayer {
	I18nConfigLayer {
		messages_dir: env_var("DAR_SERVER_MESSAGES_DIR"),
	}
}

fn load_map_from_env() -> Result<MapConfigLayer, ConfigError> {
	Ok(MapConfigLayer {
		tile_url_template: env_var("DAR_SERVER_MAP_TILE_URL"),
		attribution: env_var("DAR_SERVER_MAP_ATTRIBUTION"),
		max_zoom: env_parse("DAR_SERVER_MAP_MAX_ZOOM", "u8")?,
		default_zoom: env_parse("DAR_SERVER_MAP_DEFAULT_ZOOM", "u8")?,
		center_lat: env_parse("DAR_SERVER_MAP_CENTER_LAT", "f64")?,
		center_lng: env_parse("DAR_SERVER_MAP_CENTER_LNG", "f64")?,
		marker_icon_url: env_var("DAR_SERVER_MAP_MARKER_ICON_URL"),
		marker_shadow_url: env_var("DAR_SERVER_MAP_MARKER_SHADOW_URL"),
	})
}

fn load_chatbot_from_env() -> ChatbotConfigLayer {
	ChatbotConfigLayer {
		enabled: env_bool("DAR_SERVER_CHATBOT_ENABLED"),
	}
}
