// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog loading errors.

use std::path::PathBuf;

use crate::locale::Locale;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	/// A supported locale has no message catalog. This is a configuration error.
	#[error("No message catalog for supported locale '{locale}'")]
	MissingCatalog { locale: Locale },

	/// A supported locale's catalog has no messages. Treated like a missing catalog.
	#[error("Message catalog for supported locale '{locale}' is empty")]
	EmptyCatalog { locale: Locale },

	#[error("Failed to read message catalog {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse message catalog for '{locale}': {source}")]
	Parse {
		locale: Locale,
		#[source]
		source: serde_json::Error,
	},

	#[error("Malformed message catalog for '{locale}': key '{key}' must be a string or an object")]
	InvalidEntry { locale: Locale, key: String },

	#[error("Malformed message catalog for '{locale}': key '{key}' is defined more than once")]
	DuplicateKey { locale: Locale, key: String },
}

pub type Result<T> = std::result::Result<T, I18nError>;
