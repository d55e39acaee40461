// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message catalogs and the per-locale catalog store.
//!
//! Catalog resources are JSON documents named after the locale tag
//! (`fr.json`, `ar.json`, ...). Nested objects are flattened into
//! dot-separated keys, so `{"listing": {"new": {"title": "..."}}}` yields the
//! key `listing.new.title`.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde_json::Value;

use crate::error::{I18nError, Result};
use crate::locale::{Locale, DEFAULT_LOCALE, LOCALES};

const FR_JSON: &str = include_str!("../locales/fr.json");
const AR_JSON: &str = include_str!("../locales/ar.json");
const EN_JSON: &str = include_str!("../locales/en.json");

/// Localized strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
	messages: BTreeMap<String, String>,
}

impl MessageCatalog {
	/// Parse a catalog resource for `locale`.
	pub fn parse(locale: Locale, source: &str) -> Result<Self> {
		let value: Value =
			serde_json::from_str(source).map_err(|source| I18nError::Parse { locale, source })?;

		let mut messages = BTreeMap::new();
		flatten_into(locale, "", value, &mut messages)?;
		Ok(Self { messages })
	}

	pub fn from_messages<I, K, V>(messages: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			messages: messages
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.messages.get(key).map(String::as_str)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.messages.contains_key(key)
	}

	/// Translate `key`, falling back to the key itself when it has no entry.
	pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
		match self.messages.get(key) {
			Some(message) => message,
			None => {
				tracing::warn!(key, "missing message key");
				key
			}
		}
	}

	/// Translate `key` and substitute `{name}` placeholders.
	///
	/// ```
	/// use dar_common_i18n::{MessageCatalog, Locale};
	///
	/// let catalog = MessageCatalog::parse(Locale::En, r#"{"greet": "Hello {name}"}"#).unwrap();
	/// assert_eq!(catalog.t_fmt("greet", &[("name", "Amina")]), "Hello Amina");
	/// ```
	pub fn t_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		let mut result = self.t(key).to_string();

		for (name, value) in args {
			let placeholder = format!("{{{name}}}");
			result = result.replace(&placeholder, value);
		}

		result
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.messages.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

fn flatten_into(
	locale: Locale,
	prefix: &str,
	value: Value,
	out: &mut BTreeMap<String, String>,
) -> Result<()> {
	match value {
		Value::Object(map) => {
			for (key, child) in map {
				let path = if prefix.is_empty() {
					key
				} else {
					format!("{prefix}.{key}")
				};
				flatten_into(locale, &path, child, out)?;
			}
			Ok(())
		}
		Value::String(message) if !prefix.is_empty() => {
			if out.contains_key(prefix) {
				return Err(I18nError::DuplicateKey {
					locale,
					key: prefix.to_string(),
				});
			}
			out.insert(prefix.to_string(), message);
			Ok(())
		}
		_ => Err(I18nError::InvalidEntry {
			locale,
			key: prefix.to_string(),
		}),
	}
}

/// Read-only store holding one catalog per supported locale.
///
/// Load it once at process start and share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CatalogStore {
	catalogs: HashMap<Locale, MessageCatalog>,
}

impl CatalogStore {
	/// Catalogs compiled into the binary.
	pub fn bundled() -> Result<Self> {
		let catalogs = [
			(Locale::Fr, FR_JSON),
			(Locale::Ar, AR_JSON),
			(Locale::En, EN_JSON),
		]
		.into_iter()
		.map(|(locale, source)| Ok((locale, MessageCatalog::parse(locale, source)?)))
		.collect::<Result<HashMap<_, _>>>()?;

		Self::from_catalogs(catalogs)
	}

	/// Load `<dir>/<tag>.json` for every supported locale.
	#[tracing::instrument(level = "info", skip(dir), fields(dir = %dir.as_ref().display()))]
	pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
		let dir = dir.as_ref();
		let mut catalogs = HashMap::new();

		for info in LOCALES {
			let path = dir.join(format!("{}.json", info.code()));
			if !path.exists() {
				return Err(I18nError::MissingCatalog {
					locale: info.locale,
				});
			}

			let source = std::fs::read_to_string(&path).map_err(|source| I18nError::Read {
				path: path.clone(),
				source,
			})?;
			let catalog = MessageCatalog::parse(info.locale, &source)?;
			tracing::debug!(locale = %info.locale, messages = catalog.len(), "loaded message catalog");
			catalogs.insert(info.locale, catalog);
		}

		Self::from_catalogs(catalogs)
	}

	/// Build a store from already-parsed catalogs.
	///
	/// Fails with [`I18nError::MissingCatalog`] if any supported locale is absent
	/// and with [`I18nError::EmptyCatalog`] if one has no messages.
	pub fn from_catalogs(catalogs: HashMap<Locale, MessageCatalog>) -> Result<Self> {
		for info in LOCALES {
			match catalogs.get(&info.locale) {
				None => {
					return Err(I18nError::MissingCatalog {
						locale: info.locale,
					})
				}
				Some(catalog) if catalog.is_empty() => {
					return Err(I18nError::EmptyCatalog {
						locale: info.locale,
					})
				}
				Some(_) => {}
			}
		}

		Ok(Self { catalogs })
	}

	pub fn get(&self, locale: Locale) -> Option<&MessageCatalog> {
		self.catalogs.get(&locale)
	}

	/// Keys present in the default catalog but absent from `locale`'s catalog.
	pub fn missing_keys(&self, locale: Locale) -> Vec<&str> {
		let (Some(reference), Some(catalog)) = (self.get(DEFAULT_LOCALE), self.get(locale)) else {
			return Vec::new();
		};

		reference
			.keys()
			.filter(|key| !catalog.contains_key(key))
			.collect()
	}

	/// Drop a catalog, breaking the completeness invariant. Test-only.
	#[cfg(test)]
	pub(crate) fn without(mut self, locale: Locale) -> Self {
		self.catalogs.remove(&locale);
		self
	}
}
