// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::catalog::{CatalogStore, MessageCatalog};
use crate::error::{I18nError, Result};
use crate::locale::{Direction, Locale, DEFAULT_LOCALE};

/// The effective locale for one render, with its direction and catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
	pub locale: Locale,
	pub direction: Direction,
	pub messages: &'a MessageCatalog,
}

impl<'a> Resolution<'a> {
	pub fn t(&self, key: &'a str) -> &'a str {
		self.messages.t(key)
	}

	pub fn t_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		self.messages.t_fmt(key, args)
	}
}

/// Pick the effective locale for a requested tag.
///
/// Supported tags are used as-is; anything else, including `None`, becomes
/// [`DEFAULT_LOCALE`].
///
/// ```
/// use dar_common_i18n::{effective_locale, Locale};
///
/// assert_eq!(effective_locale(Some("ar")), Locale::Ar);
/// assert_eq!(effective_locale(Some("xx")), Locale::Fr);
/// assert_eq!(effective_locale(None), Locale::Fr);
/// ```
pub fn effective_locale(requested: Option<&str>) -> Locale {
	match requested.and_then(Locale::parse) {
		Some(locale) => locale,
		None => {
			tracing::debug!(
				requested = requested.unwrap_or("<none>"),
				fallback = %DEFAULT_LOCALE,
				"unsupported locale, using default"
			);
			DEFAULT_LOCALE
		}
	}
}

/// Resolve the requested locale and load its message catalog from `store`.
///
/// Never fails for an unsupported tag. Fails with
/// [`I18nError::MissingCatalog`] only when the store lacks a catalog for a
/// supported locale, which is a configuration error.
pub fn resolve<'a>(store: &'a CatalogStore, requested: Option<&str>) -> Result<Resolution<'a>> {
	let locale = effective_locale(requested);
	let messages = store
		.get(locale)
		.ok_or(I18nError::MissingCatalog { locale })?;

	Ok(Resolution {
		locale,
		direction: locale.direction(),
		messages,
	})
}

/// Choose a locale from an `Accept-Language` header value.
///
/// Entries are considered in header order; the first whose base language is
/// supported wins. Quality weights are not ranked.
pub fn negotiate(accept_language: Option<&str>) -> Locale {
	accept_language
		.into_iter()
		.flat_map(|header| header.split(','))
		.filter_map(|part| {
			let lang = part.split(';').next().unwrap_or("").trim();
			let base = lang.split('-').next().unwrap_or(lang);
			Locale::parse(&base.to_ascii_lowercase())
		})
		.next()
		.unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use std::collections::HashMap;

	fn store() -> CatalogStore {
		CatalogStore::bundled().unwrap()
	}

	#[test]
	fn test_supported_locales_are_kept() {
		let store = store();
		assert_eq!(resolve(&store, Some("fr")).unwrap().locale, Locale::Fr);
		assert_eq!(resolve(&store, Some("ar")).unwrap().locale, Locale::Ar);
		assert_eq!(resolve(&store, Some("en")).unwrap().locale, Locale::En);
	}

	#[test]
	fn test_unsupported_falls_back_to_french() {
		let store = store();
		let resolution = resolve(&store, Some("xx")).unwrap();
		assert_eq!(resolution.locale, Locale::Fr);
		assert_eq!(resolution.direction, Direction::Ltr);
	}

	#[test]
	fn test_missing_falls_back_to_french() {
		let store = store();
		assert_eq!(resolve(&store, None).unwrap().locale, Locale::Fr);
		assert_eq!(resolve(&store, Some("")).unwrap().locale, Locale::Fr);
	}

	#[test]
	fn test_direction() {
		let store = store();
		assert_eq!(resolve(&store, Some("ar")).unwrap().direction, Direction::Rtl);
		assert_eq!(resolve(&store, Some("fr")).unwrap().direction, Direction::Ltr);
		assert_eq!(resolve(&store, Some("en")).unwrap().direction, Direction::Ltr);
		assert_eq!(resolve(&store, None).unwrap().direction, Direction::Ltr);
	}

	#[test]
	fn test_messages_non_empty_for_every_locale() {
		let store = store();
		for tag in ["fr", "ar", "en"] {
			assert!(!resolve(&store, Some(tag)).unwrap().messages.is_empty());
		}
	}

	#[test]
	fn test_arabic_covers_french_keys() {
		let store = store();
		let ar = resolve(&store, Some("ar")).unwrap();
		let fr = resolve(&store, Some("fr")).unwrap();

		assert_eq!(ar.locale, Locale::Ar);
		assert_eq!(ar.direction, Direction::Rtl);
		for key in fr.messages.keys() {
			assert!(ar.messages.contains_key(key), "ar catalog lacks '{key}'");
		}
	}

	#[test]
	fn test_resolve_is_idempotent() {
		let store = store();
		let first = resolve(&store, Some("en")).unwrap();
		let second = resolve(&store, Some("en")).unwrap();
		assert_eq!(first.messages, second.messages);
	}

	#[test]
	fn test_missing_catalog_is_reported() {
		let store = CatalogStore::from_catalogs(
			[Locale::Fr, Locale::Ar, Locale::En]
				.into_iter()
				.map(|l| (l, MessageCatalog::from_messages([("k", "v")])))
				.collect::<HashMap<_, _>>(),
		)
		.unwrap()
		.without(Locale::Fr);

		let err = resolve(&store, Some("xx")).unwrap_err();
		assert!(matches!(err, I18nError::MissingCatalog { locale: Locale::Fr }));
		assert!(err.to_string().contains("'fr'"));
	}

	#[test]
	fn test_negotiate() {
		assert_eq!(negotiate(Some("ar-MA,ar;q=0.9,fr;q=0.8")), Locale::Ar);
		assert_eq!(negotiate(Some("en-US,en;q=0.9")), Locale::En);
		assert_eq!(negotiate(Some("de-DE, EN;q=0.5")), Locale::En);
		assert_eq!(negotiate(Some("de-DE,es")), Locale::Fr);
		assert_eq!(negotiate(Some("")), Locale::Fr);
		assert_eq!(negotiate(None), Locale::Fr);
	}

	proptest! {
		#[test]
		fn prop_resolved_locale_is_requested_or_default(tag in ".{0,12}") {
			let store = store();
			let resolution = resolve(&store, Some(&tag)).unwrap();
			match tag.as_str() {
				"fr" | "ar" | "en" => prop_assert_eq!(resolution.locale.as_str(), tag.as_str()),
				_ => prop_assert_eq!(resolution.locale, Locale::Fr),
			}
		}

		#[test]
		fn prop_rtl_only_for_arabic(tag in "[a-z]{0,3}") {
			let store = store();
			let resolution = resolve(&store, Some(&tag)).unwrap();
			prop_assert_eq!(resolution.direction == Direction::Rtl, tag == "ar");
		}

		#[test]
		fn prop_negotiate_always_supported(header in ".{0,40}") {
			let locale = negotiate(Some(&header));
			prop_assert!(crate::is_supported(locale.as_str()));
		}
	}
}
