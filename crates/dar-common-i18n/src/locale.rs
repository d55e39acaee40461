// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and direction support.

use std::fmt;

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Left-to-right (e.g., French, English)
	Ltr,
	/// Right-to-left (e.g., Arabic)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	/// Returns the CSS `text-align` value for the start of text.
	pub fn text_align_start(&self) -> &'static str {
		match self {
			Direction::Ltr => "left",
			Direction::Rtl => "right",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_html_dir())
	}
}

/// A supported UI locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
	Fr,
	Ar,
	En,
}

impl Locale {
	/// Parse a locale tag. Matching is exact: `"FR"` and `"fr-MA"` are not supported tags.
	pub fn parse(tag: &str) -> Option<Locale> {
		match tag {
			"fr" => Some(Locale::Fr),
			"ar" => Some(Locale::Ar),
			"en" => Some(Locale::En),
			_ => None,
		}
	}

	/// The tag used in URLs, the `lang` attribute and catalog resource names.
	pub fn as_str(&self) -> &'static str {
		match self {
			Locale::Fr => "fr",
			Locale::Ar => "ar",
			Locale::En => "en",
		}
	}

	/// Arabic is the only right-to-left locale.
	pub fn direction(&self) -> Direction {
		match self {
			Locale::Ar => Direction::Rtl,
			Locale::Fr | Locale::En => Direction::Ltr,
		}
	}

	pub fn info(&self) -> &'static LocaleInfo {
		match self {
			Locale::Fr => &LOCALES[0],
			Locale::Ar => &LOCALES[1],
			Locale::En => &LOCALES[2],
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	pub locale: Locale,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
}

impl LocaleInfo {
	pub fn code(&self) -> &'static str {
		self.locale.as_str()
	}

	pub fn direction(&self) -> Direction {
		self.locale.direction()
	}
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: Locale = Locale::Fr;

/// All supported locales. The default locale comes first.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		locale: Locale::Fr,
		name: "French",
		native_name: "Français",
	},
	LocaleInfo {
		locale: Locale::Ar,
		name: "Arabic",
		native_name: "العربية",
	},
	LocaleInfo {
		locale: Locale::En,
		name: "English",
		native_name: "English",
	},
];

/// Get metadata for a locale tag.
///
/// Returns `None` if the locale is not supported.
pub fn locale_info(tag: &str) -> Option<&'static LocaleInfo> {
	Locale::parse(tag).map(|l| l.info())
}

/// Check if a locale tag uses right-to-left text direction.
///
/// Returns `false` for unsupported locales.
pub fn is_rtl(tag: &str) -> bool {
	Locale::parse(tag).is_some_and(|l| l.direction() == Direction::Rtl)
}

/// Check if a locale tag is supported.
pub fn is_supported(tag: &str) -> bool {
	Locale::parse(tag).is_some()
}

/// Get all supported locales.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_locale_info_found() {
		let info = locale_info("fr").unwrap();
		assert_eq!(info.code(), "fr");
		assert_eq!(info.name, "French");
		assert_eq!(info.direction(), Direction::Ltr);
	}

	#[test]
	fn test_locale_info_not_found() {
		assert!(locale_info("xx").is_none());
	}

	#[test]
	fn test_info_table_matches_variants() {
		for info in LOCALES {
			assert_eq!(info.locale.info(), info);
			assert_eq!(Locale::parse(info.code()), Some(info.locale));
		}
	}

	#[test]
	fn test_is_rtl() {
		assert!(is_rtl("ar"));
		assert!(!is_rtl("fr"));
		assert!(!is_rtl("en"));
		assert!(!is_rtl("he"));
		assert!(!is_rtl("unknown"));
	}

	#[test]
	fn test_is_supported() {
		assert!(is_supported("fr"));
		assert!(is_supported("ar"));
		assert!(is_supported("en"));
		assert!(!is_supported("FR"));
		assert!(!is_supported("fr-MA"));
		assert!(!is_supported("es"));
		assert!(!is_supported(""));
	}

	#[test]
	fn test_available_locales() {
		let locales = available_locales();
		assert_eq!(locales.len(), 3);
		assert_eq!(locales[0].locale, DEFAULT_LOCALE);
		assert!(locales.iter().any(|l| l.code() == "ar"));
		assert!(locales.iter().any(|l| l.code() == "en"));
	}

	#[test]
	fn test_direction_html_dir() {
		assert_eq!(Direction::Ltr.as_html_dir(), "ltr");
		assert_eq!(Direction::Rtl.as_html_dir(), "rtl");
		assert_eq!(Direction::Rtl.to_string(), "rtl");
	}

	#[test]
	fn test_direction_text_align() {
		assert_eq!(Direction::Ltr.text_align_start(), "left");
		assert_eq!(Direction::Rtl.text_align_start(), "right");
	}

	#[test]
	fn test_arabic_has_native_name() {
		assert_eq!(Locale::Ar.info().native_name, "العربية");
	}

	#[test]
	fn test_default_is_french() {
		assert_eq!(Locale::default(), Locale::Fr);
	}
}
