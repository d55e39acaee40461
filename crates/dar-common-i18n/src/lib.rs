// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Dar.
//!
//! This crate resolves the effective UI locale of a request and hands back its
//! message catalog. It supports both left-to-right (LTR) and right-to-left
//! (RTL) languages.
//!
//! # Message Keys
//!
//! Catalogs are JSON documents, one per locale. Nested objects are flattened
//! into dot-notation keys such as `listing.new.title`.
//!
//! # Example
//!
//! ```
//! use dar_common_i18n::{resolve, CatalogStore, Direction, Locale};
//!
//! // Load once at startup
//! let store = CatalogStore::bundled().unwrap();
//!
//! // Resolve per request
//! let resolution = resolve(&store, Some("ar")).unwrap();
//! assert_eq!(resolution.locale, Locale::Ar);
//! assert_eq!(resolution.direction, Direction::Rtl);
//!
//! // Unsupported tags fall back to French
//! let fallback = resolve(&store, Some("de")).unwrap();
//! assert_eq!(fallback.locale, Locale::Fr);
//!
//! let title = fallback.t("listing.new.title");
//! ```

mod catalog;
mod error;
mod locale;
mod resolve;

pub use catalog::{CatalogStore, MessageCatalog};
pub use error::{I18nError, Result};
pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, Direction, Locale, LocaleInfo,
};
pub use resolve::{effective_locale, negotiate, resolve, Resolution};

pub use locale::{DEFAULT_LOCALE, LOCALES};
