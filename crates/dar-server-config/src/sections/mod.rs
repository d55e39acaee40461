// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod chatbot;
mod http;
mod i18n;
mod logging;
mod map;

pub use chatbot::{ChatbotConfig, ChatbotConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use i18n::{I18nConfig, I18nConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use map::{MapConfig, MapConfigLayer};
