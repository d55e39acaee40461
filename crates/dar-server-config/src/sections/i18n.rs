// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message catalog location.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub messages_dir: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.messages_dir.is_some() {
			self.messages_dir = other.messages_dir;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			messages_dir: self.messages_dir,
		}
	}
}

/// When `messages_dir` is unset the catalogs bundled into the binary are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	pub messages_dir: Option<String>,
}
