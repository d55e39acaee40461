// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Chatbot widget configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatbotConfigLayer {
	pub enabled: Option<bool>,
}

impl ChatbotConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
	}

	pub fn finalize(self) -> ChatbotConfig {
		ChatbotConfig {
			enabled: self.enabled.unwrap_or(true),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatbotConfig {
	pub enabled: bool,
}

impl Default for ChatbotConfig {
	fn default() -> Self {
		Self { enabled: true }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_enabled_by_default() {
		assert!(ChatbotConfigLayer::default().finalize().enabled);
	}

	#[test]
	fn test_disable() {
		let mut layer = ChatbotConfigLayer::default();
		layer.merge(ChatbotConfigLayer {
			enabled: Some(false),
		});
		assert!(!layer.finalize().enabled);
	}
}
