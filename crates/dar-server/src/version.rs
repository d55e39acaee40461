// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Build information for dar-server.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"dar-server version: {VERSION}\n\
         Platform:           {}-{}",
		std::env::consts::OS,
		std::env::consts::ARCH,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_version_info_mentions_version() {
		let info = format_version_info();
		assert!(info.starts_with("dar-server version: "));
		assert!(info.contains(VERSION));
		assert!(info.contains(std::env::consts::OS));
	}
}
