// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML escaping for text and attribute values.

/// HTML-escape a string into the output buffer.
pub fn escape_html_into(out: &mut String, s: &str) {
	for c in s.chars() {
		match c {
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'&' => out.push_str("&amp;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
}

/// HTML-escape a string. Safe for element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	escape_html_into(&mut out, s);
	out
}
