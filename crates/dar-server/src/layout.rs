// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Document shell shared by every page.
//!
//! The shell carries the `lang`/`dir` attributes of the resolved locale, the
//! font stylesheet matching the text direction, global styles, a locale
//! switcher and the persistent chatbot mount point.

use dar_common_i18n::{available_locales, Direction, Resolution};
use dar_web_map::markup::escape_html;
use dar_web_map::{BOOTSTRAP_JS, LEAFLET_CSS_URL, LEAFLET_JS_URL};

const LATIN_FONT_URL: &str =
	"https://fonts.googleapis.com/css2?family=Inter:wght@400;600&display=swap";
const ARABIC_FONT_URL: &str =
	"https://fonts.googleapis.com/css2?family=Noto+Kufi+Arabic:wght@400;600&display=swap";

const GLOBAL_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; color: #1f2933; background: #f7f5f2; line-height: 1.5; }
a { color: #b4532a; }
.site-header { display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 1rem 2rem; background: #fff; border-block-end: 1px solid #e4e0da; }
.site-header__brand { font-weight: 600; font-size: 1.25rem; text-decoration: none; color: inherit; }
.site-header__tagline { margin-inline-start: .75rem; color: #7b8794; font-size: .875rem; }
.site-nav { display: flex; gap: 1rem; align-items: center; }
.locale-switcher a { margin-inline-start: .5rem; text-decoration: none; }
.locale-switcher a[aria-current="true"] { font-weight: 600; text-decoration: underline; }
main { max-width: 960px; margin: 0 auto; padding: 2rem; }
.dar-map { height: 420px; border-radius: 8px; margin-block: 1rem; }
.alert { padding: .75rem 1rem; border-radius: 6px; background: #fce8e6; color: #c5221f; border: 1px solid #f5c6c4; }
.site-footer { padding: 2rem; text-align: center; color: #7b8794; font-size: .875rem; }
.chatbot { position: fixed; inset-block-end: 1.5rem; inset-inline-end: 1.5rem; z-index: 1000; }
.chatbot__launcher { padding: .75rem 1.25rem; border: none; border-radius: 999px; background: #b4532a; color: #fff; cursor: pointer; }
.chatbot__panel { width: 320px; margin-block-end: .75rem; padding: 1rem; background: #fff; border-radius: 8px; box-shadow: 0 4px 16px rgba(0, 0, 0, .15); }
.chatbot__panel header { display: flex; justify-content: space-between; align-items: center; }
.chatbot__panel input { width: 100%; padding: .5rem; }
"#;

const CHATBOT_JS: &str = r#"(function () {
  var root = document.getElementById("chatbot");
  if (!root) { return; }
  var panel = document.getElementById("chatbot-panel");
  var launcher = root.querySelector(".chatbot__launcher");
  function toggle(open) {
    panel.hidden = !open;
    launcher.setAttribute("aria-expanded", String(open));
  }
  launcher.addEventListener("click", function () { toggle(panel.hidden); });
  root.querySelector(".chatbot__close").addEventListener("click", function () { toggle(false); });
})();"#;

/// Layout-wide switches taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
	pub chatbot_enabled: bool,
}

impl Default for LayoutOptions {
	fn default() -> Self {
		Self {
			chatbot_enabled: true,
		}
	}
}

/// Content mounted inside the shell.
#[derive(Debug, Clone)]
pub struct Page {
	/// Page heading used in `<title>`; `None` for the site title alone.
	pub title: Option<String>,
	/// Path below the locale prefix (`""`, `"/listings/new"`), used by the locale switcher.
	pub path: String,
	/// Pre-rendered, already escaped HTML.
	pub body: String,
	/// Whether the page embeds a map widget and needs Leaflet.
	pub has_map: bool,
}

impl Page {
	pub fn new(path: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			title: None,
			path: path.into(),
			body: body.into(),
			has_map: false,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_map(mut self) -> Self {
		self.has_map = true;
		self
	}
}

fn font_url(direction: Direction) -> &'static str {
	match direction {
		Direction::Ltr => LATIN_FONT_URL,
		Direction::Rtl => ARABIC_FONT_URL,
	}
}

fn font_family(direction: Direction) -> &'static str {
	match direction {
		Direction::Ltr => "'Inter', system-ui, sans-serif",
		Direction::Rtl => "'Noto Kufi Arabic', 'Inter', system-ui, sans-serif",
	}
}

/// Render a complete HTML document for `page` in the resolved locale.
pub fn render_document(resolution: &Resolution<'_>, page: &Page, options: &LayoutOptions) -> String {
	let locale = resolution.locale.as_str();
	let dir = resolution.direction.as_html_dir();
	let site_title = resolution.t("metadata.title");
	let title = match &page.title {
		Some(heading) => format!("{heading} · {site_title}"),
		None => site_title.to_string(),
	};

	let map_head = if page.has_map {
		format!(
			r#"<link rel="stylesheet" href="{LEAFLET_CSS_URL}">
    <script src="{LEAFLET_JS_URL}" defer></script>"#
		)
	} else {
		String::new()
	};
	let map_bootstrap = if page.has_map {
		format!(
			r#"<script>window.addEventListener("DOMContentLoaded", function () {{ {BOOTSTRAP_JS} }});</script>"#
		)
	} else {
		String::new()
	};
	let chatbot = if options.chatbot_enabled {
		render_chatbot(resolution)
	} else {
		String::new()
	};

	format!(
		r#"<!DOCTYPE html>
<html lang="{locale}" dir="{dir}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="stylesheet" href="{font_url}">
    <style>{GLOBAL_CSS}body {{ font-family: {font_family}; text-align: {text_align}; }}</style>
    {map_head}
</head>
<body>
    <header class="site-header">
        <div>
            <a class="site-header__brand" href="/{locale}">{site_name}</a>
            <span class="site-header__tagline">{tagline}</span>
        </div>
        <nav class="site-nav">
            <a href="/{locale}">{nav_home}</a>
            <a href="/{locale}/listings/new">{nav_new}</a>
            {switcher}
        </nav>
    </header>
    <main>
{body}
    </main>
    <footer class="site-footer">{site_name} · {rights}</footer>
    {chatbot}
    {map_bootstrap}
</body>
</html>"#,
		title = escape_html(&title),
		description = escape_html(resolution.t("metadata.description")),
		font_url = escape_html(font_url(resolution.direction)),
		font_family = font_family(resolution.direction),
		text_align = resolution.direction.text_align_start(),
		site_name = escape_html(resolution.t("site.name")),
		tagline = escape_html(resolution.t("site.tagline")),
		nav_home = escape_html(resolution.t("nav.home")),
		nav_new = escape_html(resolution.t("nav.new_listing")),
		switcher = render_locale_switcher(resolution, &page.path),
		body = page.body,
		rights = escape_html(resolution.t("footer.rights")),
	)
}

/// Links to the current page in every supported locale.
fn render_locale_switcher(resolution: &Resolution<'_>, path: &str) -> String {
	let links: String = available_locales()
		.iter()
		.map(|info| {
			let current = if info.locale == resolution.locale {
				r#" aria-current="true""#
			} else {
				""
			};
			format!(
				r#"<a href="/{code}{path}" hreflang="{code}" lang="{code}"{current}>{name}</a>"#,
				code = info.code(),
				path = escape_html(path),
				name = escape_html(info.native_name),
			)
		})
		.collect();

	format!(
		r#"<span class="locale-switcher" aria-label="{label}">{links}</span>"#,
		label = escape_html(resolution.t("nav.language")),
	)
}

fn render_chatbot(resolution: &Resolution<'_>) -> String {
	format!(
		r#"<aside id="chatbot" class="chatbot" aria-label="{title}">
        <section id="chatbot-panel" class="chatbot__panel" hidden>
            <header><strong>{title}</strong><button type="button" class="chatbot__close">{close}</button></header>
            <p class="chatbot__greeting">{greeting}</p>
            <form class="chatbot__form" onsubmit="return false;"><input type="text" name="message" placeholder="{placeholder}" autocomplete="off"></form>
        </section>
        <button type="button" class="chatbot__launcher" aria-controls="chatbot-panel" aria-expanded="false">{launcher}</button>
    </aside>
    <script>{CHATBOT_JS}</script>"#,
		title = escape_html(resolution.t("chatbot.title")),
		close = escape_html(resolution.t("chatbot.close")),
		greeting = escape_html(resolution.t("chatbot.greeting")),
		placeholder = escape_html(resolution.t("chatbot.placeholder")),
		launcher = escape_html(resolution.t("chatbot.launcher")),
	)
}
