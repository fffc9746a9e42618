//! opudoc-landing: the OpuDoc early-access site.
//!
//! This crate provides the WASM front end: a hero page with an email signup
//! form, the email confirmation landing page, and the data security page, all
//! drawn over a deterministic animated particle background.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;

pub use components::particle_field::{Density, FieldConfig, FieldLimits, ParticleField, Style};

use components::pages::{ConfirmedPage, DataSecurityPage, HeroPage};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("opudoc: logging initialized");
}

/// Top-level pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
	Hero,
	Confirmed,
	DataSecurity,
}

impl Page {
	/// Lenient match used when no route fits exactly (trailing slashes,
	/// unknown paths). Unknown paths land on the hero page.
	pub fn from_path(path: &str) -> Self {
		match path.trim_end_matches('/') {
			"/confirmed" => Page::Confirmed,
			"/datasecurity" => Page::DataSecurity,
			_ => Page::Hero,
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Page::Hero => "OpuDoc - Documentation reimagined",
			Page::Confirmed => "OpuDoc - Email confirmed",
			Page::DataSecurity => "OpuDoc - Data Security",
		}
	}

	/// The page body with its document title.
	fn render(self) -> AnyView {
		let body = match self {
			Page::Hero => view! { <HeroPage /> }.into_any(),
			Page::Confirmed => view! { <ConfirmedPage /> }.into_any(),
			Page::DataSecurity => view! { <DataSecurityPage /> }.into_any(),
		};
		view! {
			<Title text=self.title() />
			{body}
		}
		.into_any()
	}
}

fn fallback_page() -> AnyView {
	let location = use_location();
	Page::from_path(&location.pathname.get_untracked()).render()
}

/// Site-wide renderer limits from `<script id="particle-field-limits">`, for
/// example `{ "maxParticles": 60, "frameIntervalMs": 33.33 }`. Missing keys keep
/// their defaults; malformed JSON is logged and ignored.
fn load_field_limits() -> Option<FieldLimits> {
	let script: HtmlScriptElement = web_sys::window()?
		.document()?
		.get_element_by_id("particle-field-limits")?
		.dyn_into()
		.ok()?;
	let raw = script.text().ok()?;

	serde_json::from_str::<FieldLimits>(&raw)
		.inspect(|limits| info!("opudoc: particle field limits {limits:?}"))
		.inspect_err(|e| warn!("opudoc: ignoring particle field limits: {e}"))
		.ok()
}

/// Main application component.
/// Routes between the pages client-side and shares renderer limits through context.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(load_field_limits().unwrap_or_default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=fallback_page>
				<Route path=path!("/") view=|| Page::Hero.render() />
				<Route path=path!("/confirmed") view=|| Page::Confirmed.render() />
				<Route path=path!("/datasecurity") view=|| Page::DataSecurity.render() />
			</Routes>
		</Router>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths_select_pages() {
		assert_eq!(Page::from_path("/"), Page::Hero);
		assert_eq!(Page::from_path(""), Page::Hero);
		assert_eq!(Page::from_path("/confirmed"), Page::Confirmed);
		assert_eq!(Page::from_path("/confirmed/"), Page::Confirmed);
		assert_eq!(Page::from_path("/datasecurity"), Page::DataSecurity);
	}

	#[test]
	fn pages_have_distinct_titles() {
		let titles = [Page::Hero, Page::Confirmed, Page::DataSecurity].map(Page::title);
		assert!(titles.iter().all(|t| t.starts_with("OpuDoc - ")));
		assert_ne!(titles[0], titles[1]);
		assert_ne!(titles[1], titles[2]);
	}

	#[test]
	fn unknown_paths_fall_back_to_hero() {
		assert_eq!(Page::from_path("/pricing"), Page::Hero);
		assert_eq!(Page::from_path("/Confirmed"), Page::Hero);
	}
}
