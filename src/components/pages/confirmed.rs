//! Landing page for the email confirmation link.
//!
//! The hosted auth service redirects here with the outcome encoded in the URL
//! fragment (`#access_token=...&type=signup` or `#error=...&error_description=...`).

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::chrome::{Footer, NavBar};
use crate::components::particle_field::{Density, FieldConfig, ParticleField, Style};

/// What the confirmation redirect told us.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmationStatus {
	/// No outcome in the URL (opened directly, or the redirect is still pending).
	Pending,
	Confirmed,
	/// `reason` is the raw, still percent-encoded `error_description`.
	Failed { reason: Option<String> },
}

impl ConfirmationStatus {
	pub fn from_fragment(fragment: &str) -> Self {
		let fragment = fragment.trim_start_matches('#');
		let mut error = false;
		let mut reason = None;
		let mut token = false;

		for pair in fragment.split('&').filter(|p| !p.is_empty()) {
			let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
			match key {
				"error" | "error_code" => error = true,
				"error_description" if !value.is_empty() => {
					error = true;
					reason = Some(value.to_string());
				}
				"access_token" if !value.is_empty() => token = true,
				_ => {}
			}
		}

		if error {
			ConfirmationStatus::Failed { reason }
		} else if token {
			ConfirmationStatus::Confirmed
		} else {
			ConfirmationStatus::Pending
		}
	}
}

fn decode_reason(raw: &str) -> String {
	let spaced = raw.replace('+', " ");
	js_sys::decode_uri_component(&spaced)
		.ok()
		.and_then(|s| s.as_string())
		.unwrap_or(spaced)
}

fn status_view(status: ConfirmationStatus) -> AnyView {
	match status {
		ConfirmationStatus::Pending => view! {
			<div class="space-y-4">
				<h2 class="text-xl font-semibold text-foreground">"Confirming your email..."</h2>
				<p class="text-muted-foreground">"We're processing your email confirmation."</p>
			</div>
		}
		.into_any(),
		ConfirmationStatus::Confirmed => view! {
			<div class="space-y-6">
				<div class="space-y-2">
					<h2 class="text-xl font-semibold text-foreground">"Email confirmed!"</h2>
					<p class="text-muted-foreground">"Welcome to OpuDoc Early Access!"</p>
				</div>
				<p class="text-sm text-muted-foreground">
					"You're now officially registered for early access. "
					"We'll send you an email as soon as OpuDoc is available."
				</p>
				<A href="/" attr:class="btn w-full">"Back to Homepage"</A>
			</div>
		}
		.into_any(),
		ConfirmationStatus::Failed { reason } => {
			let detail = reason
				.map(|r| decode_reason(&r))
				.unwrap_or_else(|| "There was a problem confirming your email address.".into());
			view! {
				<div class="space-y-6">
					<div class="space-y-2">
						<h2 class="text-xl font-semibold text-foreground">"Confirmation failed"</h2>
						<p class="text-muted-foreground">{detail}</p>
					</div>
					<p class="text-sm text-muted-foreground">
						"The confirmation link may have expired or is invalid. Please try signing up again."
					</p>
					<A href="/" attr:class="btn btn-outline w-full">"Back to Homepage"</A>
				</div>
			}
			.into_any()
		}
	}
}

#[component]
pub fn ConfirmedPage() -> impl IntoView {
	let hash = use_location().hash;
	let status = Memo::new(move |_| ConfirmationStatus::from_fragment(&hash.get()));
	Effect::new(move |_| log::info!("confirmation page: {:?}", status.get()));

	view! {
		<div class="min-h-screen relative overflow-hidden">
			<div class="absolute inset-0 z-0">
				<ParticleField config=FieldConfig::new("confirmed", Density::Low, Style::Subtle) />
			</div>
			<NavBar />
			<main class="relative z-10 container mx-auto px-6 py-16">
				<div class="max-w-md mx-auto">
					<div class="card glass-level-2 border-border/30 p-8 text-center spring-enter">
						{move || status_view(status.get())}
					</div>
				</div>
			</main>
			<Footer />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_fragment_is_pending() {
		assert_eq!(ConfirmationStatus::from_fragment(""), ConfirmationStatus::Pending);
		assert_eq!(ConfirmationStatus::from_fragment("#"), ConfirmationStatus::Pending);
		assert_eq!(
			ConfirmationStatus::from_fragment("#type=signup"),
			ConfirmationStatus::Pending
		);
	}

	#[test]
	fn token_means_confirmed() {
		assert_eq!(
			ConfirmationStatus::from_fragment(
				"#access_token=abc.def&expires_in=3600&refresh_token=xyz&token_type=bearer&type=signup"
			),
			ConfirmationStatus::Confirmed
		);
		assert_eq!(
			ConfirmationStatus::from_fragment("#access_token="),
			ConfirmationStatus::Pending
		);
	}

	#[test]
	fn error_wins_over_token() {
		assert_eq!(
			ConfirmationStatus::from_fragment(
				"#error=access_denied&error_code=otp_expired&error_description=Email+link+is+invalid+or+has+expired"
			),
			ConfirmationStatus::Failed {
				reason: Some("Email+link+is+invalid+or+has+expired".into())
			}
		);
		assert_eq!(
			ConfirmationStatus::from_fragment("#access_token=abc&error=server_error"),
			ConfirmationStatus::Failed { reason: None }
		);
	}
}
