//! Landing page: headline, early-access form, feature cards.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use log::{info, warn};
use web_sys::MouseEvent;

use super::chrome::{Footer, NavBar};
use crate::components::particle_field::{Density, FieldConfig, ParticleField, Style};
use crate::components::signup::{self, SignupRequest, SignupStatus};
use crate::components::spotlight;

const FEATURES: [(&str, &str); 4] = [
	(
		"Rich Content Editor",
		"Write beautiful docs with blocks, embeds, and interactive components",
	),
	(
		"Version Control",
		"Track changes, manage revisions, and collaborate with git-like workflows",
	),
	(
		"Beautiful Themes",
		"Customize your docs with stunning themes and brand-matching designs",
	),
	(
		"Team Spaces",
		"Organize knowledge with spaces, permissions, and team-based access",
	),
];

#[component]
pub fn HeroPage() -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();

	let on_mousemove = move |ev: MouseEvent| {
		if let Some(el) = container_ref.get() {
			spotlight::track_pointer(&el, ev.client_x() as f64, ev.client_y() as f64);
		}
	};
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(el) = container_ref.get() {
			spotlight::clear(&el);
		}
	};

	view! {
		<div
			node_ref=container_ref
			class="min-h-screen relative overflow-hidden"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			<div class="absolute inset-0 z-0">
				<ParticleField config=FieldConfig::new("home", Density::Medium, Style::Subtle) />
			</div>

			<NavBar />

			<main class="relative z-10 container mx-auto px-6 py-16">
				<div class="text-center max-w-4xl mx-auto">
					<h1 class="text-5xl md:text-7xl font-bold text-foreground mb-6 leading-tight">
						"Documentation"
						<br />
						<span class="text-primary">"reimagined"</span>
					</h1>
					<p class="text-xl text-muted-foreground mb-8 max-w-3xl mx-auto leading-relaxed">
						"OpuDoc transforms how teams create, organize, and collaborate on documentation. "
						"Experience powerful knowledge management with beautiful, intuitive workflows."
					</p>
					<SignupCard />
				</div>

				<div class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-16">
					{FEATURES
						.iter()
						.enumerate()
						.map(|(i, (title, description))| {
							let delay = format!("animation-delay: {:.1}s;", 0.3 + i as f64 * 0.1);
							view! {
								<div class="card glass-level-2 spotlight-card p-6 spring-enter-delayed border-border/30" style=delay>
									<div class="flex flex-col space-y-3">
										<h3 class="font-semibold text-foreground">{*title}</h3>
										<p class="text-sm text-muted-foreground leading-relaxed">{*description}</p>
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</main>

			<Footer />
		</div>
	}
}

/// Email capture card. Swaps to a "check your inbox" note once submitted.
#[component]
fn SignupCard() -> impl IntoView {
	let (email, set_email) = signal(String::new());
	let (wants_newsletter, set_wants_newsletter) = signal(true);
	let (status, set_status) = signal(SignupStatus::default());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if status.get_untracked() == SignupStatus::Submitting {
			return;
		}
		let request =
			match SignupRequest::new(&email.get_untracked(), wants_newsletter.get_untracked()) {
				Ok(request) => request,
				Err(e) => {
					set_status.set(SignupStatus::Failed(e));
					return;
				}
			};
		set_status.set(SignupStatus::Submitting);
		match signup::dispatch(&request) {
			Ok(()) => {
				info!("signup: request handed off (newsletter: {})", request.wants_newsletter);
				set_status.set(SignupStatus::Submitted);
			}
			Err(e) => {
				warn!("signup: {e:?}");
				set_status.set(SignupStatus::Failed(e));
			}
		}
	};

	view! {
		<div class="card glass-level-2 spotlight-card magnetic-card border-border/30 max-w-md mx-auto p-6 mb-12 spring-enter-delayed transition-transform duration-300 ease-out">
			{move || match status.get() {
				SignupStatus::Submitted => view! {
					<div class="text-center space-y-3 spring-enter">
						<h3 class="text-lg font-semibold text-foreground">"Confirmation required!"</h3>
						<p class="text-muted-foreground">
							"We've sent you a confirmation email. Click the link in the email to complete your signup."
						</p>
						<p class="text-sm text-muted-foreground">"Didn't receive an email? Check your spam folder."</p>
					</div>
				}
				.into_any(),
				current => {
					let busy = current == SignupStatus::Submitting;
					let error = match current {
						SignupStatus::Failed(e) => Some(e.to_string()),
						_ => None,
					};
					view! {
						<form on:submit=on_submit class="space-y-4">
							<div class="flex flex-col space-y-4">
								<input
									type="email"
									placeholder="your@email.com"
									class="glass-level-1 border-border/50 text-foreground placeholder:text-muted-foreground"
									required=true
									disabled=busy
									prop:value=email
									on:input=move |ev| set_email.set(event_target_value(&ev))
								/>
								<div class="flex items-center space-x-2">
									<input
										type="checkbox"
										id="newsletter"
										class="border-border/50"
										prop:checked=wants_newsletter
										on:change=move |ev| set_wants_newsletter.set(event_target_checked(&ev))
									/>
									<label for="newsletter" class="text-sm text-muted-foreground cursor-pointer">
										"I want to receive updates and news via email"
									</label>
								</div>
								{error.map(|msg| view! { <p class="text-sm text-destructive">{msg}</p> })}
								<button type="submit" class="btn-hero w-full" disabled=busy>
									{if busy { "Sending..." } else { "Get Early Access" }}
								</button>
							</div>
							<p class="text-sm text-muted-foreground text-center">
								"By clicking \"Get Early Access\" you accept our "
								<A href="/datasecurity" attr:class="text-primary hover:underline">
									"Data Security guidelines"
								</A>
							</p>
						</form>
					}
					.into_any()
				}
			}}
		</div>
	}
}
