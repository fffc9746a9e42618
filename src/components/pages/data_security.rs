//! Privacy policy page. The policy text itself is maintained outside this crate;
//! this page lists its sections and the data protection contact. Section cards
//! get the same pointer spotlight as the hero feature cards.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::chrome::{Footer, NavBar};
use crate::components::particle_field::{Density, FieldConfig, ParticleField, Style};
use crate::components::spotlight;

const SECTIONS: [&str; 15] = [
	"Data Controller Information",
	"Data Processing Information",
	"Your Rights Under Austrian Law & GDPR",
	"International Data Transfers",
	"Technical & Organizational Measures",
	"Automated Decision-Making",
	"Cookies and Tracking Technologies",
	"Data Collection and Usage Details",
	"Third-Party Services and Integrations",
	"Data Retention and Deletion Policies",
	"Data Breach Response and Security Incidents",
	"Children's Privacy Protection",
	"Marketing Communications and Preferences",
	"Privacy Policy Changes and Updates",
	"Legal Compliance Framework",
];

/// Anchor id for a section heading, e.g. `data-controller-information`.
fn anchor(title: &str) -> String {
	let mut slug = String::with_capacity(title.len());
	for c in title.chars() {
		if c.is_ascii_alphanumeric() {
			slug.push(c.to_ascii_lowercase());
		} else if !slug.ends_with('-') && !slug.is_empty() {
			slug.push('-');
		}
	}
	slug.trim_end_matches('-').to_string()
}

const CONTACT_EMAIL: &str = "contact@nebeo.studio";

#[component]
pub fn DataSecurityPage() -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Main>::new();

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
		<div class="min-h-screen relative overflow-hidden">
			<div class="absolute inset-0 z-0">
				<ParticleField config=FieldConfig::new("datasecurity", Density::High, Style::Subtle) />
			</div>
			<NavBar />
			<main
				node_ref=container_ref
				class="spotlight-container relative z-10 container mx-auto px-6 py-16"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
			>
				<div class="max-w-4xl mx-auto">
					<div class="text-center mb-16 spring-enter">
						<span class="badge mb-6 glass-level-2 border-primary/30 text-primary bg-primary/5">
							"Data Security & Privacy"
						</span>
						<h1 class="text-4xl md:text-6xl font-bold text-foreground mb-6 leading-tight">
							"Your data is"
							<br />
							<span class="text-primary">"secure with us"</span>
						</h1>
						<p class="text-xl text-muted-foreground mb-8 max-w-3xl mx-auto leading-relaxed">
							"OpuDoc implements industry-leading security measures to protect your sensitive "
							"documentation and ensure complete privacy for your team's knowledge base."
						</p>
					</div>
					<ol class="space-y-8 mb-16">
						{SECTIONS
							.iter()
							.enumerate()
							.map(|(i, title)| {
								let delay = format!("animation-delay: {:.1}s;", 0.2 + i as f64 * 0.1);
								view! {
									<li
										id=anchor(title)
										class="card spotlight-card glass-level-2 p-8 spring-enter-delayed border-border/30"
										style=delay
									>
										<h2 class="text-2xl font-bold text-foreground">{*title}</h2>
									</li>
								}
							})
							.collect_view()}
					</ol>
					<section class="card spotlight-card glass-level-2 p-8 text-center spring-enter-delayed border-border/30">
						<h2 class="text-2xl font-bold text-foreground mb-4">"Data Protection Contact"</h2>
						<div class="space-y-4 text-muted-foreground">
							<div>
								<p class="mb-2">
									"For questions about data protection, privacy, or to exercise your rights:"
								</p>
								<a href=format!("mailto:{CONTACT_EMAIL}") class="text-primary font-medium">
									{CONTACT_EMAIL}
								</a>
							</div>
							<p class="text-sm">
								"Company details are listed in the "
								<a
									href="https://nebeo.studio"
									target="_blank"
									rel="noopener noreferrer"
									class="text-primary hover:underline"
								>
									"imprint"
								</a>
								"."
							</p>
						</div>
					</section>
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
	fn anchors_are_slugs() {
		assert_eq!(anchor("Data Controller Information"), "data-controller-information");
		assert_eq!(
			anchor("Your Rights Under Austrian Law & GDPR"),
			"your-rights-under-austrian-law-gdpr"
		);
		assert_eq!(anchor("Children's Privacy Protection"), "children-s-privacy-protection");
	}

	#[test]
	fn anchors_are_unique() {
		let mut anchors: Vec<String> = SECTIONS.iter().map(|s| anchor(s)).collect();
		anchors.sort();
		anchors.dedup();
		assert_eq!(anchors.len(), SECTIONS.len());
	}
}
