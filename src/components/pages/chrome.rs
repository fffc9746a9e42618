//! Navigation bar and footer shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
	view! {
		<nav class="relative z-10">
			<div class="container mx-auto px-6 py-4">
				<div class="flex items-center justify-between">
					<A href="/" attr:class="flex items-center space-x-3 hover:opacity-80 transition-opacity">
						<img src="/assets/opudoc-logo.png" alt="OpuDoc Logo" class="w-10 h-10" />
						<h1 class="text-2xl font-bold text-foreground">"OpuDoc"</h1>
					</A>
					<span class="badge glass-level-2 border-primary/30 text-primary">"Coming Soon"</span>
				</div>
			</div>
		</nav>
	}
}

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="relative z-10 mt-16">
			<div class="container mx-auto px-6 py-8">
				<div class="flex flex-col md:flex-row justify-between items-center">
					<p class="text-sm text-muted-foreground mb-4 md:mb-0">
						"© 2025 Thael Studio. All rights reserved."
					</p>
					<div class="flex flex-col md:flex-row items-center space-y-2 md:space-y-0 md:space-x-6">
						<A
							href="/datasecurity"
							attr:class="text-sm text-muted-foreground hover:text-foreground transition-colors"
						>
							"Data Security"
						</A>
						<a
							href="https://nebeo.studio"
							target="_blank"
							rel="noopener noreferrer"
							class="text-sm text-muted-foreground hover:text-foreground transition-colors"
						>
							"Imprint"
						</a>
					</div>
				</div>
			</div>
		</footer>
	}
}
