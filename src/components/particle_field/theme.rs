//! Colors and overlay layers for the particle background.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Dot and line color, the site foreground `hsl(220 8% 88%)`.
pub const PARTICLE_COLOR: Color = Color::rgb(222, 224, 227);

/// Connection stroke width in pixels.
pub const CONNECTION_WIDTH: f64 = 0.5;

/// A gradient layer composited above the canvas.
#[derive(Clone, Copy, Debug)]
pub struct Overlay {
	pub class: &'static str,
	pub style: &'static str,
}

/// Bottom to top: tinted base, slow pulse, readability wash.
pub const OVERLAYS: [Overlay; 3] = [
	Overlay {
		class: "absolute inset-0 opacity-30",
		style: "background: \
			radial-gradient(circle at 25% 25%, hsl(220 8% 88% / 0.1) 0%, transparent 50%), \
			radial-gradient(circle at 75% 75%, hsl(220 13% 10% / 0.2) 0%, transparent 50%), \
			linear-gradient(135deg, hsl(220 15% 4%) 0%, hsl(220 13% 6%) 50%, hsl(220 15% 4%) 100%);",
	},
	Overlay {
		class: "absolute inset-0 opacity-20 animate-pulse",
		style: "background: \
			radial-gradient(ellipse at 20% 80%, hsl(220 8% 88% / 0.05) 0%, transparent 60%), \
			radial-gradient(ellipse at 80% 20%, hsl(220 13% 10% / 0.08) 0%, transparent 60%); \
			animation-duration: 8s;",
	},
	Overlay {
		class: "absolute inset-0 z-2",
		style: "background: linear-gradient(to bottom, \
			hsl(220 15% 4% / 0.3) 0%, hsl(220 15% 4% / 0.1) 50%, hsl(220 15% 4% / 0.3) 100%);",
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(PARTICLE_COLOR.to_css(), "#dee0e3");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(PARTICLE_COLOR.with_alpha(0.25).to_css(), "rgba(222, 224, 227, 0.25)");
	}
}
