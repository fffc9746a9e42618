//! Field configuration: page identity, density and style tiers, and limits.

use serde::Deserialize;

/// Area-to-particle ratio tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
	Low,
	#[default]
	Medium,
	High,
}

impl Density {
	/// Square pixels of viewport per base particle.
	pub fn divisor(self) -> f64 {
		match self {
			Density::Low => 16000.0,
			Density::Medium => 9600.0,
			Density::High => 6400.0,
		}
	}
}

/// Opacity band and connection geometry tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
	#[default]
	Subtle,
	Vibrant,
	Minimal,
}

/// Resolved numbers for a [`Style`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleConfig {
	pub base_opacity: f64,
	pub max_opacity: f64,
	/// Pixel distance below which two particles are joined by a line.
	pub connection_distance: f64,
	/// Line alpha at zero distance; fades linearly to 0 at `connection_distance`.
	pub connection_opacity: f64,
}

impl From<Style> for StyleConfig {
	fn from(style: Style) -> Self {
		match style {
			Style::Subtle => StyleConfig {
				base_opacity: 0.15,
				max_opacity: 0.4,
				connection_distance: 80.0,
				connection_opacity: 0.15,
			},
			Style::Vibrant => StyleConfig {
				base_opacity: 0.3,
				max_opacity: 0.7,
				connection_distance: 120.0,
				connection_opacity: 0.3,
			},
			Style::Minimal => StyleConfig {
				base_opacity: 0.05,
				max_opacity: 0.2,
				connection_distance: 60.0,
				connection_opacity: 0.08,
			},
		}
	}
}

/// Per-mount configuration supplied by the host page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
	/// Only used to derive the layout seed.
	pub page_id: String,
	pub density: Density,
	pub style: Style,
}

impl FieldConfig {
	pub const DEFAULT_PAGE_ID: &'static str = "default";

	pub fn new(page_id: impl Into<String>, density: Density, style: Style) -> Self {
		Self {
			page_id: page_id.into(),
			density,
			style,
		}
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::new(Self::DEFAULT_PAGE_ID, Density::default(), Style::default())
	}
}

/// Cost bounds for the renderer. Shared by every field on the site.
///
/// The defaults only throttle to 30 fps; particle and connection caps are off
/// so the generated layout is the full area-scaled population.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldLimits {
	/// Upper bound on the total particle count across all subpopulations.
	pub max_particles: Option<usize>,
	/// Lines a single particle may take part in per frame.
	pub max_connections_per_particle: Option<usize>,
	/// Minimum time between executed frames. `0` draws on every display frame.
	pub frame_interval_ms: f64,
	/// Canvas height never exceeds this multiple of the viewport height.
	pub max_height_factor: f64,
}

impl Default for FieldLimits {
	fn default() -> Self {
		Self {
			max_particles: None,
			max_connections_per_particle: None,
			frame_interval_ms: 1000.0 / 30.0,
			max_height_factor: 3.0,
		}
	}
}

impl FieldLimits {
	/// Canvas size for a viewport: full width, document height capped to a
	/// multiple of the viewport height.
	pub fn canvas_size(
		&self,
		inner_width: f64,
		inner_height: f64,
		scroll_height: f64,
	) -> (f64, f64) {
		let inner_width = sanitize(inner_width);
		let inner_height = sanitize(inner_height);
		let document_height = sanitize(scroll_height).max(inner_height);
		let cap = inner_height * self.max_height_factor.max(1.0);
		(inner_width.floor(), document_height.min(cap).floor())
	}
}

fn sanitize(v: f64) -> f64 {
	if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn denser_tiers_have_smaller_divisors() {
		assert!(Density::High.divisor() < Density::Medium.divisor());
		assert!(Density::Medium.divisor() < Density::Low.divisor());
	}

	#[test]
	fn style_bands_are_ordered() {
		for style in [Style::Subtle, Style::Vibrant, Style::Minimal] {
			let cfg = StyleConfig::from(style);
			assert!(cfg.base_opacity < cfg.max_opacity);
			assert!(cfg.max_opacity <= 1.0);
			assert!(cfg.connection_distance > 0.0);
		}
	}

	#[test]
	fn config_defaults() {
		let cfg = FieldConfig::default();
		assert_eq!(cfg.page_id, "default");
		assert_eq!(cfg.density, Density::Medium);
		assert_eq!(cfg.style, Style::Subtle);
	}

	#[test]
	fn config_from_partial_json() {
		let cfg: FieldConfig =
			serde_json::from_str(r#"{"pageId":"home","style":"vibrant"}"#).unwrap();
		assert_eq!(cfg, FieldConfig::new("home", Density::Medium, Style::Vibrant));
	}

	#[test]
	fn unknown_tier_is_rejected() {
		assert!(serde_json::from_str::<FieldConfig>(r#"{"density":"extreme"}"#).is_err());
	}

	#[test]
	fn limits_from_json() {
		let limits: FieldLimits =
			serde_json::from_str(r#"{"maxParticles":60,"frameIntervalMs":0}"#).unwrap();
		assert_eq!(limits.max_particles, Some(60));
		assert_eq!(limits.max_connections_per_particle, None);
		assert_eq!(limits.frame_interval_ms, 0.0);
		assert_eq!(limits.max_height_factor, 3.0);
	}

	#[test]
	fn canvas_height_follows_document_up_to_cap() {
		let limits = FieldLimits::default();
		assert_eq!(limits.canvas_size(1280.0, 800.0, 1500.0), (1280.0, 1500.0));
		assert_eq!(limits.canvas_size(1280.0, 800.0, 9000.0), (1280.0, 2400.0));
		// Short documents still cover the viewport.
		assert_eq!(limits.canvas_size(1280.0, 800.0, 0.0), (1280.0, 800.0));
	}

	#[test]
	fn canvas_size_ignores_garbage() {
		let limits = FieldLimits::default();
		assert_eq!(limits.canvas_size(f64::NAN, -5.0, f64::INFINITY), (0.0, 0.0));
	}
}
