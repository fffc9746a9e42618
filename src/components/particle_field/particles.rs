//! Particle records and the seeded population generator.

use std::f64::consts::TAU;

use super::config::{Density, FieldLimits, StyleConfig};
use super::seed::SeededRandom;

/// Share of the base count added as sparse "special" particles.
const SPECIAL_RATIO: f64 = 0.15;
/// Share of the base count added as downward-drifting particles.
const FLOATING_RATIO: f64 = 0.1;
/// Keeps base drift slow enough to read as ambient motion.
const BASE_VELOCITY_SCALE: f64 = 0.4;

/// A single drifting dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	/// Multiplier applied to the velocity every frame.
	pub speed: f64,
	/// Lines this particle may still draw in the current frame.
	pub connection_budget: usize,
}

impl Particle {
	/// Advance one frame and wrap back into `[0, width] x [0, height]`.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.vx * self.speed, width);
		self.y = wrap(self.y + self.vy * self.speed, height);
	}
}

/// Single correction per axis; per-frame travel is far below the viewport size.
fn wrap(v: f64, extent: f64) -> f64 {
	if v < 0.0 {
		extent
	} else if v > extent {
		0.0
	} else {
		v
	}
}

/// Counts for each subpopulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationCounts {
	pub base: usize,
	pub special: usize,
	pub floating: usize,
}

impl PopulationCounts {
	pub fn for_viewport(width: f64, height: f64, density: Density, cap: Option<usize>) -> Self {
		let area = width * height;
		let base = if area.is_finite() && area > 0.0 {
			(area / density.divisor()).floor() as usize
		} else {
			0
		};
		let counts = Self::from_base(base);
		match cap {
			Some(cap) if counts.total() > cap => {
				// Largest base whose full population still fits.
				let mut base = base.min(cap);
				while base > 0 && Self::from_base(base).total() > cap {
					base -= 1;
				}
				Self::from_base(base)
			}
			_ => counts,
		}
	}

	fn from_base(base: usize) -> Self {
		Self {
			base,
			special: (base as f64 * SPECIAL_RATIO).floor() as usize,
			floating: (base as f64 * FLOATING_RATIO).floor() as usize,
		}
	}

	pub fn total(&self) -> usize {
		self.base + self.special + self.floating
	}
}

/// The full particle population for one mounted field.
///
/// Regenerated wholesale on mount, resize, and configuration change; never
/// grown or shrunk in place.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
}

impl ParticleSet {
	/// Build a population from the generator's initial seed.
	///
	/// Draw order per particle is fixed; changing it changes every page's layout.
	pub fn generate(
		rng: &mut SeededRandom,
		style: &StyleConfig,
		density: Density,
		limits: &FieldLimits,
		width: f64,
		height: f64,
	) -> Self {
		rng.reset();
		let counts = PopulationCounts::for_viewport(width, height, density, limits.max_particles);
		let mut particles = Vec::with_capacity(counts.total());

		for _ in 0..counts.base {
			let x = rng.next_f64() * width;
			let y = rng.next_f64() * height;
			let angle = rng.next_f64() * TAU;
			let base_speed = rng.next_f64() * 0.8 + 0.2;
			let size = rng.next_f64() * 2.5 + 0.5;
			let opacity =
				rng.next_f64() * (style.max_opacity - style.base_opacity) + style.base_opacity;
			let speed = rng.next_f64() * 0.6 + 0.3;
			particles.push(Particle {
				x,
				y,
				vx: angle.cos() * base_speed * BASE_VELOCITY_SCALE,
				vy: angle.sin() * base_speed * BASE_VELOCITY_SCALE,
				size,
				opacity,
				speed,
				connection_budget: 0,
			});
		}

		for _ in 0..counts.special {
			let x = rng.next_f64() * width;
			let y = rng.next_f64() * height;
			let vx = (rng.next_f64() - 0.5) * 1.5;
			let vy = (rng.next_f64() - 0.5) * 1.5;
			let size = rng.next_f64() * 1.8 + 0.3;
			let opacity = rng.next_f64() * style.base_opacity + 0.02;
			let speed = rng.next_f64() * 1.2 + 0.4;
			particles.push(Particle {
				x,
				y,
				vx,
				vy,
				size,
				opacity,
				speed,
				connection_budget: 0,
			});
		}

		for _ in 0..counts.floating {
			let x = rng.next_f64() * width;
			let y = rng.next_f64() * height;
			let vx = (rng.next_f64() - 0.5) * 0.3;
			let vy = rng.next_f64() * 0.8 + 0.2; // always downward
			let size = rng.next_f64() * 1.2 + 0.8;
			let opacity = rng.next_f64() * style.max_opacity * 0.6;
			let speed = rng.next_f64() * 0.4 + 0.1;
			particles.push(Particle {
				x,
				y,
				vx,
				vy,
				size,
				opacity,
				speed,
				connection_budget: 0,
			});
		}

		Self {
			particles,
			width,
			height,
		}
	}

	/// Move every particle by one frame.
	pub fn step(&mut self) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.advance(width, height);
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
