//! Lifecycle and per-frame driver for one mounted particle field.
//!
//! The controller owns everything the animation loop touches: the generator,
//! the particle set, and the frame limiter. It knows nothing about the DOM;
//! the component feeds it timestamps and a [`Surface`].

use log::debug;

use super::config::{FieldConfig, FieldLimits, StyleConfig};
use super::connections::Connection;
use super::limiter::FrameLimiter;
use super::particles::ParticleSet;
use super::render::{self, Surface};
use super::seed::SeededRandom;

/// Where the loop is in its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	Uninitialized,
	Running,
	Stopped,
}

/// Result of offering the controller a display frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
	Drawn,
	/// Throttled; nothing drawn but the loop stays armed.
	Skipped,
	/// Torn down (or never mounted). The caller must not re-arm.
	Stopped,
}

impl FrameOutcome {
	pub fn rearm(self) -> bool {
		self != FrameOutcome::Stopped
	}
}

/// State machine behind one mounted field.
pub struct FieldController {
	config: FieldConfig,
	style: StyleConfig,
	limits: FieldLimits,
	rng: SeededRandom,
	limiter: FrameLimiter,
	set: ParticleSet,
	scratch: Vec<Connection>,
	state: LoopState,
}

impl FieldController {
	pub fn new(config: FieldConfig, limits: FieldLimits) -> Self {
		Self {
			style: StyleConfig::from(config.style),
			rng: SeededRandom::from_page_id(&config.page_id),
			limiter: FrameLimiter::new(limits.frame_interval_ms),
			set: ParticleSet::default(),
			scratch: Vec::new(),
			state: LoopState::Uninitialized,
			config,
			limits,
		}
	}

	/// Generate the first particle set and start accepting frames.
	pub fn mount(&mut self, width: f64, height: f64) {
		if self.state != LoopState::Uninitialized {
			return;
		}
		self.state = LoopState::Running;
		self.regenerate(width, height);
	}

	/// Replace the particle set for a new viewport size.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.state == LoopState::Running {
			self.regenerate(width, height);
		}
	}

	/// Swap configuration and regenerate, keeping the loop running.
	pub fn reconfigure(&mut self, config: FieldConfig) {
		if config == self.config {
			return;
		}
		self.style = StyleConfig::from(config.style);
		self.rng = SeededRandom::from_page_id(&config.page_id);
		self.config = config;
		if self.state == LoopState::Running {
			let (w, h) = (self.set.width, self.set.height);
			self.regenerate(w, h);
		}
	}

	fn regenerate(&mut self, width: f64, height: f64) {
		self.set = ParticleSet::generate(
			&mut self.rng,
			&self.style,
			self.config.density,
			&self.limits,
			width,
			height,
		);
		self.limiter.reset();
		debug!(
			"particle field '{}': {} particles for {}x{}",
			self.config.page_id,
			self.set.len(),
			width,
			height
		);
	}

	/// Advance and draw one frame if the limiter allows it.
	pub fn frame<S: Surface>(&mut self, now: f64, surface: &mut S) -> FrameOutcome {
		if self.state != LoopState::Running {
			return FrameOutcome::Stopped;
		}
		if !self.limiter.ready(now) {
			return FrameOutcome::Skipped;
		}
		self.set.step();
		render::draw_frame(
			surface,
			&mut self.set,
			&self.style,
			self.limits.max_connections_per_particle,
			&mut self.scratch,
		);
		FrameOutcome::Drawn
	}

	/// Disarm permanently and drop the particle set.
	pub fn stop(&mut self) {
		if self.state == LoopState::Stopped {
			return;
		}
		self.state = LoopState::Stopped;
		self.set = ParticleSet::default();
		self.scratch = Vec::new();
		debug!("particle field '{}': stopped", self.config.page_id);
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn particles(&self) -> &ParticleSet {
		&self.set
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::config::{Density, Style};
	use crate::components::particle_field::render::recording::{Op, RecordingSurface};

	fn unthrottled() -> FieldLimits {
		FieldLimits {
			frame_interval_ms: 0.0,
			..FieldLimits::default()
		}
	}

	fn home() -> FieldConfig {
		FieldConfig::new("home", Density::Medium, Style::Subtle)
	}

	#[test]
	fn state_machine() {
		let mut c = FieldController::new(home(), unthrottled());
		assert_eq!(c.state(), LoopState::Uninitialized);
		c.mount(1000.0, 1000.0);
		assert_eq!(c.state(), LoopState::Running);
		c.resize(500.0, 500.0);
		assert_eq!(c.state(), LoopState::Running);
		c.stop();
		assert_eq!(c.state(), LoopState::Stopped);
		c.mount(1000.0, 1000.0);
		assert_eq!(c.state(), LoopState::Stopped);
	}

	#[test]
	fn unmounted_controller_never_draws() {
		let mut c = FieldController::new(home(), unthrottled());
		let mut surface = RecordingSurface::default();
		assert_eq!(c.frame(0.0, &mut surface), FrameOutcome::Stopped);
		assert!(surface.ops.is_empty());
	}

	#[test]
	fn no_drawing_after_stop() {
		let mut c = FieldController::new(home(), unthrottled());
		c.mount(800.0, 600.0);
		let mut surface = RecordingSurface::default();
		assert_eq!(c.frame(0.0, &mut surface), FrameOutcome::Drawn);
		let drawn = surface.ops.len();
		assert!(drawn > 0);

		c.stop();
		let outcome = c.frame(16.0, &mut surface);
		assert_eq!(outcome, FrameOutcome::Stopped);
		assert!(!outcome.rearm());
		assert_eq!(surface.ops.len(), drawn);
		assert!(c.particles().is_empty());
	}

	#[test]
	fn throttled_frames_skip_drawing() {
		let mut c = FieldController::new(home(), FieldLimits::default());
		c.mount(800.0, 600.0);
		let mut surface = RecordingSurface::default();
		assert_eq!(c.frame(1000.0, &mut surface), FrameOutcome::Drawn);
		let drawn = surface.ops.len();
		let outcome = c.frame(1016.0, &mut surface);
		assert_eq!(outcome, FrameOutcome::Skipped);
		assert!(outcome.rearm());
		assert_eq!(surface.ops.len(), drawn);
		assert_eq!(c.frame(1034.0, &mut surface), FrameOutcome::Drawn);
	}

	#[test]
	fn one_circle_per_particle_each_frame() {
		let mut c = FieldController::new(home(), unthrottled());
		c.mount(1000.0, 1000.0);
		let mut surface = RecordingSurface::default();
		c.frame(0.0, &mut surface);
		assert_eq!(surface.ops[0], Op::Clear);
		assert_eq!(surface.circles(), 129);
	}

	#[test]
	fn resize_regenerates_same_layout_for_same_size() {
		let mut a = FieldController::new(home(), unthrottled());
		a.mount(1000.0, 1000.0);
		let initial = a.particles().particles.clone();

		let mut surface = RecordingSurface::default();
		for i in 0..10 {
			a.frame(i as f64, &mut surface);
		}
		a.resize(640.0, 480.0);
		assert_ne!(a.particles().len(), initial.len());
		a.resize(1000.0, 1000.0);
		assert_eq!(a.particles().particles, initial);
	}

	#[test]
	fn independent_mounts_match() {
		let mut a = FieldController::new(home(), unthrottled());
		let mut b = FieldController::new(home(), unthrottled());
		a.mount(1000.0, 1000.0);
		b.mount(1000.0, 1000.0);
		assert_eq!(a.particles().particles, b.particles().particles);
	}

	#[test]
	fn reconfigure_switches_layout() {
		let mut c = FieldController::new(home(), unthrottled());
		c.mount(1000.0, 1000.0);
		c.reconfigure(FieldConfig::new("home", Density::High, Style::Subtle));
		assert_eq!(c.state(), LoopState::Running);
		assert_eq!(c.config().density, Density::High);
		// floor(1e6 / 6400) = 156, plus 23 special and 15 floating
		assert_eq!(c.particles().len(), 194);
	}

	#[test]
	fn zero_area_mount_draws_nothing_but_clear() {
		let mut c = FieldController::new(home(), unthrottled());
		c.mount(0.0, 0.0);
		let mut surface = RecordingSurface::default();
		assert_eq!(c.frame(0.0, &mut surface), FrameOutcome::Drawn);
		assert_eq!(surface.ops, vec![Op::Clear]);
	}

	#[test]
	fn capped_field_respects_limits() {
		let limits = FieldLimits {
			max_particles: Some(60),
			max_connections_per_particle: Some(3),
			frame_interval_ms: 0.0,
			..FieldLimits::default()
		};
		let mut c = FieldController::new(
			FieldConfig::new("datasecurity", Density::High, Style::Vibrant),
			limits,
		);
		c.mount(1920.0, 1080.0);
		assert!(c.particles().len() <= 60);

		let mut surface = RecordingSurface::default();
		c.frame(0.0, &mut surface);
		assert!(surface.lines().len() <= 60 * 3 / 2);
	}
}
