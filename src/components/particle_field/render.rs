//! Drawing a particle frame.
//!
//! Rendering goes through [`Surface`] so the frame logic does not depend on a
//! live canvas. Pass order: clear, dots, then proximity lines.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::config::StyleConfig;
use super::connections::{self, Connection};
use super::particles::ParticleSet;
use super::theme::{CONNECTION_WIDTH, Color, PARTICLE_COLOR};

/// Minimal 2D drawing target.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}
}

/// Draw the current state of `set`. Positions are not advanced here.
pub fn draw_frame<S: Surface>(
	surface: &mut S,
	set: &mut ParticleSet,
	style: &StyleConfig,
	max_connections: Option<usize>,
	scratch: &mut Vec<Connection>,
) {
	surface.clear(set.width, set.height);

	for p in &set.particles {
		surface.fill_circle(p.x, p.y, p.size, PARTICLE_COLOR.with_alpha(p.opacity));
	}

	connections::collect(&mut set.particles, style, max_connections, scratch);
	for c in scratch.iter() {
		let (a, b) = (&set.particles[c.from], &set.particles[c.to]);
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			CONNECTION_WIDTH,
			PARTICLE_COLOR.with_alpha(c.opacity),
		);
	}
}

/// Surface that records draw calls, for tests.
#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Clear,
		Circle { x: f64, y: f64, alpha: f64 },
		Line { from: (f64, f64), to: (f64, f64), alpha: f64 },
	}

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub ops: Vec<Op>,
	}

	impl RecordingSurface {
		pub fn circles(&self) -> usize {
			self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count()
		}

		pub fn lines(&self) -> Vec<&Op> {
			self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect()
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, _width: f64, _height: f64) {
			self.ops.push(Op::Clear);
		}

		fn fill_circle(&mut self, x: f64, y: f64, _radius: f64, color: Color) {
			self.ops.push(Op::Circle { x, y, alpha: color.a });
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), _width: f64, color: Color) {
			self.ops.push(Op::Line {
				from,
				to,
				alpha: color.a,
			});
		}
	}
}
