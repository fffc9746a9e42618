//! Proximity lines between nearby particles.

use super::config::StyleConfig;
use super::particles::Particle;

/// A line to draw between particles `from` and `to` (`from < to`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: usize,
	pub to: usize,
	pub distance: f64,
	pub opacity: f64,
}

/// Euclidean distance; symmetric in its arguments.
pub fn distance(a: &Particle, b: &Particle) -> f64 {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	(dx * dx + dy * dy).sqrt()
}

/// Line alpha falls off linearly from `connection_opacity` to 0 at the threshold.
pub fn connection_opacity(distance: f64, style: &StyleConfig) -> f64 {
	(1.0 - distance / style.connection_distance) * style.connection_opacity
}

/// Collect this frame's connections into `out` (cleared first).
///
/// Each unordered pair is visited once. With `max_per_particle` set, a
/// particle stops connecting once its budget is spent, which also cuts the
/// pair scan short for that particle.
pub fn collect(
	particles: &mut [Particle],
	style: &StyleConfig,
	max_per_particle: Option<usize>,
	out: &mut Vec<Connection>,
) {
	out.clear();
	let budget = max_per_particle.unwrap_or(usize::MAX);
	for p in particles.iter_mut() {
		p.connection_budget = budget;
	}

	for i in 0..particles.len() {
		let (head, tail) = particles.split_at_mut(i + 1);
		let a = &mut head[i];
		for (offset, b) in tail.iter_mut().enumerate() {
			if a.connection_budget == 0 {
				break;
			}
			if b.connection_budget == 0 {
				continue;
			}
			let d = distance(a, b);
			if d < style.connection_distance {
				a.connection_budget -= 1;
				b.connection_budget -= 1;
				out.push(Connection {
					from: i,
					to: i + 1 + offset,
					distance: d,
					opacity: connection_opacity(d, style),
				});
			}
		}
	}
}
