//! Frame-rate limiting for the animation loop.

/// Display timestamps jitter around the vsync period; a frame this close to
/// the interval still counts as due.
const VSYNC_SLACK_MS: f64 = 1.0;

/// Lets a frame through only when `interval_ms` has passed since the last one.
#[derive(Clone, Debug)]
pub struct FrameLimiter {
	min_gap_ms: f64,
	last: Option<f64>,
}

impl FrameLimiter {
	pub fn new(interval_ms: f64) -> Self {
		let interval_ms = if interval_ms.is_finite() { interval_ms } else { 0.0 };
		Self {
			min_gap_ms: (interval_ms - VSYNC_SLACK_MS).max(0.0),
			last: None,
		}
	}

	/// `now` is a monotonic timestamp in milliseconds.
	pub fn ready(&mut self, now: f64) -> bool {
		match self.last {
			Some(last) if now - last < self.min_gap_ms => false,
			_ => {
				self.last = Some(now);
				true
			}
		}
	}

	/// Forget the last frame so the next call runs immediately.
	pub fn reset(&mut self) {
		self.last = None;
	}
}
