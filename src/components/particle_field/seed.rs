//! Deterministic per-page random numbers.
//!
//! Every page gets a stable decorative layout: the seed is the sum of the
//! page identifier's UTF-16 code units, and values come from a small linear
//! congruential generator. Not suitable for anything but decoration.

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// Seeded linear congruential generator producing values in `[0, 1)`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
	initial: u64,
	state: u64,
}

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self {
			initial: seed,
			state: seed,
		}
	}

	/// Seeds the generator from a page identifier (empty string seeds 0).
	pub fn from_page_id(page_id: &str) -> Self {
		Self::new(page_seed(page_id))
	}

	pub fn next_f64(&mut self) -> f64 {
		self.state = self
			.state
			.wrapping_mul(MULTIPLIER)
			.wrapping_add(INCREMENT)
			% MODULUS;
		self.state as f64 / MODULUS as f64
	}

	/// Rewind to the initial seed so the next regeneration repeats the layout.
	pub fn reset(&mut self) {
		self.state = self.initial;
	}
}

/// Sum of UTF-16 code units, matching what a browser reports per character.
pub fn page_seed(page_id: &str) -> u64 {
	page_id.encode_utf16().map(u64::from).sum()
}
