//! Pointer-following spotlight and magnetic pull for page cards.
//!
//! Cards marked `.spotlight-card` get `--card-mouse-x`, `--card-mouse-y` and
//! `--card-spotlight-opacity` custom properties that the stylesheet turns into
//! a radial highlight. Cards marked `.magnetic-card` are nudged toward the
//! pointer with a CSS transform.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Spotlight fades out over this distance from the card center.
pub const SPOTLIGHT_RANGE: f64 = 300.0;
/// Magnetic pull only applies inside this distance.
pub const MAGNET_RANGE: f64 = 200.0;
/// Largest magnetic offset in pixels.
pub const MAX_PULL: f64 = 12.0;

/// Card bounds in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl CardRect {
	pub fn center(&self) -> (f64, f64) {
		(self.left + self.width / 2.0, self.top + self.height / 2.0)
	}

	pub fn contains(&self, (x, y): (f64, f64)) -> bool {
		x >= self.left
			&& x <= self.left + self.width
			&& y >= self.top
			&& y <= self.top + self.height
	}

	fn distance_to_center(&self, (x, y): (f64, f64)) -> f64 {
		let (cx, cy) = self.center();
		((x - cx).powi(2) + (y - cy).powi(2)).sqrt()
	}
}

/// Spotlight placement in percent of the card size, plus its opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
	pub x_pct: f64,
	pub y_pct: f64,
	pub opacity: f64,
}

/// Spotlight for one card, or `None` when the pointer is out of range.
pub fn spotlight(pointer: (f64, f64), card: &CardRect) -> Option<Spotlight> {
	let distance = card.distance_to_center(pointer);
	if distance > SPOTLIGHT_RANGE || card.width <= 0.0 || card.height <= 0.0 {
		return None;
	}
	// Ease-out so the glow lingers near the card and drops off at range.
	let opacity = (1.0 - (distance / SPOTLIGHT_RANGE).powf(1.5)).max(0.0);
	Some(Spotlight {
		x_pct: ((pointer.0 - card.left) / card.width * 100.0).clamp(-20.0, 120.0),
		y_pct: ((pointer.1 - card.top) / card.height * 100.0).clamp(-20.0, 120.0),
		opacity,
	})
}

/// Spotlights for a group of cards. While the pointer sits in a gap between
/// cards every entry is `None`, so the group goes dark together.
pub fn card_spotlights(pointer: (f64, f64), cards: &[CardRect]) -> Vec<Option<Spotlight>> {
	let over_any = cards.iter().any(|r| r.contains(pointer));
	cards
		.iter()
		.map(|r| spotlight(pointer, r).filter(|_| over_any))
		.collect()
}

/// Offset pulling a card toward the pointer; zero outside [`MAGNET_RANGE`].
pub fn magnetic_pull(pointer: (f64, f64), card: &CardRect) -> (f64, f64) {
	let distance = card.distance_to_center(pointer);
	if distance > MAGNET_RANGE || distance == 0.0 {
		return (0.0, 0.0);
	}
	let strength = 1.0 - distance / MAGNET_RANGE;
	let (cx, cy) = card.center();
	(
		(pointer.0 - cx) / distance * strength * MAX_PULL,
		(pointer.1 - cy) / distance * strength * MAX_PULL,
	)
}

fn cards(container: &Element, selector: &str) -> Vec<HtmlElement> {
	let Ok(list) = container.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect()
}

fn rect_of(el: &HtmlElement) -> CardRect {
	let r = el.get_bounding_client_rect();
	CardRect {
		left: r.left(),
		top: r.top(),
		width: r.width(),
		height: r.height(),
	}
}

fn set_translate(el: &HtmlElement, (dx, dy): (f64, f64)) {
	let _ = el
		.style()
		.set_property("transform", &format!("translate({dx}px, {dy}px)"));
}

/// Update every card under `container` for a pointer at client `(x, y)`.
pub fn track_pointer(container: &Element, x: f64, y: f64) {
	let pointer = (x, y);

	for card in cards(container, ".magnetic-card") {
		set_translate(&card, magnetic_pull(pointer, &rect_of(&card)));
	}

	let spot_cards = cards(container, ".spotlight-card");
	let rects: Vec<CardRect> = spot_cards.iter().map(rect_of).collect();

	for (card, spot) in spot_cards.iter().zip(card_spotlights(pointer, &rects)) {
		let style = card.style();
		match spot {
			Some(s) => {
				let _ = style.set_property("--card-mouse-x", &format!("{}%", s.x_pct));
				let _ = style.set_property("--card-mouse-y", &format!("{}%", s.y_pct));
				let _ = style.set_property("--card-spotlight-opacity", &s.opacity.to_string());
			}
			None => {
				let _ = style.set_property("--card-spotlight-opacity", "0");
			}
		}
	}
}

/// Reset all cards when the pointer leaves the container.
pub fn clear(container: &Element) {
	for card in cards(container, ".spotlight-card") {
		let _ = card.style().set_property("--card-spotlight-opacity", "0");
	}
	for card in cards(container, ".magnetic-card") {
		set_translate(&card, (0.0, 0.0));
	}
}
