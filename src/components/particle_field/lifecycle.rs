//! Mount and teardown of a running field, independent of the browser.
//!
//! A [`FieldLoop`] pairs the [`FieldController`] with a [`Scheduler`] that
//! owns the display-frame and resize hooks. At most one frame request is
//! outstanding at a time, and after [`FieldLoop::teardown`] nothing is
//! scheduled and no resize is observed.

use std::cell::{Cell, RefCell};

use log::debug;
use thiserror::Error;
use wasm_bindgen::JsValue;

use super::config::FieldConfig;
use super::controller::{FieldController, LoopState};
use super::render::Surface;

/// Reasons a field could not be mounted. The page still renders without it.
#[derive(Debug, Error)]
pub enum FieldError {
	/// Not running in a browser window.
	#[error("no browser window")]
	NoWindow,
	/// The canvas refused a 2d context.
	#[error("canvas has no 2d context")]
	NoContext,
	/// Frame callback was already released.
	#[error("field already torn down")]
	TornDown,
	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for FieldError {
	fn from(value: JsValue) -> Self {
		FieldError::Js(format!("{value:?}"))
	}
}

/// Display-frame and resize hooks of the host environment.
pub trait Scheduler {
	/// Ask for one call to the frame callback; returns the request id.
	fn request_frame(&self) -> Result<i32, FieldError>;
	fn cancel_frame(&self, id: i32);
	fn listen_resize(&self) -> Result<(), FieldError>;
	fn unlisten_resize(&self);
}

/// A controller driven by a scheduler.
pub struct FieldLoop<S: Scheduler> {
	controller: RefCell<FieldController>,
	scheduler: S,
	pending: Cell<Option<i32>>,
}

impl<S: Scheduler> FieldLoop<S> {
	pub fn new(controller: FieldController, scheduler: S) -> Self {
		Self {
			controller: RefCell::new(controller),
			scheduler,
			pending: Cell::new(None),
		}
	}

	/// Generate the first set, watch for resizes, and arm the first frame.
	/// On failure everything already attached is detached again.
	pub fn start(&self, width: f64, height: f64) -> Result<(), FieldError> {
		self.controller.borrow_mut().mount(width, height);
		let armed = self
			.scheduler
			.listen_resize()
			.and_then(|()| self.scheduler.request_frame());
		match armed {
			Ok(id) => {
				self.pending.set(Some(id));
				Ok(())
			}
			Err(e) => {
				self.teardown();
				Err(e)
			}
		}
	}

	/// Frame callback body: draw if due, then re-arm while running.
	pub fn on_frame<Su: Surface>(&self, now: f64, surface: &mut Su) {
		self.pending.set(None);
		let outcome = self.controller.borrow_mut().frame(now, surface);
		if !outcome.rearm() {
			return;
		}
		match self.scheduler.request_frame() {
			Ok(id) => self.pending.set(Some(id)),
			Err(e) => log::warn!("particle field: could not schedule frame: {e}"),
		}
	}

	pub fn on_resize(&self, width: f64, height: f64) {
		self.controller.borrow_mut().resize(width, height);
	}

	pub fn reconfigure(&self, config: FieldConfig) {
		self.controller.borrow_mut().reconfigure(config);
	}

	/// Stop drawing, cancel the pending frame, and detach the resize hook.
	pub fn teardown(&self) {
		self.controller.borrow_mut().stop();
		if let Some(id) = self.pending.take() {
			self.scheduler.cancel_frame(id);
		}
		self.scheduler.unlisten_resize();
		debug!(
			"particle field '{}': torn down",
			self.controller.borrow().config().page_id
		);
	}

	/// Id of the outstanding frame request, if any.
	pub fn pending(&self) -> Option<i32> {
		self.pending.get()
	}

	pub fn state(&self) -> LoopState {
		self.controller.borrow().state()
	}

	pub fn particle_count(&self) -> usize {
		self.controller.borrow().particles().len()
	}

	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::config::{Density, FieldLimits, Style};
	use crate::components::particle_field::render::recording::RecordingSurface;

	#[derive(Default)]
	struct FakeScheduler {
		next_id: Cell<i32>,
		requested: RefCell<Vec<i32>>,
		cancelled: RefCell<Vec<i32>>,
		listening: Cell<bool>,
		refuse_frames: bool,
	}

	impl Scheduler for FakeScheduler {
		fn request_frame(&self) -> Result<i32, FieldError> {
			if self.refuse_frames {
				return Err(FieldError::Js("refused".into()));
			}
			let id = self.next_id.get() + 1;
			self.next_id.set(id);
			self.requested.borrow_mut().push(id);
			Ok(id)
		}

		fn cancel_frame(&self, id: i32) {
			self.cancelled.borrow_mut().push(id);
		}

		fn listen_resize(&self) -> Result<(), FieldError> {
			self.listening.set(true);
			Ok(())
		}

		fn unlisten_resize(&self) {
			self.listening.set(false);
		}
	}

	fn field(scheduler: FakeScheduler) -> FieldLoop<FakeScheduler> {
		let limits = FieldLimits {
			frame_interval_ms: 0.0,
			..FieldLimits::default()
		};
		let config = FieldConfig::new("home", Density::Medium, Style::Subtle);
		FieldLoop::new(FieldController::new(config, limits), scheduler)
	}

	#[test]
	fn start_arms_one_frame_and_listens() {
		let f = field(FakeScheduler::default());
		f.start(1000.0, 1000.0).unwrap();
		assert_eq!(f.state(), LoopState::Running);
		assert_eq!(f.pending(), Some(1));
		assert!(f.scheduler().listening.get());
		assert_eq!(f.particle_count(), 129);
	}

	#[test]
	fn each_frame_rearms_exactly_once() {
		let f = field(FakeScheduler::default());
		f.start(1000.0, 1000.0).unwrap();
		let mut surface = RecordingSurface::default();
		for i in 0..3 {
			f.on_frame(i as f64 * 16.0, &mut surface);
		}
		assert_eq!(*f.scheduler().requested.borrow(), vec![1, 2, 3, 4]);
		assert_eq!(f.pending(), Some(4));
		assert_eq!(surface.circles(), 3 * 129);
	}

	#[test]
	fn teardown_leaves_nothing_scheduled() {
		let f = field(FakeScheduler::default());
		f.start(1000.0, 1000.0).unwrap();
		f.on_frame(0.0, &mut RecordingSurface::default());
		f.teardown();

		assert_eq!(f.pending(), None);
		assert_eq!(*f.scheduler().cancelled.borrow(), vec![2]);
		assert!(!f.scheduler().listening.get());
		assert_eq!(f.state(), LoopState::Stopped);

		f.on_resize(500.0, 500.0);
		assert_eq!(f.particle_count(), 0);

		let mut surface = RecordingSurface::default();
		f.on_frame(100.0, &mut surface);
		assert!(surface.ops.is_empty());
		assert_eq!(f.pending(), None);
		assert_eq!(f.scheduler().requested.borrow().len(), 2);
	}

	#[test]
	fn failed_first_frame_detaches_listener() {
		let f = field(FakeScheduler {
			refuse_frames: true,
			..FakeScheduler::default()
		});
		assert!(matches!(f.start(800.0, 600.0), Err(FieldError::Js(_))));
		assert!(!f.scheduler().listening.get());
		assert_eq!(f.pending(), None);
		assert_eq!(f.state(), LoopState::Stopped);
	}

	#[test]
	fn reconfigure_keeps_the_same_request() {
		let f = field(FakeScheduler::default());
		f.start(1000.0, 1000.0).unwrap();
		f.reconfigure(FieldConfig::new("home", Density::High, Style::Subtle));
		assert_eq!(f.pending(), Some(1));
		assert_eq!(f.particle_count(), 194);
	}
}
