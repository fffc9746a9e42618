//! Leptos component wrapping the particle canvas.
//!
//! Mounting sizes the canvas to the viewport and starts a [`FieldLoop`] over
//! a [`BrowserScheduler`], which maps frame requests to
//! `requestAnimationFrame` and resize hooks to a window listener. Unmounting
//! tears the loop down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::{FieldConfig, FieldLimits};
use super::controller::FieldController;
use super::lifecycle::{FieldError, FieldLoop, Scheduler};
use super::theme::OVERLAYS;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` and window `resize` hooks.
struct BrowserScheduler {
	window: Window,
	animate: FrameCallback,
	on_resize: ResizeCallback,
}

impl Scheduler for BrowserScheduler {
	fn request_frame(&self) -> Result<i32, FieldError> {
		let animate = self.animate.borrow();
		let cb = animate.as_ref().ok_or(FieldError::TornDown)?;
		Ok(self.window.request_animation_frame(cb.as_ref().unchecked_ref())?)
	}

	fn cancel_frame(&self, id: i32) {
		let _ = self.window.cancel_animation_frame(id);
	}

	fn listen_resize(&self) -> Result<(), FieldError> {
		let on_resize = self.on_resize.borrow();
		let cb = on_resize.as_ref().ok_or(FieldError::TornDown)?;
		self.window
			.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
		Ok(())
	}

	fn unlisten_resize(&self) {
		if let Some(ref cb) = *self.on_resize.borrow() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
}

type MountedField = Rc<FieldLoop<BrowserScheduler>>;

/// Size the canvas, wire the browser hooks, and start the loop.
///
/// The callbacks only hold weak handles, so dropping the returned field after
/// teardown releases both closures.
fn mount(
	canvas: HtmlCanvasElement,
	config: FieldConfig,
	limits: FieldLimits,
) -> Result<MountedField, FieldError> {
	let window = web_sys::window().ok_or(FieldError::NoWindow)?;
	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(FieldError::NoContext)?
		.dyn_into()
		.map_err(|_| FieldError::NoContext)?;

	let (w, h) = viewport_size(&window, &limits)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let scheduler = BrowserScheduler {
		window,
		animate: Rc::new(RefCell::new(None)),
		on_resize: Rc::new(RefCell::new(None)),
	};
	let (animate, on_resize) = (scheduler.animate.clone(), scheduler.on_resize.clone());
	let controller = FieldController::new(config, limits.clone());
	let field = Rc::new(FieldLoop::new(controller, scheduler));

	let weak: Weak<FieldLoop<BrowserScheduler>> = Rc::downgrade(&field);
	*on_resize.borrow_mut() = Some(Closure::new(move || {
		let (Some(field), Some(win)) = (weak.upgrade(), web_sys::window()) else {
			return;
		};
		match viewport_size(&win, &limits) {
			Ok((nw, nh)) => {
				canvas.set_width(nw as u32);
				canvas.set_height(nh as u32);
				field.on_resize(nw, nh);
			}
			Err(e) => warn!("particle field: resize skipped: {e}"),
		}
	}));

	let weak = Rc::downgrade(&field);
	*animate.borrow_mut() = Some(Closure::new(move |now: f64| {
		if let Some(field) = weak.upgrade() {
			field.on_frame(now, &mut ctx);
		}
	}));

	field.start(w, h)?;
	Ok(field)
}

fn viewport_size(window: &Window, limits: &FieldLimits) -> Result<(f64, f64), FieldError> {
	let inner_width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let inner_height = window.inner_height()?.as_f64().unwrap_or(0.0);
	let scroll_height = window
		.document()
		.and_then(|d| d.document_element())
		.map(|e| e.scroll_height() as f64)
		.unwrap_or(0.0);
	Ok(limits.canvas_size(inner_width, inner_height, scroll_height))
}

/// Animated particle background with its gradient overlays.
///
/// Place it inside a positioned container; it fills the container and sits
/// below page content. A change to `config` regenerates the particle set
/// without restarting the frame loop. When `limits` is not given, limits
/// provided through context are used, falling back to [`FieldLimits::default`].
#[component]
pub fn ParticleField(
	#[prop(into, default = Signal::stored(FieldConfig::default()))] config: Signal<FieldConfig>,
	#[prop(optional)] limits: Option<FieldLimits>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let limits = limits
		.or_else(use_context::<FieldLimits>)
		.unwrap_or_default();
	let mounted: Rc<RefCell<Option<MountedField>>> = Rc::new(RefCell::new(None));
	let mounted_effect = mounted.clone();

	Effect::new(move |_| {
		let config = config.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(field) = mounted_effect.borrow().as_ref() {
			field.reconfigure(config);
			return;
		}
		match mount(canvas.into(), config, limits.clone()) {
			Ok(field) => *mounted_effect.borrow_mut() = Some(field),
			Err(e) => warn!("particle field: not mounted: {e}"),
		}
	});

	let mounted_cleanup = SendWrapper::new(mounted);
	on_cleanup(move || {
		if let Some(field) = mounted_cleanup.borrow_mut().take() {
			field.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field absolute inset-0 z-0"
			style="background: transparent;"
			aria-hidden="true"
		/>
		<div class="absolute inset-0 z-1" aria-hidden="true">
			{OVERLAYS
				.iter()
				.map(|o| view! { <div class=o.class style=o.style /> })
				.collect_view()}
		</div>
	}
}
