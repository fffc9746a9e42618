//! Animated particle background.
//!
//! Draws a field of slowly drifting, semi-transparent dots on a canvas behind
//! page content, with faint lines between dots that come close together:
//! - Layout is seeded from the page identifier, so each page keeps its own
//!   stable pattern across reloads
//! - Particle count scales with viewport area and the density tier
//! - Opacity band and line geometry come from the style tier
//! - Frames are throttled (30 fps by default) and the loop stops on unmount
//!
//! # Example
//!
//! ```ignore
//! use opudoc_landing::{Density, FieldConfig, ParticleField, Style};
//!
//! view! {
//!     <div class="absolute inset-0 z-0">
//!         <ParticleField config=FieldConfig::new("home", Density::Medium, Style::Subtle) />
//!     </div>
//! }
//! ```

mod component;
pub mod config;
pub mod connections;
pub mod controller;
pub mod lifecycle;
pub mod limiter;
pub mod particles;
pub mod render;
pub mod seed;
pub mod theme;

pub use component::ParticleField;
pub use config::{Density, FieldConfig, FieldLimits, Style};
pub use lifecycle::FieldError;
