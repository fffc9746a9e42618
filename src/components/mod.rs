//! UI components for the landing site.

pub mod pages;
pub mod particle_field;
pub mod signup;
pub mod spotlight;
