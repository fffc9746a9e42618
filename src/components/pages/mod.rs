//! Site pages. Each page mounts its own particle background.

mod chrome;
mod confirmed;
mod data_security;
mod hero;

pub use confirmed::{ConfirmationStatus, ConfirmedPage};
pub use data_security::DataSecurityPage;
pub use hero::HeroPage;
