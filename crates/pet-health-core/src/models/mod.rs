//! Domain models for the pet-health system.

mod config;
mod history;
mod records;
mod schedule;
mod species;

pub use config::*;
pub use history::*;
pub use records::*;
pub use schedule::*;
pub use species::*;
