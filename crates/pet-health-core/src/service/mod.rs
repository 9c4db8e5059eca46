//! Planning service over already-fetched pet data.
//!
//! Turns stored records into generator history, wraps generation per pet
//! and in batches, and derives views (upcoming, overdue, stats) from the
//! result. Persisting anything stays with the caller.

mod history;
mod plan;
mod stats;

pub use history::*;
pub use plan::*;
pub use stats::*;
