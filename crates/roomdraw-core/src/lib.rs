//! # Roomdraw Core
//!
//! The algorithmic core of the room draw admin toolkit, kept free of any
//! I/O so it can be exercised deterministically under a seeded RNG:
//!
//! - [`assigner`]: the random room assignment run
//! - [`roster`]: class-tier arithmetic and draw-number permutations
//! - [`collisions`]: cross-referencing of registrar spreadsheet exports

pub mod assigner;
pub mod collisions;
pub mod error;
pub mod roster;

pub use assigner::{DrawOutcome, run_draw};
pub use collisions::{Collision, find_collisions};
pub use error::DrawError;
pub use roster::TierBreakdown;
