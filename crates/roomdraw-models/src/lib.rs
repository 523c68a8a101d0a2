//! # Roomdraw Models
//!
//! Domain types shared by the room draw admin toolkit:
//!
//! - [`ids`]: strongly-typed ID newtypes for rooms, suites, and users
//! - [`users`]: user entities and class tiers
//! - [`rooms`]: room and suite entities
//! - [`dorms`]: the dormitory catalog (id ↔ name mapping)
//! - [`layout`]: JSON fixture shapes for dormitory layouts
//! - [`records`]: spreadsheet (CSV) row shapes for registrar exports

pub mod dorms;
pub mod ids;
pub mod layout;
pub mod records;
pub mod rooms;
pub mod users;

// Re-export commonly used types at crate root
pub use ids::{RoomId, SuiteId, UserId};
pub use rooms::{Room, Suite};
pub use users::{ClassYear, User};
