//! One-shot data importers.
//!
//! - [`layout`] - dormitory layout JSON fixtures → suites and rooms
//! - [`draw_numbers`] - registrar draw-number CSV → users
//! - [`preplacements`] - housing-office preplacement CSV → users, with
//!   optional submission to the running service's preplace endpoint

pub mod draw_numbers;
pub mod layout;
pub mod preplacements;
