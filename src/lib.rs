//! # Roomdraw
//!
//! Administrative toolkit for the room draw database. The binary exposes
//! one-shot subcommands (schema setup, seeding, fixture imports, the draw
//! scramble, spreadsheet cross-referencing); this library crate holds the
//! command implementations so they stay testable.

pub mod draw;
pub mod importer;
pub mod reports;
pub mod seeder;
