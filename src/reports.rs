//! Spreadsheet cross-reference report.
//!
//! Reads the draw-number and preplacement exports, joins them on email,
//! and writes every student found in both to a collision CSV for the
//! housing office to resolve before the draw.

use anyhow::{Context, Result};
use roomdraw_core::find_collisions;
use serde::Serialize;
use std::path::Path;

use crate::importer::{draw_numbers, preplacements};

/// One output row of the collision report.
#[derive(Debug, Serialize)]
struct CollisionRow {
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Number")]
    number: f64,
    #[serde(rename = "Dorm")]
    dorm: String,
    #[serde(rename = "Room")]
    room: String,
    #[serde(rename = "Preplacement Reason")]
    reason: Option<String>,
}

/// Cross-references the two exports and writes the collision CSV.
///
/// Returns the number of collisions found (the output file is written
/// either way, headers only when there are none).
pub fn check_collisions(
    numbers_path: &Path,
    preplacements_path: &Path,
    out_path: &Path,
) -> Result<usize> {
    let numbers = draw_numbers::read_records(numbers_path)?;
    let preplaced = preplacements::read_records(preplacements_path)?;

    let collisions = find_collisions(&numbers, &preplaced);

    let mut writer = csv::Writer::from_path(out_path)
        .with_context(|| format!("Failed to create {}", out_path.display()))?;
    if collisions.is_empty() {
        // serialize() only emits headers alongside a first row
        writer.write_record([
            "Email",
            "First Name",
            "Last Name",
            "Year",
            "Number",
            "Dorm",
            "Room",
            "Preplacement Reason",
        ])?;
    }
    for collision in &collisions {
        writer.serialize(CollisionRow {
            email: collision.number.email.clone(),
            first_name: collision.number.first_name.clone(),
            last_name: collision.number.last_name.clone(),
            year: collision.number.year.clone(),
            number: collision.number.number,
            dorm: collision.preplacement.dorm.clone(),
            room: collision.preplacement.room.clone(),
            reason: collision.preplacement.reason.clone(),
        })?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    Ok(collisions.len())
}
