//! Registrar draw-number spreadsheet import.
//!
//! The export carries one row per participating student: name, registrar
//! year code, optional in-dorm preference (by dorm name), draw number, and
//! email. Rows become plain (non-preplaced) user records.

use anyhow::{Context, Result, bail};
use roomdraw_models::records::DrawNumberRecord;
use roomdraw_models::{ClassYear, UserId, dorms};
use sqlx::PgPool;
use std::path::Path;

use crate::seeder::UserSeed;
use crate::seeder::users::insert_users_batch;

/// Reads the draw-number CSV.
pub fn read_records(path: &Path) -> Result<Vec<DrawNumberRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    reader
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Converts spreadsheet rows to user rows.
///
/// Unknown dorm names (and blanks) become "no in-dorm preference";
/// unknown year codes are an error, since a silently untiered student
/// would corrupt the draw.
pub fn records_to_seeds(records: &[DrawNumberRecord]) -> Result<Vec<UserSeed>> {
    records
        .iter()
        .map(|record| {
            let Some(year) = ClassYear::from_registrar_code(&record.year) else {
                bail!(
                    "Unrecognized year code {:?} for {}",
                    record.year,
                    record.email
                );
            };
            let in_dorm = record
                .in_dorm
                .as_deref()
                .and_then(dorms::dorm_id)
                .unwrap_or(0);

            Ok(UserSeed {
                first_name: record.first_name.clone(),
                last_name: record.last_name.clone(),
                email: record.email.clone(),
                year: Some(year),
                draw_number: record.number,
                preplaced: false,
                in_dorm,
                reslife_role: "none".to_string(),
            })
        })
        .collect()
}

/// Imports the spreadsheet into the users table.
pub async fn import(db: &PgPool, records: &[DrawNumberRecord]) -> Result<Vec<UserId>> {
    let seeds = records_to_seeds(records)?;
    insert_users_batch(db, &seeds).await
}
