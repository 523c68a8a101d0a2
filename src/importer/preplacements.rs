//! Housing-office preplacement spreadsheet import.
//!
//! Preplaced students (proctors, mentors, medical placements, ...) hold
//! their rooms before the draw runs. Rows become `preplaced` user records
//! with no tier or draw number; optionally each (dorm, room) group is then
//! submitted to the running service's preplace endpoint so the service
//! applies its own occupancy bookkeeping.

use anyhow::{Context, Result, bail};
use roomdraw_config::PreplaceApiConfig;
use roomdraw_models::records::PreplacementRecord;
use roomdraw_models::{RoomId, UserId};
use sqlx::PgPool;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::info;

use crate::seeder::UserSeed;
use crate::seeder::users::insert_users_batch;

/// Reads the preplacement CSV.
pub fn read_records(path: &Path) -> Result<Vec<PreplacementRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    reader
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Converts spreadsheet rows to preplaced user rows.
pub fn records_to_seeds(records: &[PreplacementRecord]) -> Vec<UserSeed> {
    records
        .iter()
        .map(|record| UserSeed {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            year: None,
            draw_number: 0.0,
            preplaced: true,
            in_dorm: 0,
            reslife_role: record.reslife_role().to_string(),
        })
        .collect()
}

/// Imports the spreadsheet, returning the new user ids in row order.
pub async fn import(db: &PgPool, records: &[PreplacementRecord]) -> Result<Vec<UserId>> {
    let seeds = records_to_seeds(records);
    insert_users_batch(db, &seeds).await
}

/// Groups imported users by their (dorm, room) destination.
///
/// `ids` must be the ids returned by [`import`] for the same records.
pub fn group_by_room(
    records: &[PreplacementRecord],
    ids: &[UserId],
) -> BTreeMap<(String, String), Vec<UserId>> {
    let mut groups: BTreeMap<(String, String), Vec<UserId>> = BTreeMap::new();
    for (record, id) in records.iter().zip(ids) {
        groups
            .entry((record.dorm.clone(), record.room.clone()))
            .or_default()
            .push(*id);
    }
    groups
}

/// Submits each (dorm, room) group to the service's preplace endpoint.
///
/// Returns the number of groups submitted. Fails on the first group the
/// service rejects; already-submitted groups stay applied on the service
/// side, matching the one-shot nature of the script being replaced.
pub async fn submit_groups(
    db: &PgPool,
    api: &PreplaceApiConfig,
    groups: &BTreeMap<(String, String), Vec<UserId>>,
) -> Result<usize> {
    if api.admin_jwt.is_empty() {
        bail!("ROOMDRAW_ADMIN_JWT must be set to submit preplacements");
    }

    let rooms: Vec<(RoomId, String, String)> =
        sqlx::query_as("SELECT room_uuid, dorm_name, room_id FROM rooms")
            .fetch_all(db)
            .await
            .context("Failed to fetch rooms")?;
    let room_index: HashMap<(String, String), RoomId> = rooms
        .into_iter()
        .map(|(uuid, dorm_name, room_id)| ((dorm_name, room_id), uuid))
        .collect();

    let client = reqwest::Client::new();

    for ((dorm, room), occupants) in groups {
        let Some(room_uuid) = room_index.get(&(dorm.clone(), room.clone())) else {
            bail!("No room {room} in {dorm}");
        };

        let body = serde_json::json!({
            "proposedOccupants": occupants,
            "userJWT": api.admin_jwt,
        });

        let response = client
            .post(api.preplace_url(room_uuid))
            .bearer_auth(&api.admin_jwt)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Preplace request for {dorm} {room} failed"))?;

        if !response.status().is_success() {
            bail!(
                "Preplace request for {dorm} {room} rejected: {}",
                response.status()
            );
        }

        info!(dorm = %dorm, room = %room, occupants = occupants.len(), "preplaced group");
    }

    Ok(groups.len())
}
