//! Dormitory layout import.
//!
//! Loads a dorm's floors/suites/rooms from a JSON fixture, replacing any
//! prior rows for that dorm, in one transaction. A floor's position in the
//! fixture array is its floor number. Suites keep a denormalized array of
//! their room UUIDs; [`fix_suite_rooms`] rebuilds those arrays from the
//! rooms table when they drift (hand edits, partial loads).

use anyhow::{Context, Result};
use roomdraw_models::layout::DormLayout;
use roomdraw_models::{RoomId, SuiteId};
use sqlx::PgPool;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// What a layout load inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub floors: usize,
    pub suites: usize,
    pub rooms: usize,
}

/// Reads and parses a layout fixture file.
pub fn read_layout(path: &Path) -> Result<DormLayout> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse layout file {}", path.display()))
}

/// Replaces one dorm's suites and rooms with the fixture's contents.
pub async fn load_dorm(
    db: &PgPool,
    dorm: i32,
    dorm_name: &str,
    layout: &DormLayout,
) -> Result<LoadSummary> {
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM rooms WHERE dorm = $1")
        .bind(dorm)
        .execute(&mut *tx)
        .await
        .context("Failed to clear existing rooms")?;
    sqlx::query("DELETE FROM suites WHERE dorm = $1")
        .bind(dorm)
        .execute(&mut *tx)
        .await
        .context("Failed to clear existing suites")?;

    let mut suites = 0;
    let mut rooms = 0;

    for (floor, floor_layout) in layout.floors.iter().enumerate() {
        for suite in &floor_layout.suites {
            let suite_uuid: SuiteId = sqlx::query_scalar(
                "INSERT INTO suites (dorm, dorm_name, room_count, floor, alternative_pull)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING suite_uuid",
            )
            .bind(dorm)
            .bind(dorm_name)
            .bind(suite.rooms.len() as i32)
            .bind(floor as i32)
            .bind(suite.alternative_pull)
            .fetch_one(&mut *tx)
            .await
            .context("Failed to insert suite")?;

            let mut room_uuids = Vec::with_capacity(suite.rooms.len());
            for room in &suite.rooms {
                let room_uuid: RoomId = sqlx::query_scalar(
                    "INSERT INTO rooms (dorm, dorm_name, room_id, suite_uuid, max_occupancy, current_occupancy)
                     VALUES ($1, $2, $3, $4, $5, 0)
                     RETURNING room_uuid",
                )
                .bind(dorm)
                .bind(dorm_name)
                .bind(&room.room_number)
                .bind(suite_uuid)
                .bind(room.capacity)
                .fetch_one(&mut *tx)
                .await
                .with_context(|| format!("Failed to insert room {}", room.room_number))?;
                room_uuids.push(room_uuid);
            }

            sqlx::query("UPDATE suites SET rooms = $1 WHERE suite_uuid = $2")
                .bind(&room_uuids)
                .bind(suite_uuid)
                .execute(&mut *tx)
                .await
                .context("Failed to update suite room list")?;

            suites += 1;
            rooms += room_uuids.len();
        }
    }

    tx.commit().await?;

    info!(dorm = dorm_name, suites, rooms, "loaded dorm layout");
    Ok(LoadSummary {
        floors: layout.floors.len(),
        suites,
        rooms,
    })
}

/// Rebuilds every suite's room-UUID array and room count from the rooms
/// table.
pub async fn fix_suite_rooms(db: &PgPool) -> Result<usize> {
    let rows: Vec<(RoomId, SuiteId)> = sqlx::query_as("SELECT room_uuid, suite_uuid FROM rooms")
        .fetch_all(db)
        .await
        .context("Failed to fetch rooms")?;

    let mut by_suite: HashMap<SuiteId, Vec<RoomId>> = HashMap::new();
    for (room_uuid, suite_uuid) in rows {
        by_suite.entry(suite_uuid).or_default().push(room_uuid);
    }

    let mut tx = db.begin().await?;
    for (suite_uuid, room_uuids) in &by_suite {
        sqlx::query("UPDATE suites SET rooms = $1, room_count = $2 WHERE suite_uuid = $3")
            .bind(room_uuids)
            .bind(room_uuids.len() as i32)
            .bind(suite_uuid)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to update suite {suite_uuid}"))?;
    }
    tx.commit().await?;

    Ok(by_suite.len())
}
