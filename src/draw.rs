//! Draw orchestration: reset, fetch, assign, persist.
//!
//! The scramble is the whole point of the toolkit: wipe the previous draw
//! state (unless told to keep it), pull the full roster and room inventory,
//! run the in-memory assignment, and write the outcome back. Every
//! mutation of one scramble happens inside a single transaction, so a
//! failed run leaves the database exactly as it was.

use anyhow::{Context, Result};
use rand::thread_rng;
use roomdraw_core::{DrawOutcome, run_draw};
use roomdraw_models::{Room, User};
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashSet;
use tracing::info;

/// Options for one scramble run.
#[derive(Debug, Clone, Copy)]
pub struct ScrambleOptions {
    /// Number of distinct rooms to select.
    pub target_room_count: usize,
    /// Wipe occupants and assignments before drawing. With `false`,
    /// previously occupied rooms are skipped and assigned users sit out.
    pub reset: bool,
}

/// Runs one scramble against the database.
pub async fn scramble(db: &PgPool, options: ScrambleOptions) -> Result<DrawOutcome> {
    let mut tx = db.begin().await?;

    if options.reset {
        reset_draw_state(&mut tx).await?;
    }

    let mut users: Vec<User> = sqlx::query_as(
        "SELECT id, first_name, last_name, email, year, draw_number, preplaced, in_dorm, reslife_role, room_uuid
         FROM users
         ORDER BY id",
    )
    .fetch_all(&mut *tx)
    .await
    .context("Failed to fetch users")?;

    let mut rooms: Vec<Room> = sqlx::query_as(
        "SELECT room_uuid, dorm, dorm_name, room_id, suite_uuid, max_occupancy, current_occupancy, occupants
         FROM rooms
         ORDER BY dorm, room_id",
    )
    .fetch_all(&mut *tx)
    .await
    .context("Failed to fetch rooms")?;

    info!(
        users = users.len(),
        rooms = rooms.len(),
        target = options.target_room_count,
        "starting scramble"
    );

    let outcome = {
        let mut rng = thread_rng();
        run_draw(
            &mut users,
            &mut rooms,
            options.target_room_count,
            &mut rng,
        )?
    };

    persist_outcome(&mut tx, &users, &rooms, &outcome).await?;
    tx.commit().await?;

    Ok(outcome)
}

/// Clears every room's occupant list and every user's room reference.
async fn reset_draw_state(tx: &mut Transaction<'_, Postgres>) -> Result<()> {
    sqlx::query("UPDATE rooms SET occupants = '{}', current_occupancy = 0")
        .execute(&mut **tx)
        .await
        .context("Failed to reset room occupancy")?;
    sqlx::query("UPDATE users SET room_uuid = NULL")
        .execute(&mut **tx)
        .await
        .context("Failed to reset user assignments")?;
    Ok(())
}

/// Writes the filled rooms and placed users back.
async fn persist_outcome(
    tx: &mut Transaction<'_, Postgres>,
    users: &[User],
    rooms: &[Room],
    outcome: &DrawOutcome,
) -> Result<()> {
    let touched_rooms: HashSet<_> = outcome.assignments.values().collect();

    for room in rooms.iter().filter(|r| touched_rooms.contains(&r.room_uuid)) {
        sqlx::query("UPDATE rooms SET occupants = $1, current_occupancy = $2 WHERE room_uuid = $3")
            .bind(&room.occupants)
            .bind(room.current_occupancy)
            .bind(room.room_uuid)
            .execute(&mut **tx)
            .await
            .with_context(|| format!("Failed to update room {}", room.room_id))?;
    }

    for user in users.iter().filter(|u| outcome.assignments.contains_key(&u.id)) {
        sqlx::query("UPDATE users SET room_uuid = $1 WHERE id = $2")
            .bind(user.room_uuid)
            .bind(user.id)
            .execute(&mut **tx)
            .await
            .with_context(|| format!("Failed to update user {}", user.id))?;
    }

    Ok(())
}
