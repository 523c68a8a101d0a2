//! Room and suite domain models.

use crate::ids::{RoomId, SuiteId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single room inside a suite.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Room {
    pub room_uuid: RoomId,
    /// Dorm id this room belongs to (see [`crate::dorms`]).
    pub dorm: i32,
    pub dorm_name: String,
    /// Display number, e.g. `"101A"`.
    pub room_id: String,
    pub suite_uuid: SuiteId,
    /// Capacity. Zero-capacity rooms exist (converted lounges) and are never
    /// filled by the draw.
    pub max_occupancy: i32,
    pub current_occupancy: i32,
    /// Users currently placed in this room.
    pub occupants: Vec<UserId>,
}

impl Room {
    /// Remaining beds in this room.
    pub fn vacancies(&self) -> i32 {
        self.max_occupancy - self.current_occupancy
    }

    /// Whether anyone already lives here.
    pub fn is_occupied(&self) -> bool {
        self.current_occupancy != 0
    }
}

/// A suite grouping one or more rooms on a floor.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Suite {
    pub suite_uuid: SuiteId,
    pub dorm: i32,
    pub dorm_name: String,
    pub floor: i32,
    pub room_count: i32,
    /// Rooms belonging to this suite, kept denormalized alongside
    /// `rooms.suite_uuid` (rebuilt by the fix-suite-rooms command).
    pub rooms: Vec<RoomId>,
    /// Whether the suite participates in alternative pull.
    pub alternative_pull: bool,
}
