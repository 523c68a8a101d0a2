//! The random room assignment run.
//!
//! Given the user roster and the room inventory, fill a target number of
//! randomly chosen rooms to capacity from the unassigned user pool. All
//! selection is uniform sampling without replacement over shrinking
//! candidate pools, so a run always terminates: a pool that cannot satisfy
//! a room is detected up front and reported as [`DrawError::ExhaustedUserPool`]
//! instead of being retried.
//!
//! Invariants upheld by [`run_draw`]:
//!
//! - a room's occupant count never exceeds its capacity
//! - a user is placed in at most one room
//! - rooms that already have occupants are skipped entirely
//!
//! Tier and draw number are never consulted when choosing occupants; the
//! tier breakdown in the outcome exists for reporting only.

use crate::error::DrawError;
use crate::roster::TierBreakdown;
use rand::Rng;
use roomdraw_models::{Room, RoomId, User, UserId};
use std::collections::HashMap;
use tracing::debug;

/// Result of one draw run.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    /// Every placement made by the run.
    pub assignments: HashMap<UserId, RoomId>,
    /// Rooms that received occupants.
    pub filled_rooms: usize,
    /// Selected rooms skipped because they were already occupied.
    pub skipped_occupied: usize,
    /// Tier split of the candidate roster, for the run report.
    pub tiers: TierBreakdown,
}

impl DrawOutcome {
    /// Number of users placed by the run.
    pub fn placed_users(&self) -> usize {
        self.assignments.len()
    }
}

/// Runs one draw: picks `target_room_count` distinct rooms at random and
/// fills each empty one to capacity from the unassigned user pool.
///
/// Users and rooms are mutated in place (`room_uuid`, `occupants`,
/// `current_occupancy`); persisting the result is the caller's concern.
/// On error nothing needs rolling back beyond discarding the slices: an
/// [`DrawError::InsufficientRooms`] is raised before any mutation, and an
/// [`DrawError::ExhaustedUserPool`] leaves the failing room untouched.
pub fn run_draw<R: Rng + ?Sized>(
    users: &mut [User],
    rooms: &mut [Room],
    target_room_count: usize,
    rng: &mut R,
) -> Result<DrawOutcome, DrawError> {
    if target_room_count > rooms.len() {
        return Err(DrawError::InsufficientRooms {
            requested: target_room_count,
            available: rooms.len(),
        });
    }

    let tiers = TierBreakdown::thirds(users.len());

    // Candidate pool: indices of users not yet placed. Picks are removed by
    // swap-removal, keeping every remaining candidate equally likely.
    let mut pool: Vec<usize> = (0..users.len())
        .filter(|&i| users[i].is_unassigned())
        .collect();

    let selected = sample_indices(rooms.len(), target_room_count, rng);

    let mut assignments = HashMap::new();
    let mut filled_rooms = 0;
    let mut skipped_occupied = 0;

    for room_idx in selected {
        let room = &mut rooms[room_idx];

        // Only empty rooms are filled; no partial top-up.
        if room.is_occupied() {
            debug!(room = %room.room_id, occupancy = room.current_occupancy, "skipping occupied room");
            skipped_occupied += 1;
            continue;
        }

        let need = room.vacancies().max(0) as usize;
        if need == 0 {
            continue;
        }
        if need > pool.len() {
            return Err(DrawError::ExhaustedUserPool {
                room: room.room_id.clone(),
                needed: need,
                remaining: pool.len(),
            });
        }

        for _ in 0..need {
            let pick = rng.gen_range(0..pool.len());
            let user = &mut users[pool.swap_remove(pick)];
            user.room_uuid = Some(room.room_uuid);
            room.occupants.push(user.id);
            assignments.insert(user.id, room.room_uuid);
        }
        room.current_occupancy = room.occupants.len() as i32;
        filled_rooms += 1;

        debug!(
            room = %room.room_id,
            occupancy = room.current_occupancy,
            remaining_pool = pool.len(),
            "filled room"
        );
    }

    Ok(DrawOutcome {
        assignments,
        filled_rooms,
        skipped_occupied,
        tiers,
    })
}

/// Picks `amount` distinct indices out of `0..length`, uniformly at random,
/// in selection order (partial Fisher-Yates).
fn sample_indices<R: Rng + ?Sized>(length: usize, amount: usize, rng: &mut R) -> Vec<usize> {
    debug_assert!(amount <= length);
    let mut indices: Vec<usize> = (0..length).collect();
    for i in 0..amount {
        let j = rng.gen_range(i..length);
        indices.swap(i, j);
    }
    indices.truncate(amount);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use roomdraw_models::{ClassYear, SuiteId};
    use std::collections::HashSet;

    fn user(id: i32) -> User {
        User {
            id: UserId(id),
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email: format!("user{id}@example.edu"),
            year: Some(ClassYear::Junior),
            draw_number: f64::from(id),
            preplaced: false,
            in_dorm: 0,
            reslife_role: "none".to_string(),
            room_uuid: None,
        }
    }

    fn room(number: &str, capacity: i32, occupancy: i32) -> Room {
        Room {
            room_uuid: RoomId::new(),
            dorm: 1,
            dorm_name: "East".to_string(),
            room_id: number.to_string(),
            suite_uuid: SuiteId::new(),
            max_occupancy: capacity,
            current_occupancy: occupancy,
            occupants: (0..occupancy).map(|i| UserId(1000 + i)).collect(),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x0dd5)
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut users: Vec<User> = (1..=30).map(user).collect();
        let mut rooms = vec![
            room("101", 1, 0),
            room("102", 2, 0),
            room("103", 3, 0),
            room("104", 4, 0),
        ];
        run_draw(&mut users, &mut rooms, 4, &mut rng()).unwrap();

        for room in &rooms {
            assert!(room.current_occupancy <= room.max_occupancy);
            assert_eq!(room.occupants.len() as i32, room.current_occupancy);
        }
    }

    #[test]
    fn test_no_user_assigned_twice() {
        let mut users: Vec<User> = (1..=40).map(user).collect();
        let mut rooms: Vec<Room> = (0..10).map(|i| room(&format!("{}", 100 + i), 3, 0)).collect();
        let outcome = run_draw(&mut users, &mut rooms, 10, &mut rng()).unwrap();

        let mut seen = HashSet::new();
        for room in &rooms {
            for occupant in &room.occupants {
                assert!(seen.insert(*occupant), "user {occupant} placed twice");
            }
        }
        assert_eq!(outcome.placed_users(), seen.len());
    }

    #[test]
    fn test_exact_fill_counts() {
        // 10 users, two empty double rooms: exactly 4 placed, 6 left over.
        let mut users: Vec<User> = (1..=10).map(user).collect();
        let mut rooms = vec![room("101", 2, 0), room("102", 2, 0)];
        let outcome = run_draw(&mut users, &mut rooms, 2, &mut rng()).unwrap();

        assert_eq!(outcome.placed_users(), 4);
        assert_eq!(outcome.filled_rooms, 2);
        assert_eq!(users.iter().filter(|u| u.is_unassigned()).count(), 6);
    }

    #[test]
    fn test_occupied_rooms_untouched() {
        let mut users: Vec<User> = (1..=10).map(user).collect();
        let mut rooms = vec![room("101", 2, 1), room("102", 2, 2)];
        let before = rooms.clone();
        let outcome = run_draw(&mut users, &mut rooms, 2, &mut rng()).unwrap();

        assert_eq!(outcome.placed_users(), 0);
        assert_eq!(outcome.filled_rooms, 0);
        assert_eq!(outcome.skipped_occupied, 2);
        assert_eq!(rooms, before);
        assert!(users.iter().all(User::is_unassigned));
    }

    #[test]
    fn test_insufficient_rooms_mutates_nothing() {
        let mut users: Vec<User> = (1..=10).map(user).collect();
        let mut rooms = vec![room("101", 2, 0), room("102", 2, 0)];
        let before = rooms.clone();
        let err = run_draw(&mut users, &mut rooms, 3, &mut rng()).unwrap_err();

        assert_eq!(
            err,
            DrawError::InsufficientRooms {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(rooms, before);
        assert!(users.iter().all(User::is_unassigned));
    }

    #[test]
    fn test_exhausted_pool_leaves_room_unfilled() {
        let mut users = vec![user(1)];
        let mut rooms = vec![room("101", 2, 0)];
        let err = run_draw(&mut users, &mut rooms, 1, &mut rng()).unwrap_err();

        assert_eq!(
            err,
            DrawError::ExhaustedUserPool {
                room: "101".to_string(),
                needed: 2,
                remaining: 1
            }
        );
        assert_eq!(rooms[0].current_occupancy, 0);
        assert!(rooms[0].occupants.is_empty());
        assert!(users[0].is_unassigned());
    }

    #[test]
    fn test_zero_capacity_room_is_noop() {
        let mut users: Vec<User> = (1..=5).map(user).collect();
        let mut rooms = vec![room("lounge", 0, 0), room("102", 2, 0)];
        let outcome = run_draw(&mut users, &mut rooms, 2, &mut rng()).unwrap();

        assert_eq!(outcome.placed_users(), 2);
        assert!(rooms.iter().find(|r| r.room_id == "lounge").unwrap().occupants.is_empty());
    }

    #[test]
    fn test_already_assigned_users_not_in_pool() {
        let mut users: Vec<User> = (1..=4).map(user).collect();
        let pinned = RoomId::new();
        users[0].room_uuid = Some(pinned);
        users[1].room_uuid = Some(pinned);

        let mut rooms = vec![room("101", 2, 0)];
        let outcome = run_draw(&mut users, &mut rooms, 1, &mut rng()).unwrap();

        assert_eq!(outcome.placed_users(), 2);
        assert!(!rooms[0].occupants.contains(&UserId(1)));
        assert!(!rooms[0].occupants.contains(&UserId(2)));
        assert_eq!(users[0].room_uuid, Some(pinned));
    }

    #[test]
    fn test_assignment_map_matches_room_state() {
        let mut users: Vec<User> = (1..=20).map(user).collect();
        let mut rooms: Vec<Room> = (0..6).map(|i| room(&format!("{}", 200 + i), 2, 0)).collect();
        let outcome = run_draw(&mut users, &mut rooms, 4, &mut rng()).unwrap();

        for (user_id, room_uuid) in &outcome.assignments {
            let room = rooms.iter().find(|r| r.room_uuid == *room_uuid).unwrap();
            assert!(room.occupants.contains(user_id));
            let user = users.iter().find(|u| u.id == *user_id).unwrap();
            assert_eq!(user.room_uuid, Some(*room_uuid));
        }
    }

    #[test]
    fn test_tier_breakdown_reported() {
        let mut users: Vec<User> = (1..=9).map(user).collect();
        let mut rooms = vec![room("101", 2, 0)];
        let outcome = run_draw(&mut users, &mut rooms, 1, &mut rng()).unwrap();
        assert_eq!(outcome.tiers, TierBreakdown::thirds(9));
    }

    #[test]
    fn test_sample_indices_distinct_and_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let picks = sample_indices(10, 7, &mut rng);
            assert_eq!(picks.len(), 7);
            let unique: HashSet<_> = picks.iter().collect();
            assert_eq!(unique.len(), 7);
            assert!(picks.iter().all(|&i| i < 10));
        }
    }
}
