//! End-to-end checks of the draw core through its public API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use roomdraw_core::{DrawError, run_draw};
use roomdraw_models::{ClassYear, Room, RoomId, SuiteId, User, UserId};
use std::collections::HashSet;

fn roster(count: i32) -> Vec<User> {
    (1..=count)
        .map(|id| User {
            id: UserId(id),
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email: format!("user{id}@example.edu"),
            year: Some(ClassYear::Sophomore),
            draw_number: f64::from(id),
            preplaced: false,
            in_dorm: 0,
            reslife_role: "none".to_string(),
            room_uuid: None,
        })
        .collect()
}

fn inventory(capacities: &[i32]) -> Vec<Room> {
    let suite = SuiteId::new();
    capacities
        .iter()
        .enumerate()
        .map(|(i, &capacity)| Room {
            room_uuid: RoomId::new(),
            dorm: 1,
            dorm_name: "East".to_string(),
            room_id: format!("{}", 101 + i),
            suite_uuid: suite,
            max_occupancy: capacity,
            current_occupancy: 0,
            occupants: Vec::new(),
        })
        .collect()
}

#[test]
fn test_full_draw_respects_all_invariants() {
    let mut users = roster(60);
    let mut rooms = inventory(&[1, 2, 2, 3, 4, 0, 2, 1, 3, 2]);
    let mut rng = StdRng::seed_from_u64(99);

    let outcome = run_draw(&mut users, &mut rooms, 10, &mut rng).expect("draw should succeed");

    // capacity respected, occupancy consistent
    for room in &rooms {
        assert!(room.current_occupancy <= room.max_occupancy);
        assert_eq!(room.occupants.len() as i32, room.current_occupancy);
    }

    // nobody placed twice, and the map mirrors room state
    let mut placed = HashSet::new();
    for room in &rooms {
        for occupant in &room.occupants {
            assert!(placed.insert(*occupant));
            assert_eq!(outcome.assignments.get(occupant), Some(&room.room_uuid));
        }
    }
    assert_eq!(placed.len(), outcome.placed_users());

    // user records agree with the assignment map
    for user in &users {
        match outcome.assignments.get(&user.id) {
            Some(room_uuid) => assert_eq!(user.room_uuid, Some(*room_uuid)),
            None => assert_eq!(user.room_uuid, None),
        }
    }

    // total beds = 20, 60 users available: every non-zero room fills
    assert_eq!(outcome.placed_users(), 20);
    assert_eq!(outcome.filled_rooms, 9);
}

#[test]
fn test_draw_errors_are_reportable() {
    let mut users = roster(1);
    let mut rooms = inventory(&[3]);
    let mut rng = StdRng::seed_from_u64(7);

    let err = run_draw(&mut users, &mut rooms, 1, &mut rng).unwrap_err();
    assert!(matches!(err, DrawError::ExhaustedUserPool { .. }));
    assert!(err.to_string().contains("needs 3"));

    let err = run_draw(&mut users, &mut rooms, 5, &mut rng).unwrap_err();
    assert_eq!(
        err,
        DrawError::InsufficientRooms {
            requested: 5,
            available: 1
        }
    );
}

#[test]
fn test_successive_draws_consume_the_pool() {
    // A second draw over the same roster only sees unassigned users.
    let mut users = roster(6);
    let mut rooms = inventory(&[2, 2, 2]);
    let mut rng = StdRng::seed_from_u64(3);

    run_draw(&mut users, &mut rooms, 2, &mut rng).expect("first draw");
    let assigned_after_first = users.iter().filter(|u| !u.is_unassigned()).count();
    assert_eq!(assigned_after_first, 4);

    // The two filled rooms are skipped; only the remaining empty room can fill.
    let outcome = run_draw(&mut users, &mut rooms, 3, &mut rng).expect("second draw");
    assert_eq!(outcome.skipped_occupied, 2);
    assert_eq!(outcome.placed_users(), 2);
    assert!(users.iter().all(|u| !u.is_unassigned()));
}
