//! Cross-referencing of spreadsheet exports.
//!
//! A student must not appear in both the draw-number export and the
//! preplacement export; anyone in both would hold a draw number while
//! already owning a room. The join is an exact inner join on the `Email`
//! column, like the reference tooling's dataframe merge, preserving the
//! draw-number sheet's row order.

use roomdraw_models::records::{DrawNumberRecord, PreplacementRecord};
use std::collections::HashMap;

/// One user present in both exports.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub number: DrawNumberRecord,
    pub preplacement: PreplacementRecord,
}

/// Inner-joins the two exports on the exact email value.
///
/// Every matching pair is emitted, so a duplicated email on either side
/// produces one collision per pair, exactly like a dataframe merge.
pub fn find_collisions(
    numbers: &[DrawNumberRecord],
    preplacements: &[PreplacementRecord],
) -> Vec<Collision> {
    let mut by_email: HashMap<&str, Vec<&PreplacementRecord>> = HashMap::new();
    for record in preplacements {
        by_email.entry(record.email.as_str()).or_default().push(record);
    }

    let mut collisions = Vec::new();
    for number in numbers {
        if let Some(matches) = by_email.get(number.email.as_str()) {
            for preplacement in matches {
                collisions.push(Collision {
                    number: number.clone(),
                    preplacement: (*preplacement).clone(),
                });
            }
        }
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(email: &str, draw: f64) -> DrawNumberRecord {
        DrawNumberRecord {
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            year: "SR".to_string(),
            in_dorm: None,
            number: draw,
            email: email.to_string(),
        }
    }

    fn preplacement(email: &str, room: &str) -> PreplacementRecord {
        PreplacementRecord {
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            email: email.to_string(),
            dorm: "East".to_string(),
            room: room.to_string(),
            reason: None,
        }
    }

    #[test]
    fn test_disjoint_sheets_have_no_collisions() {
        let numbers = vec![number("a@example.edu", 1.0), number("b@example.edu", 2.0)];
        let preplacements = vec![preplacement("c@example.edu", "101A")];
        assert!(find_collisions(&numbers, &preplacements).is_empty());
    }

    #[test]
    fn test_shared_emails_collide_in_sheet_order() {
        let numbers = vec![
            number("a@example.edu", 1.0),
            number("b@example.edu", 2.0),
            number("c@example.edu", 3.0),
        ];
        let preplacements = vec![
            preplacement("c@example.edu", "101A"),
            preplacement("a@example.edu", "210D"),
        ];

        let collisions = find_collisions(&numbers, &preplacements);
        assert_eq!(collisions.len(), 2);
        // Draw-number sheet order, not preplacement order.
        assert_eq!(collisions[0].number.email, "a@example.edu");
        assert_eq!(collisions[0].preplacement.room, "210D");
        assert_eq!(collisions[1].number.email, "c@example.edu");
    }

    #[test]
    fn test_duplicate_emails_emit_every_pair() {
        let numbers = vec![number("a@example.edu", 1.0)];
        let preplacements = vec![
            preplacement("a@example.edu", "101A"),
            preplacement("a@example.edu", "101B"),
        ];
        assert_eq!(find_collisions(&numbers, &preplacements).len(), 2);
    }

    #[test]
    fn test_email_match_is_exact() {
        // Case differences are preserved, matching the reference merge.
        let numbers = vec![number("A@example.edu", 1.0)];
        let preplacements = vec![preplacement("a@example.edu", "101A")];
        assert!(find_collisions(&numbers, &preplacements).is_empty());
    }
}
