//! The dormitory catalog.
//!
//! Dorm ids are fixed small integers shared by the database, the spreadsheet
//! importers, and the layout fixtures. Id 0 means "no dorm" (used for the
//! in-dorm preference column).

/// All known dorms as `(id, name)` pairs.
pub const DORMS: [(i32, &str); 10] = [
    (1, "East"),
    (2, "North"),
    (3, "South"),
    (4, "West"),
    (5, "Atwood"),
    (6, "Sontag"),
    (7, "Case"),
    (8, "Drinkward"),
    (9, "Linde"),
    (10, "Garett House"),
];

/// Looks up a dorm id by its name (case-insensitive).
pub fn dorm_id(name: &str) -> Option<i32> {
    let name = name.trim();
    DORMS
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}

/// Looks up a dorm name by id.
pub fn dorm_name(id: i32) -> Option<&'static str> {
    DORMS.iter().find(|(i, _)| *i == id).map(|(_, n)| *n)
}
