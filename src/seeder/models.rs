//! Data structures for seeding and user insertion.

use roomdraw_models::ClassYear;

/// One user row to insert.
///
/// Shared by the synthetic seeder and the spreadsheet importers, which
/// differ only in how they fill these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub year: Option<ClassYear>,
    pub draw_number: f64,
    pub preplaced: bool,
    pub in_dorm: i32,
    pub reslife_role: String,
}

/// Configuration for synthetic user seeding.
#[derive(Clone)]
pub struct SeedConfig {
    /// Total number of users to create, split into tiers by the fixed
    /// thirds ratio.
    pub count: usize,
}

impl SeedConfig {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { count: 400 }
    }
}
