//! Database seeding module for populating test data.
//!
//! Creates a synthetic draw roster: fake names, three class tiers split by
//! the fixed thirds ratio, a shuffled draw-number permutation per tier, and
//! a random in-dorm preference for seniors.
//!
//! # Module Structure
//!
//! - [`users`] - User generation and batch insertion
//! - [`models`] - Seed row and configuration structures
//!
//! # Performance
//!
//! - Parallel name generation using Rayon
//! - Batch inserts with multi-value INSERT statements

pub mod models;
pub mod users;

pub use models::{SeedConfig, UserSeed};

use rand::thread_rng;
use roomdraw_core::TierBreakdown;
use sqlx::PgPool;
use std::time::Instant;

/// Seeds the database with a synthetic draw roster.
pub async fn seed_users(db: &PgPool, config: SeedConfig) -> anyhow::Result<usize> {
    let start_time = Instant::now();
    let tiers = TierBreakdown::thirds(config.count);
    println!("🌱 Seeding {} users ({tiers})...", config.count);

    let seeds = {
        let mut rng = thread_rng();
        users::generate_users(config.count, &mut rng)
    };
    let ids = users::insert_users_batch(db, &seeds).await?;

    println!(
        "   ✓ Inserted {} users in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids.len())
}

/// Deletes every user row.
pub async fn clear_all_users(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing users...");

    let deleted = users::clear_users(db).await?;

    println!(
        "   ✓ Deleted {} users in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}
