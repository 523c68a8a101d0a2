//! Synthetic user generation and batch insertion.
//!
//! Generation is pure (RNG injected) so tier ratios and draw-number rules
//! are unit-testable; insertion uses multi-value INSERT statements inside
//! one transaction.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;
use rayon::prelude::*;
use roomdraw_core::roster::{TierBreakdown, shuffled_draw_numbers};
use roomdraw_models::{ClassYear, UserId};
use sqlx::{PgPool, Postgres, Transaction};

use super::models::UserSeed;

/// Generates `count` synthetic draw participants.
///
/// The roster splits into tiers by the fixed thirds ratio; each tier hands
/// out a shuffled permutation of draw numbers `1..=len`, and seniors get a
/// random in-dorm preference. Names come from the name faker, so only the
/// tier/draw/in-dorm structure is deterministic under a seeded RNG.
pub fn generate_users<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<UserSeed> {
    let tiers = TierBreakdown::thirds(count);
    let senior_draws = shuffled_draw_numbers(tiers.seniors, rng);
    let junior_draws = shuffled_draw_numbers(tiers.juniors, rng);
    let sophomore_draws = shuffled_draw_numbers(tiers.sophomores, rng);

    // Tier, draw number, and in-dorm preference per roster position.
    let slots: Vec<(ClassYear, f64, i32)> = (0..count)
        .map(|i| {
            if i < tiers.seniors {
                // seniors hold an in-dorm preference over the draw dorms 1..=9
                let in_dorm = rng.gen_range(1..=9);
                (ClassYear::Senior, f64::from(senior_draws[i]), in_dorm)
            } else if i < tiers.seniors + tiers.juniors {
                let draw = junior_draws[i - tiers.seniors];
                (ClassYear::Junior, f64::from(draw), 0)
            } else {
                let draw = sophomore_draws[i - tiers.seniors - tiers.juniors];
                (ClassYear::Sophomore, f64::from(draw), 0)
            }
        })
        .collect();

    slots
        .into_par_iter()
        .enumerate()
        .map(|(i, (year, draw_number, in_dorm))| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = format!(
                "{}.{}+{}@example.edu",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                i
            );

            UserSeed {
                first_name,
                last_name,
                email,
                year: Some(year),
                draw_number,
                preplaced: false,
                in_dorm,
                reslife_role: "none".to_string(),
            }
        })
        .collect()
}

/// Inserts users in batches, returning the generated ids in input order.
pub async fn insert_users_batch(db: &PgPool, users: &[UserSeed]) -> anyhow::Result<Vec<UserId>> {
    let mut tx = db.begin().await?;

    // 8 params per user
    const BATCH_SIZE: usize = 800;

    let mut all_ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        let ids = insert_users_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> anyhow::Result<Vec<UserId>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO users (first_name, last_name, email, year, draw_number, preplaced, in_dorm, reslife_role) VALUES ",
    );

    for (i, _) in users.iter().enumerate() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 8;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4,
            param_idx + 5,
            param_idx + 6,
            param_idx + 7,
            param_idx + 8
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(user.year)
            .bind(user.draw_number)
            .bind(user.preplaced)
            .bind(user.in_dorm)
            .bind(&user.reslife_role);
    }

    let ids: Vec<UserId> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Deletes every user row.
pub async fn clear_users(db: &PgPool) -> anyhow::Result<u64> {
    let deleted = sqlx::query("DELETE FROM users")
        .execute(db)
        .await?
        .rows_affected();
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generation_honors_tier_ratio() {
        let mut rng = StdRng::seed_from_u64(11);
        let users = generate_users(400, &mut rng);
        assert_eq!(users.len(), 400);

        let count_of = |year: ClassYear| {
            users.iter().filter(|u| u.year == Some(year)).count()
        };
        assert_eq!(count_of(ClassYear::Senior), 133);
        assert_eq!(count_of(ClassYear::Junior), 133);
        assert_eq!(count_of(ClassYear::Sophomore), 134);
    }

    #[test]
    fn test_draw_numbers_distinct_within_tier() {
        let mut rng = StdRng::seed_from_u64(11);
        let users = generate_users(90, &mut rng);

        for year in [ClassYear::Senior, ClassYear::Junior, ClassYear::Sophomore] {
            let draws: Vec<f64> = users
                .iter()
                .filter(|u| u.year == Some(year))
                .map(|u| u.draw_number)
                .collect();
            let unique: HashSet<u64> = draws.iter().map(|d| *d as u64).collect();
            assert_eq!(unique.len(), draws.len(), "duplicate draw in {year:?}");
            assert!(draws.iter().all(|&d| d >= 1.0 && d <= draws.len() as f64));
        }
    }

    #[test]
    fn test_only_seniors_get_in_dorm() {
        let mut rng = StdRng::seed_from_u64(11);
        let users = generate_users(120, &mut rng);

        for user in &users {
            match user.year {
                Some(ClassYear::Senior) => {
                    assert!((1..=9).contains(&user.in_dorm), "senior in_dorm out of range")
                }
                _ => assert_eq!(user.in_dorm, 0),
            }
            assert!(!user.preplaced);
            assert_eq!(user.reslife_role, "none");
        }
    }

    #[test]
    fn test_emails_unique() {
        let mut rng = StdRng::seed_from_u64(11);
        let users = generate_users(50, &mut rng);
        let unique: HashSet<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(unique.len(), users.len());
    }
}
