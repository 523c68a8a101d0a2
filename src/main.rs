use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use roomdraw::draw::{self, ScrambleOptions};
use roomdraw::importer::{draw_numbers, layout, preplacements};
use roomdraw::reports;
use roomdraw::seeder::{self, SeedConfig};
use roomdraw_config::{DatabaseConfig, PreplaceApiConfig};
use roomdraw_db::schema;
use roomdraw_models::dorms;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roomdraw")]
#[command(about = "Roomdraw CLI - Administrative tools for the room draw database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create all tables (suites, suite groups, users, rooms)
    CreateTables {
        /// Drop existing tables first
        #[arg(long)]
        recreate: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Drop all tables
    DropTables {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Seed the database with synthetic draw participants
    SeedUsers {
        /// Number of users to create
        #[arg(short = 'c', long, default_value = "400")]
        count: usize,

        /// Delete existing users first
        #[arg(long)]
        clear: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Load a dorm layout from a JSON fixture (replaces the dorm's rows)
    LoadDorm {
        /// Dorm name (East, North, South, West, Atwood, ...)
        #[arg(short = 'd', long)]
        dorm: String,

        /// Path to the layout JSON file
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
    /// Rebuild every suite's room list from the rooms table
    FixSuiteRooms,
    /// Import the registrar's draw-number CSV
    ImportDrawNumbers {
        /// Path to the CSV file
        file: PathBuf,
    },
    /// Import the preplacement CSV
    ImportPreplacements {
        /// Path to the CSV file
        file: PathBuf,

        /// Submit each (dorm, room) group to the service's preplace endpoint
        #[arg(long)]
        submit: bool,
    },
    /// Randomly assign users to rooms
    Scramble {
        /// Number of distinct rooms to select
        #[arg(short = 'r', long, default_value = "200")]
        rooms: usize,

        /// Keep existing occupancies instead of wiping them first
        #[arg(long)]
        keep_existing: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Cross-reference the two spreadsheet exports for shared emails
    CheckCollisions {
        /// Draw-number CSV
        #[arg(long)]
        numbers: PathBuf,

        /// Preplacement CSV
        #[arg(long)]
        preplacements: PathBuf,

        /// Output CSV
        #[arg(short = 'o', long, default_value = "collisions.csv")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    // check-collisions is pure spreadsheet work; everything else needs the
    // database.
    if let Commands::CheckCollisions {
        numbers,
        preplacements,
        out,
    } = &cli.command
    {
        handle_check_collisions(numbers, preplacements, out);
        return;
    }

    let pool = roomdraw_db::init_db_pool(&DatabaseConfig::from_env()).await;

    match cli.command {
        Commands::CreateTables { recreate, yes } => {
            handle_create_tables(&pool, recreate, yes).await
        }
        Commands::DropTables { yes } => handle_drop_tables(&pool, yes).await,
        Commands::SeedUsers { count, clear, yes } => {
            handle_seed_users(&pool, count, clear, yes).await
        }
        Commands::LoadDorm { dorm, file } => handle_load_dorm(&pool, &dorm, &file).await,
        Commands::FixSuiteRooms => handle_fix_suite_rooms(&pool).await,
        Commands::ImportDrawNumbers { file } => handle_import_draw_numbers(&pool, &file).await,
        Commands::ImportPreplacements { file, submit } => {
            handle_import_preplacements(&pool, &file, submit).await
        }
        Commands::Scramble {
            rooms,
            keep_existing,
            yes,
        } => handle_scramble(&pool, rooms, keep_existing, yes).await,
        Commands::CheckCollisions { .. } => unreachable!("handled above"),
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn,reqwest=warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();
}

/// Prompts for confirmation unless `--yes` was passed. Returns false when
/// the operator backs out.
fn confirmed(prompt: &str, yes: bool) -> bool {
    if yes {
        return true;
    }
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .expect("Failed to read confirmation");
    if !confirmed {
        println!("Aborted.");
    }
    confirmed
}

async fn handle_create_tables(pool: &sqlx::PgPool, recreate: bool, yes: bool) {
    if recreate && !confirmed("This will DROP all existing tables first. Continue?", yes) {
        return;
    }

    let result = if recreate {
        schema::recreate_all(pool).await
    } else {
        schema::create_all(pool).await
    };

    match result {
        Ok(()) => println!("✅ Tables created"),
        Err(e) => {
            eprintln!("\n❌ Error creating tables: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_drop_tables(pool: &sqlx::PgPool, yes: bool) {
    if !confirmed("This will DROP all tables and their data. Continue?", yes) {
        return;
    }

    match schema::drop_all(pool).await {
        Ok(()) => println!("✅ Tables dropped"),
        Err(e) => {
            eprintln!("\n❌ Error dropping tables: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed_users(pool: &sqlx::PgPool, count: usize, clear: bool, yes: bool) {
    if clear {
        if !confirmed("This will DELETE every existing user. Continue?", yes) {
            return;
        }
        if let Err(e) = seeder::clear_all_users(pool).await {
            eprintln!("\n❌ Error clearing users: {:#}", e);
            std::process::exit(1);
        }
    }

    match seeder::seed_users(pool, SeedConfig::new(count)).await {
        Ok(inserted) => println!("✅ Seeded {} users", inserted),
        Err(e) => {
            eprintln!("\n❌ Error seeding users: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_load_dorm(pool: &sqlx::PgPool, dorm: &str, file: &Path) {
    let Some(dorm_id) = dorms::dorm_id(dorm) else {
        eprintln!("❌ Unknown dorm {:?}. Known dorms:", dorm);
        for (_, name) in dorms::DORMS {
            eprintln!("   - {name}");
        }
        std::process::exit(1);
    };
    // canonical capitalization, not whatever the operator typed
    let dorm_name = dorms::dorm_name(dorm_id).unwrap_or(dorm);

    let result = match layout::read_layout(file) {
        Ok(parsed) => layout::load_dorm(pool, dorm_id, dorm_name, &parsed).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => println!(
            "✅ Loaded {}: {} floors, {} suites, {} rooms",
            dorm_name, summary.floors, summary.suites, summary.rooms
        ),
        Err(e) => {
            eprintln!("\n❌ Error loading dorm layout: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_fix_suite_rooms(pool: &sqlx::PgPool) {
    match layout::fix_suite_rooms(pool).await {
        Ok(suites) => println!("✅ Rebuilt room lists for {} suites", suites),
        Err(e) => {
            eprintln!("\n❌ Error fixing suite rooms: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_import_draw_numbers(pool: &sqlx::PgPool, file: &Path) {
    let result = match draw_numbers::read_records(file) {
        Ok(records) => draw_numbers::import(pool, &records).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(ids) => println!("✅ Imported {} users with draw numbers", ids.len()),
        Err(e) => {
            eprintln!("\n❌ Error importing draw numbers: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_import_preplacements(pool: &sqlx::PgPool, file: &Path, submit: bool) {
    let records = match preplacements::read_records(file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("\n❌ Error reading preplacements: {:#}", e);
            std::process::exit(1);
        }
    };

    let ids = match preplacements::import(pool, &records).await {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("\n❌ Error importing preplacements: {:#}", e);
            std::process::exit(1);
        }
    };
    println!("✅ Imported {} preplaced users", ids.len());

    if submit {
        let api = PreplaceApiConfig::from_env();
        let groups = preplacements::group_by_room(&records, &ids);
        match preplacements::submit_groups(pool, &api, &groups).await {
            Ok(submitted) => println!("✅ Submitted {} room groups to {}", submitted, api.base_url),
            Err(e) => {
                eprintln!("\n❌ Error submitting preplacements: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn handle_scramble(pool: &sqlx::PgPool, rooms: usize, keep_existing: bool, yes: bool) {
    if !keep_existing
        && !confirmed(
            "This will CLEAR all current assignments before drawing. Continue?",
            yes,
        )
    {
        return;
    }

    let options = ScrambleOptions {
        target_room_count: rooms,
        reset: !keep_existing,
    };

    match draw::scramble(pool, options).await {
        Ok(outcome) => {
            println!("🎲 Scramble complete!");
            println!("   Roster: {}", outcome.tiers);
            println!(
                "   Filled {} rooms ({} selected rooms skipped as occupied)",
                outcome.filled_rooms, outcome.skipped_occupied
            );
            println!("   Placed {} users", outcome.placed_users());
        }
        Err(e) => {
            eprintln!("\n❌ Scramble failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn handle_check_collisions(numbers: &Path, preplacements: &Path, out: &Path) {
    match reports::check_collisions(numbers, preplacements, out) {
        Ok(0) => println!("✅ No collisions found (report written to {})", out.display()),
        Ok(found) => println!("⚠️  Found {} collisions → {}", found, out.display()),
        Err(e) => {
            eprintln!("\n❌ Error checking collisions: {:#}", e);
            std::process::exit(1);
        }
    }
}
