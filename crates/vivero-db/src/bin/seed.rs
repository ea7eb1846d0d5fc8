//! # Seed Data Generator
//!
//! Populates a database with nursery stock for development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products (default)
//! cargo run -p vivero-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p vivero-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p vivero-db --bin seed -- --db ./data/viverolaplace.db
//! ```
//!
//! ## Generated Products
//! Names are `{plant} {variety}` pairs, all valid under the product name
//! rule, e.g. "Rosa Roja", "Helecho Serrucho", "Cactus Mini". Quantities run
//! 0..=40 and prices 80..=2480 in steps of 40.

use std::env;
use vivero_core::ProductDraft;
use vivero_db::{Database, DbConfig};

/// Plants carried by the nursery.
const PLANTS: &[&str] = &[
    "Rosa",
    "Helecho",
    "Cactus",
    "Jazmin",
    "Lavanda",
    "Potus",
    "Ficus",
    "Orquidea",
    "Malvon",
    "Hortensia",
    "Aloe",
    "Suculenta",
];

/// Varieties combined with every plant.
const VARIETIES: &[&str] = &["Roja", "Blanca", "Mini", "Grande", "Colgante"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./viverolaplace_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Vivero Stock Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./viverolaplace_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Vivero Stock Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let draft = generate_product(seed);

        if let Err(e) = db.products().insert(&draft).await {
            eprintln!("Failed to insert {}: {}", draft.name, e);
            continue;
        }
        generated += 1;
    }

    println!("✓ Generated {} products in {:?}", generated, start.elapsed());
    println!("  Rows in productos: {}", db.products().count().await?);

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates the product for one seed index.
///
/// Names cycle through every plant/variety pair before repeating.
fn generate_product(seed: usize) -> ProductDraft {
    let plant = PLANTS[seed % PLANTS.len()];
    let variety = VARIETIES[(seed / PLANTS.len()) % VARIETIES.len()];

    let quantity = (seed * 7 % 41) as i64;
    let price = 80 + (seed * 13 % 61) * 40;

    ProductDraft::new(format!("{} {}", plant, variety), quantity, price.to_string())
}
