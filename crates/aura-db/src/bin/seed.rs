//! # Seed Data Generator
//!
//! Populates the database with the demo catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./aura_dev.db
//! cargo run -p aura-db --bin seed
//!
//! # Specify database path
//! cargo run -p aura-db --bin seed -- --db ./data/aura.db
//! ```
//!
//! ## Generated Products
//! Six products across two categories (t-shirts, hoodies), each with a
//! gallery, hex color options, size options and merchandising flags. The
//! list is validated as a `Catalog` before anything is written.

use std::env;

use aura_core::{Catalog, Product, ProductFlags};
use aura_db::{Database, DbConfig};

/// (id, name, price_cents, category, image key, colors, sizes, new, featured, bestseller, description)
type SeedRow = (
    &'static str,
    &'static str,
    i64,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    bool,
    bool,
    bool,
    &'static str,
);

const DEMO_PRODUCTS: &[SeedRow] = &[
    (
        "1",
        "Classic Black Tee",
        4999,
        "t-shirts",
        "tshirt1",
        &["#000000", "#FFFFFF", "#808080"],
        &["S", "M", "L", "XL", "XXL"],
        false,
        true,
        true,
        "Our signature premium cotton t-shirt in a timeless black design. Features a relaxed fit and durable construction that gets better with every wash.",
    ),
    (
        "2",
        "Minimalist Logo Hoodie",
        7999,
        "hoodies",
        "hoodie1",
        &["#000000", "#D3D3D3", "#36454F"],
        &["S", "M", "L", "XL", "XXL"],
        false,
        true,
        true,
        "Crafted from premium heavyweight cotton, this hoodie offers exceptional warmth and comfort with a subtle embroidered logo on the chest.",
    ),
    (
        "3",
        "Oversized Graphic Tee",
        5499,
        "t-shirts",
        "tshirt2",
        &["#FFFFFF", "#000000", "#8B4513"],
        &["S", "M", "L", "XL"],
        true,
        false,
        true,
        "Our oversized fit tee featuring original artwork. Made from organic cotton with a silky soft feel and relaxed drape.",
    ),
    (
        "4",
        "Premium Zip Hoodie",
        8999,
        "hoodies",
        "hoodie2",
        &["#000000", "#808080", "#F5F5DC"],
        &["S", "M", "L", "XL", "XXL"],
        false,
        false,
        true,
        "A modern take on the classic zip-up hoodie with premium details. Features a heavyweight fabric blend for ultimate comfort and durability.",
    ),
    (
        "5",
        "Limited Edition Tee",
        5999,
        "t-shirts",
        "tshirt3",
        &["#000000", "#FFFFFF"],
        &["S", "M", "L", "XL"],
        true,
        true,
        true,
        "Our limited edition collection tee featuring exclusive artwork and premium quality construction. Once it is gone, it is gone forever.",
    ),
    (
        "6",
        "Luxe Pullover Hoodie",
        8499,
        "hoodies",
        "hoodie3",
        &["#36454F", "#000000", "#D3D3D3"],
        &["S", "M", "L", "XL", "XXL"],
        false,
        false,
        true,
        "Our signature pullover hoodie crafted from premium French terry fabric for exceptional softness and warmth without the weight.",
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./aura_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if let Some(path) = args.get(i + 1) {
                    db_path = path.clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Aura Storefront Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./aura_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Aura Storefront Seed Data Generator");
    println!("=====================================");
    println!("Database: {}", db_path);
    println!();

    let catalog = Catalog::new(DEMO_PRODUCTS.iter().map(demo_product).collect())?;

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    for product in catalog.products() {
        db.products().insert(product).await?;
        println!("  + {} ({})", product.name, product.price());
    }

    println!();
    println!("✓ Seeded {} products in {} categories", catalog.len(), catalog.categories().len());

    Ok(())
}

fn demo_product(row: &SeedRow) -> Product {
    let (id, name, price_cents, category, image_key, colors, sizes, is_new, featured, bestseller, description) =
        *row;

    let main = format!("/images/products/{}/main.jpg", image_key);

    Product {
        id: id.to_string(),
        name: name.to_string(),
        price_cents,
        description: description.to_string(),
        category: category.to_string(),
        image: main.clone(),
        images: vec![main, format!("/images/products/{}/detail.jpg", image_key)],
        colors: colors.iter().map(|c| c.to_string()).collect(),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        flags: ProductFlags {
            is_new,
            featured,
            bestseller,
        },
    }
}
