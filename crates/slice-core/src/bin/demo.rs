//! # Pricing Demo
//!
//! Replays a scripted pricing session against the default menu.
//!
//! ## Usage
//! ```bash
//! cargo run -p slice-core --bin demo
//!
//! # With debug logs from the pricing facade
//! RUST_LOG=debug cargo run -p slice-core --bin demo
//! ```
//!
//! This is a usage example, not a component: the engine's public surface is
//! the programmatic API, and this binary just walks it once.

use slice_core::session::PricingSession;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Slice Pricing Demo");
    println!("==================");
    println!("Pizza: base 200, tax 10%, size small");
    println!();

    // Step 1: Initialize session
    let mut session = PricingSession::new(200, 10, "small")?;
    println!("PRICE 1 (no toppings): {}", session.final_price());

    // Step 2: Add 1 mushroom
    let added = session.try_add_topping("mushroom", 1);
    println!("Add mushroom(1): {}", added);
    println!("PRICE 2 (after mushroom): {}", session.final_price());

    // Step 3: Try adding cheeseburst (conflicts with mushroom)
    match session.add_topping("cheeseburst", 1) {
        Ok(()) => println!("Add cheeseburst(1): true"),
        Err(err) => println!("Add cheeseburst(1): false ({})", err),
    }
    println!("PRICE 3 (after failed cheeseburst): {}", session.final_price());

    // Step 4: Add 3 onions
    let added = session.try_add_topping("onion", 3);
    println!("Add onion(3): {}", added);
    println!("PRICE 4 (after onion): {}", session.final_price());

    // Step 5: Add 2 more mushrooms
    let added = session.try_add_topping("mushroom", 2);
    println!("Add mushroom(2): {}", added);
    println!("PRICE 5 (final): {}", session.final_price());

    Ok(())
}
