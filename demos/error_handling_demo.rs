// demos/error_handling_demo.rs
use bs_greeks::analytics::{price_and_greeks, price_and_greeks_with, OptionParams};
use bs_greeks::config::PricingConfig;
use bs_greeks::error::BsError;
use bs_greeks::scenario::{price_grid, ScenarioRange};

fn main() {
    tracing_subscriber::fmt::init();

    println!("Error Handling Demo for bs-greeks");
    println!("=================================\n");

    // Test 1: Negative spot
    println!("1. Testing negative spot price...");
    match price_and_greeks(-100.0, 100.0, 1.0, 0.2, 0.05) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero strike
    println!("\n2. Testing zero strike...");
    match price_and_greeks(100.0, 0.0, 1.0, 0.2, 0.05) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Boundary inputs are priced, not rejected
    println!("\n3. Testing zero volatility (degenerate but valid)...");
    match price_and_greeks(100.0, 100.0, 1.0, 0.0, 0.05) {
        Ok(res) => println!(
            "   ✓ Priced at the limit: call = {:.4}, regime = {:?}",
            res.call_price, res.regime
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 4: Invalid configuration
    println!("\n4. Testing invalid day count...");
    let bad_cfg = PricingConfig {
        days_per_year: 0.0,
        ..Default::default()
    };
    match price_and_greeks_with(&OptionParams::new(100.0, 100.0, 1.0, 0.2, 0.05), &bad_cfg) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Empty grid axis
    println!("\n5. Testing empty volatility axis...");
    match price_grid(&[90.0, 100.0], &[], 100.0, 1.0, 0.05) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Overflowing discount factor
    println!("\n6. Testing absurd rate × maturity...");
    match price_and_greeks(100.0, 100.0, 1000.0, 0.2, -1000.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Error type matching
    println!("\n7. Testing error type matching...");
    match ScenarioRange::new(120.0, 80.0, 10) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(BsError::InvalidConfiguration { field, reason }) => {
            println!("   ✓ Caught InvalidConfiguration: {} ({})", field, reason);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
