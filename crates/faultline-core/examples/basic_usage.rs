//! Basic usage example for faultline-core
//!
//! Run with: cargo run --example basic_usage

use faultline_core::{
    fail, succeed, succeed_with, FaultContainer, Outcome, ValueContainer, ValueOutcome,
};

fn parse_amount(raw: &str) -> ValueOutcome<String, f64> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount >= 0.0 => succeed_with(amount).into(),
        Ok(amount) => fail(format!("negative amount: {}", amount)).into(),
        Err(e) => fail(format!("invalid amount '{}': {}", raw, e)).into(),
    }
}

fn check_limit(amount: f64, limit: f64) -> Outcome<String> {
    if amount > limit {
        return fail(format!("{} exceeds limit {}", amount, limit)).into();
    }
    succeed().into()
}

fn main() {
    println!("=== faultline Core Basic Usage Example ===\n");

    // Example 1: Safe accessors
    println!("1. Safe Accessors:");
    for raw in ["125.5", "-3", "abc"] {
        match parse_amount(raw).try_get_value_or_fault() {
            Ok(amount) => println!("   {:>6} -> value {}", raw, amount),
            Err(fault) => println!("   {:>6} -> fault {}", raw, fault),
        }
    }
    println!();

    // Example 2: Assertions
    println!("2. Assertions:");
    let within = check_limit(50.0, 100.0);
    let over = check_limit(500.0, 100.0);
    println!("   within limit: {:?}", within.ensure_succeeded());
    println!("   over limit:   {:?}\n", over.ensure_succeeded());

    // Example 3: Raising accessors with a custom error
    println!("3. Custom Errors:");
    let outcome = parse_amount("abc");
    let result = outcome.get_value_or_throw_else(|fault| format!("rejected: {}", fault));
    println!("   {:?}", result);
    let outcome = parse_amount("10");
    let result = outcome.get_fault_or_throw();
    println!("   {:?}\n", result);

    println!("=== Example Complete ===");
}
