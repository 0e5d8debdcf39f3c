// ============================================================================
// Basic Usage Example
// ============================================================================

use coda_currency::prelude::*;
use coda_currency::utils::init_logging;

fn main() -> Result<(), CurrencyError> {
    init_logging(tracing::Level::DEBUG);

    println!("=== Coda Currency Example ===\n");

    // Construct amounts in different formats
    let balance = Currency::from_whole("250.75")?;
    let amount = Currency::from_whole(100)?;
    let fee = Currency::new(10_000_000, CurrencyFormat::Nano)?;

    println!("Balance: {}", balance);
    println!("Amount:  {}", amount);
    println!("Fee:     {} ({} nano)\n", fee, fee.to_nano());

    // Send two payments
    let mut remaining = balance;
    for i in 1..=2 {
        let total = (amount + fee)?;
        remaining = (remaining - total)?;
        println!("After payment {}: {}", i, remaining);
    }

    // A third payment would overdraw the balance
    match remaining - (amount + fee)? {
        Ok(_) => println!("Unexpected: third payment succeeded"),
        Err(err) => println!("Third payment rejected: {}\n", err),
    }

    // Random fees between 0.01 and 0.1
    let min_fee = Currency::from_whole("0.01")?;
    let max_fee = Currency::from_whole("0.1")?;
    println!("Random fees in [{}, {}]:", min_fee, max_fee);
    for _ in 0..5 {
        println!("  {:?}", Currency::random_between(min_fee, max_fee)?);
    }

    // Malformed input is rejected, not rounded
    for input in ["1.0000000001", "1.2.3", "one"] {
        if let Err(err) = Currency::from_whole(input) {
            println!("{:>14} -> {}", input, err);
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
