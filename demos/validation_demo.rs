// demos/validation_demo.rs
use ito_mc::error::SimError;
use ito_mc::mc::engine::simulate;
use ito_mc::params::SimulationParameters;

fn main() {
    println!("Parameter Validation Demo for ito-mc");
    println!("====================================\n");

    // Test 1: Non-positive initial value
    println!("1. Testing non-positive initial value...");
    match SimulationParameters::builder().initial_value(-100.0).build() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Negative volatility
    println!("\n2. Testing negative volatility...");
    match SimulationParameters::builder().volatility(-0.4).build() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Non-finite drift
    println!("\n3. Testing non-finite drift...");
    match SimulationParameters::builder().drift(f64::NAN).build() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Zero paths
    println!("\n4. Testing zero path count...");
    match SimulationParameters::builder().path_count(0).build() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Step count over the cap
    println!("\n5. Testing excessive step count...");
    match SimulationParameters::builder()
        .horizon_years(10.0)
        .steps_per_year(50_000)
        .build()
    {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Zero volatility is valid (the correction term vanishes)
    println!("\n6. Testing zero volatility (valid boundary)...");
    match SimulationParameters::builder()
        .volatility(0.0)
        .path_count(100)
        .random_seed(1)
        .build()
    {
        Ok(params) => {
            let output = simulate(&params);
            println!(
                "   ✓ Simulated deterministic paths; final value = {:.4}",
                output.corrected.final_values()[0]
            );
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 7: Error type matching
    println!("\n7. Testing error type matching...");
    match SimulationParameters::builder().volatility(-0.1).build() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(SimError::InvalidParameter {
            parameter,
            value,
            constraint,
        }) => {
            println!(
                "   ✓ Caught InvalidParameter: {} = {} ({})",
                parameter, value, constraint
            );
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Validation demo complete!");
    println!("Every invalid range was rejected at the construction boundary.");
}
