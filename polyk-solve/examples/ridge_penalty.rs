//! Solves an L² regularization budget in closed form.
//!
//! The constraint `Σ wᵢ·θᵢ² = λ` fixes the total penalty mass across 20
//! parameters. The shared parameter `k` decides how much of the budget each
//! trailing coordinate carries; the leading coordinate absorbs the rest.

use polyk_core::Problem;
use polyk_solve::formula::{self, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let n = 20;
    let lambda = 10.0;

    let weights = vec![1.0; n];
    let exponents = vec![2.0; n];
    let problem = Problem::new(weights, exponents, lambda)?;

    // Caller-side heuristic: spread the penalty budget evenly.
    let k = lambda / n as f64;

    let solution = formula::solve(&problem, k, &Config::default())?;

    println!("penalty budget: {lambda}");
    println!("parameter k:    {k}");
    println!("theta[0]:       {:.6}", solution.x[0]);
    println!("theta[1..]:     {:.6} (uniform)", solution.x[1]);
    println!("constraint sum: {:.10}", solution.constraint_value);
    println!("status:         {:?}", solution.status);

    let verification = problem.verify_default(&solution.x)?;
    println!(
        "verification:   {} (error {:.2e})",
        if verification.is_valid { "PASS" } else { "FAIL" },
        verification.error,
    );

    Ok(())
}
