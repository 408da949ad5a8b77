//! Runs the lab exercises: one minimization, a few root searches and a scan.
//!
//! ```text
//! RUST_LOG=debug cargo run -p dichot-solvers --example lab
//! ```

use std::error::Error;

use dichot_solvers::{
    equation::{root, scan},
    estimate,
    optimization::dichotomy,
};
use tracing_subscriber::EnvFilter;

fn cosine_ramp(x: f64) -> f64 {
    x * (x / 2.28).cos() + 52.0_f64.sin()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bracket = [-4.0, 0.0];
    let config = dichotomy::Config::new(1e-5)?;
    let traced = dichotomy::minimize_with_history(&cosine_ramp, bracket, &config)?;
    println!(
        "minimum of x cos(x / 2.28) + sin 52 on {bracket:?}: x = {:.8}, f(x) = {:.8}, \
         {} iterations (estimate {:.2})",
        traced.x,
        traced.objective,
        traced.iters,
        estimate::iterations(bracket, config.epsilon())?,
    );
    for (i, record) in traced.history.records().iter().enumerate().take(5) {
        println!(
            "  {:>2}: [{:.6}, {:.6}] mid {:.6} width {:.6}",
            i + 1,
            record.lower,
            record.upper,
            record.midpoint,
            record.width()
        );
    }

    let tan = root::find_root_checked_unobserved(
        &f64::tan,
        [2.525_252_525_2, 4.2],
        &root::Config::new(1e-4)?,
    )?;
    println!("root of tan x: x = {:.6} at depth {}", tan.x, tan.iters);

    let shifted = |x: f64| x * x - 2.28 * x;
    let solution = root::find_root_checked_unobserved(
        &shifted,
        [0.000_01, 1000.0],
        &root::Config::new(0.01)?,
    )?;
    println!("root of x^2 - 2.28x: x = {:.4}", solution.x);

    let lifted = |x: f64| x * x + 2.0;
    match root::find_root_checked_unobserved(&lifted, [-3.0, 5.0], &root::Config::new(0.001)?) {
        Err(root::Error::NoRoot { extremum, .. }) => {
            println!("x^2 + 2 has no root; its extremum is near {extremum:.4}");
        }
        other => println!("unexpected result for x^2 + 2: {other:?}"),
    }

    let square_two = |x: f64| x * x - 2.0;
    let roots = scan::find_all_roots(&square_two, [-5.0, 5.0], &root::Config::new(1e-4)?)?;
    let xs: Vec<f64> = roots.iter().map(|root| root.x).collect();
    println!("roots of x^2 - 2: {xs:.5?}");

    let wide = [-30_000_000.0, 4.0];
    let linear = root::find_root_unobserved(&|x: f64| x - 2.0, wide, &root::Config::new(0.001)?)?;
    println!(
        "root of x - 2 on {wide:?}: depth {} (estimate {})",
        linear.iters,
        estimate::max_iters(wide, 0.001)?
    );

    Ok(())
}
