//! End-to-end runs of the lab exercises the solvers were written for.

use approx::assert_relative_eq;

use dichot_solvers::{
    equation::{root, scan},
    estimate,
    optimization::dichotomy,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn cosine_ramp(x: f64) -> f64 {
    x * (x / 2.28).cos() + 52.0_f64.sin()
}

fn root_config(epsilon: f64) -> root::Config {
    root::Config::new(epsilon).expect("valid epsilon")
}

#[test]
fn minimum_of_cosine_ramp_is_deterministic() {
    init_tracing();
    let config = dichotomy::Config::new(1e-5).expect("valid epsilon");

    let first = dichotomy::minimize_unobserved(&cosine_ramp, [-4.0, 0.0], &config).expect("first");
    let second =
        dichotomy::minimize_unobserved(&cosine_ramp, [-4.0, 0.0], &config).expect("second");

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_relative_eq!(first.x, -1.961_56, epsilon = 1e-4);
}

#[test]
fn traced_minimum_feeds_a_plot() {
    let config = dichotomy::Config::new(1e-5).expect("valid epsilon");

    let traced =
        dichotomy::minimize_with_history(&cosine_ramp, [-4.0, 0.0], &config).expect("traced");
    let (x, objective, records, widths) = traced.into_parts();

    assert_relative_eq!(x, -1.961_56, epsilon = 1e-4);
    assert_relative_eq!(objective, cosine_ramp(x));
    assert_eq!(records.len(), widths.len());
    assert_relative_eq!(widths[0], 4.0);
}

#[test]
fn linear_root_round_trip() {
    for c in [-7.5, 0.0, 0.125, 3.0, 1234.5] {
        let f = move |x: f64| x - c;

        let solution = root::find_root_unobserved(&f, [c - 10.0, c + 20.0], &root_config(1e-6))
            .expect("should converge");

        assert!((solution.x - c).abs() < 1e-6, "root of x - {c}: {}", solution.x);
    }
}

#[test]
fn lifted_parabola_has_no_root() {
    init_tracing();
    let f = |x: f64| x * x + 2.0;

    let result = root::find_root_checked_unobserved(&f, [-3.0, 5.0], &root_config(0.001));

    assert!(matches!(result, Err(root::Error::NoRoot { .. })));
}

#[test]
fn shifted_parabola_root_on_wide_bracket() {
    let f = |x: f64| x * x - 2.28 * x;

    let solution = root::find_root_checked_unobserved(&f, [0.000_01, 1000.0], &root_config(0.01))
        .expect("should converge");

    assert_relative_eq!(solution.x, 2.28, epsilon = 0.01);
}

#[test]
fn tangent_root_is_pi() {
    let solution = root::find_root_checked_unobserved(
        &f64::tan,
        [2.525_252_525_2, 4.2],
        &root_config(1e-4),
    )
    .expect("should converge");

    assert_relative_eq!(solution.x, std::f64::consts::PI, epsilon = 1e-4);
}

#[test]
fn scan_finds_both_square_roots_of_two() {
    init_tracing();
    let f = |x: f64| x * x - 2.0;

    let roots = scan::find_all_roots(&f, [-5.0, 5.0], &root_config(1e-4)).expect("scan");

    let xs: Vec<f64> = roots.iter().map(|root| root.x).collect();
    assert_eq!(xs.len(), 2);
    assert_relative_eq!(xs[0], -1.414_21, epsilon = 1e-4);
    assert_relative_eq!(xs[1], 1.414_21, epsilon = 1e-4);
}

#[test]
fn scan_over_huge_bracket_finds_single_root() {
    init_tracing();
    let f = |x: f64| x * x - 2.28 * x;

    let roots = scan::find_all_roots(&f, [0.0001, 10_000.0], &root_config(1e-4)).expect("scan");

    assert_eq!(roots.len(), 1);
    assert_relative_eq!(roots[0].x, 2.28, epsilon = 1e-4);
}

#[test]
fn bisection_depth_follows_estimate() {
    let bracket = [-30_000_000.0, 4.0];
    let epsilon = 0.001;
    let f = |x: f64| x - 2.0;

    let solution =
        root::find_root_unobserved(&f, bracket, &root_config(epsilon)).expect("should converge");
    let bound = estimate::max_iters(bracket, epsilon).expect("valid estimate");

    assert_eq!(bound, 36);
    assert!(
        solution.iters.abs_diff(bound) <= 1,
        "depth {} vs estimate {bound}",
        solution.iters
    );
    assert!((solution.x - 2.0).abs() < epsilon);
}
