mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{assert_position_close, earth_like, halley_like};
use orrery::constants::{DEFAULT_ORBIT_SEGMENTS, DPI};
use orrery::kepler::{solve_eccentric_anomaly, KeplerSolver};
use orrery::orbital_elements::OrbitalElements;
use orrery::orrery_errors::OrreryError;
use orrery::propagator::KeplerPropagator;

fn random_elements(rng: &mut StdRng) -> OrbitalElements {
    let a = rng.random_range(0.3..40.0);
    OrbitalElements::new(
        "random",
        a,
        rng.random_range(0.0..std::f64::consts::PI),
        rng.random::<f64>() * DPI,
        rng.random_range(0.0..0.99),
        rng.random::<f64>() * DPI,
        f64::powf(a, 1.5),
        rng.random_range(-10.0..10.0),
    )
    .unwrap()
}

#[test]
fn earth_like_orbit_starts_near_perihelion() {
    let pos = KeplerPropagator::default()
        .position_at_time(&earth_like(), 0.0)
        .unwrap();
    assert_relative_eq!(pos.norm(), 0.9833, epsilon = 1e-9);
}

#[test]
fn hyperbolic_elements_are_rejected() {
    let err = OrbitalElements::from_degrees("1I/'Oumuamua", 1.0, 122.7, 241.8, 1.2, 24.6, 1.0, 0.0)
        .unwrap_err();
    assert!(matches!(err, OrreryError::InvalidElements { .. }));
}

#[test]
fn propagation_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(42);
    let prop = KeplerPropagator::default();
    for _ in 0..200 {
        let el = random_elements(&mut rng);
        let dt = rng.random_range(-500.0..500.0);
        assert_eq!(
            prop.position_at_time(&el, dt).unwrap(),
            prop.position_at_time(&el, dt).unwrap()
        );
    }
}

#[test]
fn true_anomaly_is_periodic() {
    let mut rng = StdRng::seed_from_u64(7);
    let prop = KeplerPropagator::default();
    for _ in 0..200 {
        let el = random_elements(&mut rng);
        let theta = rng.random_range(-10.0..10.0);
        assert_position_close(
            &prop.position_at_true_anomaly(&el, theta),
            &prop.position_at_true_anomaly(&el, theta + DPI),
            1e-9 * el.aphelion_distance(),
        );
    }
}

#[test]
fn circular_orbit_has_constant_radius() {
    let el = OrbitalElements::from_degrees("ring", 2.5, 30.0, 45.0, 0.0, 60.0, 3.95, 0.0).unwrap();
    let prop = KeplerPropagator::default();
    for k in 0..72 {
        let theta = k as f64 * DPI / 72.0;
        assert_eq!(prop.radial_distance(&el, theta), 2.5);
        assert_relative_eq!(
            prop.position_at_true_anomaly(&el, theta).norm(),
            2.5,
            epsilon = 1e-12
        );
    }
}

#[test]
fn kepler_residual_on_one_revolution() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..10_000 {
        let m = rng.random::<f64>() * DPI;
        let e = rng.random_range(0.0..=0.99);
        let ecc_anom = solve_eccentric_anomaly(m, e, 1e-6).unwrap();
        assert!((ecc_anom - e * ecc_anom.sin() - m).abs() < 1e-6);
    }
}

#[test]
fn kepler_converges_within_cap_for_wide_mean_anomalies() {
    let solver = KeplerSolver::default();
    assert_eq!(solver.max_iterations, 100);

    let steps = 400;
    for i in 0..=steps {
        let m = -100.0 + 200.0 * i as f64 / steps as f64;
        for j in 0..=99 {
            let e = 0.01 * j as f64;
            assert!(
                solver.solve_eccentric_anomaly(m, e).is_ok(),
                "no convergence for M = {m}, e = {e}"
            );
        }
    }
}

#[test]
fn orbit_path_is_closed() {
    let prop = KeplerPropagator::default();
    for el in [earth_like(), halley_like()] {
        let path = prop.orbit_path(&el, DEFAULT_ORBIT_SEGMENTS);
        assert_eq!(path.len(), DEFAULT_ORBIT_SEGMENTS + 1);
        assert_position_close(&path[0], &path[DEFAULT_ORBIT_SEGMENTS], 1e-9);
    }
}

#[test]
fn time_and_true_anomaly_conventions_agree() {
    let prop = KeplerPropagator::default();
    let el = halley_like();
    for dt in [0.0, 3.7, 37.66, 70.0] {
        let theta = prop.true_anomaly_at(&el, dt).unwrap();
        assert_eq!(
            prop.position_at_time(&el, dt).unwrap(),
            prop.position_at_true_anomaly(&el, theta)
        );
    }
}

#[test]
fn retrograde_orbit_moves_clockwise() {
    // Halley is retrograde (i > 90°): angular momentum points to −z.
    let prop = KeplerPropagator::default();
    let el = halley_like();
    let r0 = prop.position_at_time(&el, 0.0).unwrap();
    let r1 = prop.position_at_time(&el, 0.01).unwrap();
    assert!(r0.cross(&r1).z < 0.0);
    assert_abs_diff_eq!(
        r0.norm(),
        prop.radial_distance(&el, prop.true_anomaly_at(&el, 0.0).unwrap()),
        epsilon = 1e-12
    );
}
