#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use orrery::constants::Position;
use orrery::orbital_elements::OrbitalElements;

pub fn earth_like() -> OrbitalElements {
    OrbitalElements::from_degrees("Earth", 1.0, 0.0, 114.2, 0.0167, -11.26, 1.0, 0.0).unwrap()
}

pub fn halley_like() -> OrbitalElements {
    OrbitalElements::from_degrees("1P/Halley", 17.83, 162.26, 111.33, 0.967, 58.42, 75.32, 38.38)
        .unwrap()
}

pub fn assert_position_close(actual: &Position, expected: &Position, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = epsilon);
}
