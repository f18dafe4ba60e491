use methane_gradient::estimate_z;
use methane_gradient::methane::{
    ABSOLUTE_ZERO_C, Z_MAX, Z_MIN, rankine_from_celsius, rankine_from_celsius_via_kelvin,
};

fn approx_in_range(v: f64, min: f64, max: f64) {
    assert!((min..=max).contains(&v), "value {v} not in [{min}, {max}]");
}

#[test]
fn z_stays_within_bounds_for_physical_inputs() {
    let pressures = [1e-3, 1.0, 14.7, 230.0, 667.8, 2_000.0, 10_000.0, 1e6];
    let temps = [ABSOLUTE_ZERO_C, -273.0, -200.0, -82.6, 0.0, 25.0, 100.0, 1_000.0];
    for &p in &pressures {
        for &t in &temps {
            approx_in_range(estimate_z(p, t), Z_MIN, Z_MAX);
        }
    }
}

#[test]
fn z_does_not_increase_with_pressure() {
    for &t in &[-150.0, -50.0, 0.0, 30.0, 120.0] {
        let mut prev = estimate_z(1.0, t);
        let mut p = 1.0;
        while p < 20_000.0 {
            p *= 1.25;
            let z = estimate_z(p, t);
            assert!(z <= prev, "Z rose from {prev} to {z} at p={p}, t={t}");
            prev = z;
        }
    }
}

#[test]
fn lower_clamp_is_reached_at_high_pressure() {
    assert_eq!(estimate_z(20_000.0, 30.0), Z_MIN);
    assert!(estimate_z(1_000.0, 30.0) > Z_MIN);
}

#[test]
fn absolute_zero_is_accepted_and_clamped() {
    assert_eq!(estimate_z(230.0, ABSOLUTE_ZERO_C), Z_MIN);
}

#[test]
fn both_rankine_conversions_agree() {
    assert_eq!(rankine_from_celsius_via_kelvin(ABSOLUTE_ZERO_C), 0.0);
    for &t in &[ABSOLUTE_ZERO_C, -82.6, 0.0, 30.0, 1_000.0] {
        let a = rankine_from_celsius(t);
        let b = rankine_from_celsius_via_kelvin(t);
        assert!((a - b).abs() < 1e-9, "t={t}: {a} vs {b}");
    }
}
