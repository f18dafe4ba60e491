use crate::methane::*;
use crate::models::Inputs;
use serde::Serialize;

/// Result of a gas gradient calculation.
///
/// - `gradient`: pressure gradient of the gas column in psi/ft
/// - `z`: compressibility factor used for the density (already clamped)
/// - `density`: gas density in lb/ft³
/// - `temperature_abs`: absolute temperature in °R
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientResult {
    pub gradient: f64,
    pub z: f64,
    pub density: f64,
    pub temperature_abs: f64,
}

/// Summary returned for higher-level callers (CLI text, verbose and JSON output).
///
/// Echoes the inputs next to every intermediate so a report can be rendered
/// without recomputing anything.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GradientSummary {
    pub pressure_psi: f64,
    pub temp_c: f64,
    pub temp_rankine: f64,
    pub molecular_weight: f64,
    pub gas_constant: f64,
    pub z: f64,
    pub density_lb_per_ft3: f64,
    pub gradient_psi_per_ft: f64,
}

/// Estimate the compressibility factor Z of methane.
///
/// Single-term linear correlation `Z = 1 - 0.36 * Pr / Tr` on the reduced
/// pressure and temperature, clamped to `[Z_MIN, Z_MAX]`. The inputs are not
/// validated: out-of-range readings simply end up on one of the bounds. At
/// exactly absolute zero `Tr` is 0, the raw value is `-inf` and the result is
/// `Z_MIN`.
///
/// Parameters:
/// - `pressure_psi`: absolute pressure in psi
/// - `temp_c`: temperature in °C
pub fn estimate_z(pressure_psi: f64, temp_c: f64) -> f64 {
    let pr = reduced_pressure(pressure_psi);
    let tr = reduced_temperature(temp_c);

    let z_raw = 1.0 - Z_SLOPE * pr / tr;
    z_raw.clamp(Z_MIN, Z_MAX)
}

/// Compute the gas gradient of methane in psi/ft.
///
/// Density comes from the real-gas law `rho = P * MW / (Z * R * T)` with `Z`
/// from [`estimate_z`] and `T` in °R; the gradient is `rho / 144`. No checks
/// are made on the inputs, so callers should validate them first (see
/// [`Inputs::validate`]); a non-positive absolute temperature yields an
/// infinite or negative result.
pub fn calculate_gradient(pressure_psi: f64, temp_c: f64) -> GradientResult {
    let temperature_abs = rankine_from_celsius(temp_c);
    let z = estimate_z(pressure_psi, temp_c);

    let density = (pressure_psi * MW_METHANE) / (z * R_FIELD * temperature_abs);
    let gradient = density / PSI_PER_FT_DIVISOR;

    GradientResult {
        gradient,
        z,
        density,
        temperature_abs,
    }
}

/// Compute a `GradientSummary` for the given inputs.
pub fn compute_summary(inputs: &Inputs) -> GradientSummary {
    let r = calculate_gradient(inputs.pressure_psi, inputs.temp_c);

    GradientSummary {
        pressure_psi: inputs.pressure_psi,
        temp_c: inputs.temp_c,
        temp_rankine: r.temperature_abs,
        molecular_weight: MW_METHANE,
        gas_constant: R_FIELD,
        z: r.z,
        density_lb_per_ft3: r.density,
        gradient_psi_per_ft: r.gradient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_is_one_at_zero_pressure() {
        assert_eq!(estimate_z(0.0, 20.0), 1.0);
    }

    #[test]
    fn z_hits_lower_bound_for_dense_cold_gas() {
        assert_eq!(estimate_z(5000.0, -200.0), Z_MIN);
    }

    #[test]
    fn z_hits_upper_bound_for_negative_pressure() {
        // Not physical, but the estimator itself does not validate.
        assert_eq!(estimate_z(-5000.0, 20.0), Z_MAX);
    }

    #[test]
    fn z_at_absolute_zero_is_clamped() {
        assert_eq!(estimate_z(100.0, ABSOLUTE_ZERO_C), Z_MIN);
    }

    #[test]
    fn gradient_is_density_over_144() {
        let r = calculate_gradient(500.0, 25.0);
        assert_eq!(r.gradient, r.density / 144.0);
    }

    #[test]
    fn summary_matches_calculation() {
        let inputs = Inputs::new(230.0, 30.0);
        let s = compute_summary(&inputs);
        let r = calculate_gradient(230.0, 30.0);
        assert_eq!(s.gradient_psi_per_ft, r.gradient);
        assert_eq!(s.z, r.z);
        assert_eq!(s.temp_rankine, r.temperature_abs);
        assert_eq!(s.pressure_psi, 230.0);
    }
}
