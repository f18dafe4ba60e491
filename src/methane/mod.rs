//! Methane module: physical constants and unit helpers for the gas gradient.
//!
//! This module provides:
//! - Critical-point properties of methane used to form reduced pressure and temperature
//! - Molecular weight and the field-unit universal gas constant
//! - Bounds for the simplified compressibility correlation
//! - Celsius to Rankine conversions (direct offset and via Kelvin)
//!
//! Units conventions:
//! - Pressure in psi (absolute)
//! - Temperature inputs in °C, absolute temperatures in °R
//! - Density in lb/ft³, gradient in psi/ft
//!
//! # Examples
//! ```rust
//! use methane_gradient::methane::{rankine_from_celsius, rankine_from_celsius_via_kelvin};
//!
//! let direct = rankine_from_celsius(30.0);
//! let via_k = rankine_from_celsius_via_kelvin(30.0);
//! assert!((direct - via_k).abs() < 1e-9);
//! ```
//!
//! # Panics
//! None of the functions panic.

/// Critical pressure of methane (psi).
pub const P_CRITICAL_PSI: f64 = 667.8;
/// Critical temperature of methane (°C), i.e. 190.55 K.
pub const T_CRITICAL_C: f64 = -82.6;

/// Molecular weight of methane (lb/lb-mol).
pub const MW_METHANE: f64 = 16.04;
/// Universal gas constant in field units: psi·ft³/(lb-mol·°R).
pub const R_FIELD: f64 = 10.732;

/// Divisor turning a density in lb/ft³ into a gradient in psi/ft (in² per ft²).
pub const PSI_PER_FT_DIVISOR: f64 = 144.0;

/// Slope of the single-term compressibility correlation.
pub const Z_SLOPE: f64 = 0.36;
/// Lower bound of the compressibility factor.
pub const Z_MIN: f64 = 0.5;
/// Upper bound of the compressibility factor.
pub const Z_MAX: f64 = 1.2;

/// Absolute zero in °C; the lowest temperature accepted as input.
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

const KELVIN_OFFSET: f64 = 273.15;
const RANKINE_OFFSET: f64 = 491.67;
const RANKINE_PER_KELVIN: f64 = 9.0 / 5.0;

/// Celsius to Rankine with the direct offset: `t * 9/5 + 491.67`.
pub fn rankine_from_celsius(temp_c: f64) -> f64 {
    temp_c * RANKINE_PER_KELVIN + RANKINE_OFFSET
}

/// Celsius to Rankine through Kelvin: `(t + 273.15) * 9/5`.
///
/// Algebraically equal to [`rankine_from_celsius`]; the two may differ in the
/// last few ulps. This form is exactly zero at absolute zero.
pub fn rankine_from_celsius_via_kelvin(temp_c: f64) -> f64 {
    (temp_c + KELVIN_OFFSET) * RANKINE_PER_KELVIN
}

/// Critical temperature of methane in °R.
pub fn t_critical_rankine() -> f64 {
    rankine_from_celsius_via_kelvin(T_CRITICAL_C)
}

/// Reduced pressure `P / Pc`.
pub fn reduced_pressure(pressure_psi: f64) -> f64 {
    pressure_psi / P_CRITICAL_PSI
}

/// Reduced temperature `T / Tc`, both on the Rankine-via-Kelvin scale.
pub fn reduced_temperature(temp_c: f64) -> f64 {
    rankine_from_celsius_via_kelvin(temp_c) / t_critical_rankine()
}
