use serde::{Deserialize, Serialize};

/// One pressure/temperature reading to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Absolute pressure in psi.
    pub pressure_psi: f64,
    /// Temperature in °C.
    pub temp_c: f64,
}

impl Inputs {
    pub fn new(pressure_psi: f64, temp_c: f64) -> Self {
        Self {
            pressure_psi,
            temp_c,
        }
    }

    /// Rejects readings the gradient model is not defined for.
    ///
    /// Pressure must be finite and strictly positive; temperature must be
    /// finite and not below absolute zero (-273.15 °C itself is accepted).
    #[cfg(feature = "std")]
    pub fn validate(&self) -> Result<(), crate::error::AppError> {
        use crate::error::AppError;
        use crate::methane::ABSOLUTE_ZERO_C;

        if !(self.pressure_psi.is_finite() && self.pressure_psi > 0.0) {
            return Err(AppError::InvalidPressure {
                value: self.pressure_psi,
            });
        }
        if !(self.temp_c.is_finite() && self.temp_c >= ABSOLUTE_ZERO_C) {
            return Err(AppError::InvalidTemperature { value: self.temp_c });
        }
        Ok(())
    }
}
