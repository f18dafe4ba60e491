#![cfg_attr(not(feature = "std"), no_std)]

pub mod adapters;
#[cfg(feature = "std")]
pub mod error;
pub mod gradient;
pub mod methane;
pub mod models;

#[cfg(feature = "std")]
pub use crate::error::AppError;
pub use crate::gradient::calculator::{
    GradientResult, GradientSummary, calculate_gradient, compute_summary, estimate_z,
};
pub use crate::models::Inputs;
