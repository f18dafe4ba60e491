#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs};
    use crate::gradient::calculator::compute_summary;

    let args = Args::parse();
    let inputs = parse_inputs(&args)?;
    inputs.validate()?;

    let out = compute_summary(&inputs);

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
