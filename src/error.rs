#[cfg(feature = "std")]
use thiserror::Error;

#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Pressure must be positive (got {value})")]
    InvalidPressure { value: f64 },

    #[error("Temperature cannot be below absolute zero (got {value} °C)")]
    InvalidTemperature { value: f64 },

    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --inputs-json: {source}")]
    ParseInputsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --pressure and --temperature, --input or --inputs-json")]
    MissingInputData,

    #[cfg(feature = "cli")]
    #[error("Incomplete inputs: --{missing} is required together with --{given}")]
    IncompleteInputs {
        given: &'static str,
        missing: &'static str,
    },
}
