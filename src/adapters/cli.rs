use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::gradient::calculator::GradientSummary;
use crate::models::Inputs;

const RULE: &str = "============================================================";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Calculate methane gas gradient in PSI/ft",
    long_about = None,
    after_help = "Examples:\n  methane_gradient --pressure 230 --temperature 30\n  methane_gradient -p 500 -t 25 --verbose\n  methane_gradient -p 1000 -t 50 -v"
)]
pub struct Args {
    #[arg(short, long, value_name = "PSI", allow_negative_numbers = true, help = "Pressure in PSI")]
    pressure: Option<f64>,
    #[arg(
        short,
        long,
        value_name = "CELSIUS",
        allow_negative_numbers = true,
        help = "Temperature in degrees Celsius"
    )]
    temperature: Option<f64>,
    #[arg(short, long, help = "Print detailed calculation steps")]
    verbose: bool,
    #[arg(long, help = "Print the result as JSON")]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with pressure_psi and temp_c; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON with pressure_psi and temp_c (overrides --input)"
    )]
    inputs_json: Option<String>,
}

fn parse_cmd_input_doc(doc: &str) -> Result<Inputs, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })
}

/// Resolve the reading from the command line.
///
/// An explicit `--pressure`/`--temperature` pair wins over `--inputs-json`,
/// which wins over `--input`.
pub fn parse_inputs(args: &Args) -> Result<Inputs, AppError> {
    match (args.pressure, args.temperature) {
        (Some(p), Some(t)) => return Ok(Inputs::new(p, t)),
        (Some(_), None) => {
            return Err(AppError::IncompleteInputs {
                given: "pressure",
                missing: "temperature",
            });
        }
        (None, Some(_)) => {
            return Err(AppError::IncompleteInputs {
                given: "temperature",
                missing: "pressure",
            });
        }
        (None, None) => {}
    }

    match (&args.inputs_json, &args.input) {
        (Some(inputs_json), _) => serde_json::from_str(inputs_json)
            .map_err(|source| AppError::ParseInputsJson { source }),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

/// Multi-line labeled report of inputs, constants, intermediates and result.
pub fn render_report(out: &GradientSummary) -> String {
    let mut s = String::new();
    s.push('\n');
    s.push_str(&format!("{RULE}\n"));
    s.push_str("Methane Gas Gradient Calculation\n");
    s.push_str(&format!("{RULE}\n"));
    s.push_str("Input Parameters:\n");
    s.push_str(&format!("  Pressure:           {:.2} psi\n", out.pressure_psi));
    s.push_str(&format!(
        "  Temperature:        {:.2} °C ({:.2} °R)\n",
        out.temp_c, out.temp_rankine
    ));
    s.push_str("\nConstants:\n");
    s.push_str(&format!(
        "  Molecular Weight:   {} lb/lb-mol\n",
        out.molecular_weight
    ));
    s.push_str(&format!(
        "  Gas Constant (R):   {} psi·ft³/(lb-mol·°R)\n",
        out.gas_constant
    ));
    s.push_str("\nCalculated Values:\n");
    s.push_str(&format!("  Compressibility (Z): {:.4}\n", out.z));
    s.push_str(&format!(
        "  Gas Density:        {:.6} lb/ft³\n",
        out.density_lb_per_ft3
    ));
    s.push_str("\nResult:\n");
    s.push_str(&format!(
        "  Gas Gradient:       {:.6} psi/ft\n",
        out.gradient_psi_per_ft
    ));
    s.push_str(&format!("{RULE}\n"));
    s
}

pub fn print_output(out: &GradientSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else if args.verbose {
        println!("{}", render_report(out));
    } else {
        println!("{:.6}", out.gradient_psi_per_ft);
    }

    Ok(())
}
