//! CLI logic for the isodraw scene tool.
//!
//! Reads a TOML scene, evaluates it, and writes the resulting drawing as
//! TOML.

pub mod error_adapter;
pub mod output;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use isodraw::{IsodrawError, SceneBuilder};

/// Run the isodraw CLI application
///
/// This function evaluates the input scene on a fresh drawing and writes
/// the resulting items to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `IsodrawError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene syntax errors
/// - Failing scene steps
/// - Export errors
pub fn run(args: &Args) -> Result<(), IsodrawError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Evaluate the scene using the SceneBuilder API
    let builder = SceneBuilder::new(app_config);
    let scene = builder.parse(&source)?;
    let evaluation = builder.evaluate(&scene)?;

    // Write output file
    let document = output::render(evaluation.drawing())?;
    fs::write(&args.output, document)?;

    info!(
        output_file = args.output,
        items = evaluation.drawing().len();
        "Drawing exported successfully"
    );

    Ok(())
}
