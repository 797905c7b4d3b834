//! setroot binary.
//!
//! Fixed-path invocation: reads the model source, writes the generated
//! propagation module. No flags, no environment configuration. Exit code is
//! zero on success, non-zero on any failure; a failed run never touches the
//! output artifact.

mod logging;

use setroot::Error;
use std::{fs, process::ExitCode};
use thiserror::Error as ThisError;
use tracing::info;

/// Model source consumed by the generator.
const INPUT_PATH: &str = "src/model.rs";

/// Generated artifact, fully replaced on success.
const OUTPUT_PATH: &str = "src/set_root_gen.rs";

///
/// RunError
///

#[derive(Debug, ThisError)]
enum RunError {
    #[error("failed to read {INPUT_PATH}: {0}")]
    Read(std::io::Error),

    #[error(transparent)]
    Generate(#[from] Error),

    #[error("failed to write {OUTPUT_PATH}: {0}")]
    Write(std::io::Error),
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Dump the raw buffer so a bad emission can be debugged.
            if let RunError::Generate(Error::RenderError(render)) = &error {
                eprintln!("{}", render.raw());
            }
            eprintln!("error: {error}");

            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RunError> {
    let src = fs::read_to_string(INPUT_PATH).map_err(RunError::Read)?;
    let generated = setroot::generate(&src)?;

    // The write only happens after validation and formatting succeed, so a
    // failing run leaves the previous artifact in place.
    fs::write(OUTPUT_PATH, generated).map_err(RunError::Write)?;
    info!("wrote {OUTPUT_PATH}");

    Ok(())
}
