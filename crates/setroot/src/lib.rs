//! setroot — build-time generator for root-reference propagation methods.
//!
//! The generator reads a model source file, selects the struct declarations
//! opted in via the `+rooted` marker, and emits one `set_root` method per
//! struct that hands a shared [`Rc`]-wrapped root object down through every
//! owned child and collection of children.
//!
//! ## Crate layout
//! - `parse`: model-source parsing and marker selection.
//! - `shape`: the closed field-shape classifier.
//! - `emit`: pure per-field / per-struct / per-module emission.
//! - `render`: syntactic validation and canonical formatting.
//!
//! [`Rc`]: std::rc::Rc

pub mod emit;
pub mod parse;
pub mod render;
pub mod shape;

use crate::{parse::ParseError, render::RenderError};
use thiserror::Error as ThisError;

/// Marker doc line that opts a struct declaration into generation.
pub const MARKER: &str = "+rooted";

/// Name of the generated propagation method.
pub const METHOD: &str = "set_root";

/// Reserved field name that receives the incoming root handle directly.
pub const ROOT_FIELD: &str = "root";

/// Type of the shared root object the generated methods propagate.
pub const ROOT_TYPE: &str = "Root";

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    RenderError(#[from] RenderError),
}

/// Generate the propagation module for the given model source.
///
/// Runs the whole pipeline: parse and select annotated structs, emit one
/// `impl` block per struct in declaration order, then validate and
/// canonically format the assembled module. No partial output: any failure
/// aborts the run before a single byte is produced.
pub fn generate(src: &str) -> Result<String, Error> {
    let structs = parse::parse_model(src)?;
    let tokens = emit::module(&structs);
    let formatted = render::render(&tokens)?;

    Ok(formatted)
}
