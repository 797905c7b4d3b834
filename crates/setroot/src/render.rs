use proc_macro2::TokenStream;
use thiserror::Error as ThisError;

///
/// RenderError
///

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error("generated source failed validation: {source}")]
    InvalidOutput {
        source: syn::Error,
        /// Raw unformatted buffer, kept for the diagnostic dump.
        raw: String,
    },
}

impl RenderError {
    /// The raw buffer that failed validation.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::InvalidOutput { raw, .. } => raw,
        }
    }
}

/// Validate the assembled module and render it canonically.
///
/// The token stream is re-parsed as a full source file; anything that does
/// not parse is rejected before a byte reaches disk. Rendering goes through
/// `prettyplease`, so unchanged input always produces byte-identical output.
pub fn render(tokens: &TokenStream) -> Result<String, RenderError> {
    let raw = tokens.to_string();
    let file = syn::parse_file(&raw).map_err(|source| RenderError::InvalidOutput {
        source,
        raw: raw.clone(),
    })?;

    Ok(prettyplease::unparse(&file))
}

///
/// TESTS
///
